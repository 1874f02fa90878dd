// Module layout (Clean Architecture style)
// - bootstrap: configuration and service wiring
// - infrastructure: SQLite repositories and the translation HTTP client
// - presentation: HTTP handlers and routing
// - application: ports, access policy, auth service and use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
