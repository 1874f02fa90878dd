pub mod auth;
pub mod error;
pub mod extract;
pub mod health;
pub mod notes;
pub mod openapi;

use axum::Router;
use axum::extract::MatchedPath;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::infrastructure::db::DbPool;

const ALLOWED_METHODS: [http::Method; 5] = [
    http::Method::GET,
    http::Method::POST,
    http::Method::PUT,
    http::Method::DELETE,
    http::Method::OPTIONS,
];

fn cors_layer(cfg: &Config) -> CorsLayer {
    let origin = match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(v)) => AllowOrigin::exact(v),
        Some(Err(_)) | None if cfg.is_production => {
            AllowOrigin::exact(HeaderValue::from_static("http://invalid"))
        }
        // Development convenience
        _ => AllowOrigin::mirror_request(),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
}

/// The full HTTP surface: users, notes, health and API docs.
pub fn router(ctx: AppContext, pool: DbPool) -> Router {
    let cors = cors_layer(&ctx.cfg);
    Router::new()
        .merge(health::routes(pool))
        .merge(auth::routes(ctx.clone()))
        .merge(notes::routes(ctx))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}
