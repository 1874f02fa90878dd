pub mod note_repository;
pub mod translation_port;
pub mod user_repository;
