use utoipa::OpenApi;

use crate::presentation::http::{auth, error, health, notes};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::me,
        notes::create_note,
        notes::list_notes,
        notes::get_note,
        notes::update_note,
        notes::delete_note,
        notes::translate_note_text,
        health::health,
    ),
    components(schemas(
        auth::Credentials,
        auth::MessageResponse,
        auth::TokenResponse,
        auth::UserResponse,
        notes::Note,
        notes::NoteRequest,
        notes::DeleteResponse,
        notes::TranslationRequest,
        notes::TranslationResponse,
        health::HealthResp,
        error::ErrorBody,
    )),
    tags(
        (name = "Users", description = "Registration and login"),
        (name = "Notes", description = "Notes and translation"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;
