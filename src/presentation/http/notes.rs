use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::translation_port::Translation;
use crate::application::use_cases::notes::create_note::CreateNote;
use crate::application::use_cases::notes::delete_note::DeleteNote;
use crate::application::use_cases::notes::get_note::GetNote;
use crate::application::use_cases::notes::list_notes::ListNotes;
use crate::application::use_cases::notes::translate_text::{
    DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG, TranslateText,
};
use crate::application::use_cases::notes::update_note::UpdateNote;
use crate::bootstrap::app_context::AppContext;
use crate::domain::notes::note as domain;
use crate::presentation::http::auth::{MaybeBearer, resolve_actor};
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::{ApiJson, ApiPath};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<domain::Note> for Note {
    fn from(n: domain::Note) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NoteRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub detail: String,
}

fn default_source_lang() -> String {
    DEFAULT_SOURCE_LANG.into()
}

fn default_target_lang() -> String {
    DEFAULT_TARGET_LANG.into()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/notes/", get(list_notes).post(create_note))
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/translate", post(translate_note_text))
        .route(
            "/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .with_state(ctx)
}

#[utoipa::path(post, path = "/notes/", tag = "Notes", request_body = NoteRequest, responses(
    (status = 200, body = Note),
    (status = 401, body = ErrorBody, description = "Owner policy and no valid token")
))]
pub async fn create_note(
    State(ctx): State<AppContext>,
    bearer: MaybeBearer,
    ApiJson(req): ApiJson<NoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let actor = resolve_actor(&ctx, bearer).await?;
    let repo = ctx.note_repo();
    let uc = CreateNote {
        repo: repo.as_ref(),
        policy: ctx.cfg.notes_ownership,
    };
    let note = uc.execute(&actor, &req.title, &req.content).await?;
    Ok(Json(note.into()))
}

#[utoipa::path(get, path = "/notes/", tag = "Notes", responses(
    (status = 200, body = [Note])
))]
pub async fn list_notes(
    State(ctx): State<AppContext>,
    bearer: MaybeBearer,
) -> Result<Json<Vec<Note>>, ApiError> {
    let actor = resolve_actor(&ctx, bearer).await?;
    let repo = ctx.note_repo();
    let uc = ListNotes {
        repo: repo.as_ref(),
        policy: ctx.cfg.notes_ownership,
    };
    let notes = uc.execute(&actor).await?;
    Ok(Json(notes.into_iter().map(Note::from).collect()))
}

#[utoipa::path(get, path = "/notes/{id}", tag = "Notes",
    params(("id" = i64, Path, description = "Note ID")),
    responses((status = 200, body = Note), (status = 404, body = ErrorBody)))]
pub async fn get_note(
    State(ctx): State<AppContext>,
    bearer: MaybeBearer,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Note>, ApiError> {
    let actor = resolve_actor(&ctx, bearer).await?;
    let repo = ctx.note_repo();
    let uc = GetNote {
        repo: repo.as_ref(),
        policy: ctx.cfg.notes_ownership,
    };
    Ok(Json(uc.execute(&actor, id).await?.into()))
}

#[utoipa::path(put, path = "/notes/{id}", tag = "Notes", request_body = NoteRequest,
    params(("id" = i64, Path, description = "Note ID")),
    responses((status = 200, body = Note), (status = 404, body = ErrorBody)))]
pub async fn update_note(
    State(ctx): State<AppContext>,
    bearer: MaybeBearer,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<NoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let actor = resolve_actor(&ctx, bearer).await?;
    let repo = ctx.note_repo();
    let uc = UpdateNote {
        repo: repo.as_ref(),
        policy: ctx.cfg.notes_ownership,
    };
    let note = uc.execute(&actor, id, &req.title, &req.content).await?;
    Ok(Json(note.into()))
}

#[utoipa::path(delete, path = "/notes/{id}", tag = "Notes",
    params(("id" = i64, Path, description = "Note ID")),
    responses((status = 200, body = DeleteResponse), (status = 404, body = ErrorBody)))]
pub async fn delete_note(
    State(ctx): State<AppContext>,
    bearer: MaybeBearer,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let actor = resolve_actor(&ctx, bearer).await?;
    let repo = ctx.note_repo();
    let uc = DeleteNote {
        repo: repo.as_ref(),
        policy: ctx.cfg.notes_ownership,
    };
    uc.execute(&actor, id).await?;
    Ok(Json(DeleteResponse {
        detail: "Note deleted".into(),
    }))
}

#[utoipa::path(post, path = "/notes/translate", tag = "Notes", request_body = TranslationRequest, responses(
    (status = 200, body = TranslationResponse),
    (status = 502, body = ErrorBody, description = "Translation provider failed")
))]
pub async fn translate_note_text(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<TranslationRequest>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let translator = ctx.translator();
    let uc = TranslateText {
        translator: translator.as_ref(),
    };
    match uc
        .execute(&req.text, &req.source_lang, &req.target_lang)
        .await
    {
        Translation::Translated(translated_text) => Ok(Json(TranslationResponse {
            original_text: req.text,
            translated_text,
        })),
        Translation::Failed(failure) => {
            Err(ApiError::new(StatusCode::BAD_GATEWAY, failure.to_string()))
        }
    }
}
