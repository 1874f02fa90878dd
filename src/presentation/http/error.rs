use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::use_cases::auth::AuthError;
use crate::application::use_cases::notes::NotesError;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, detail)
    }

    pub fn internal(err: anyhow::Error) -> Self {
        tracing::error!(error = ?err, "request_failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(_) | AuthError::UsernameTaken | AuthError::InvalidCredentials => {
                ApiError::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            AuthError::InvalidToken => ApiError::unauthorized(err.to_string()),
            AuthError::Internal(e) => ApiError::internal(e),
        }
    }
}

impl From<NotesError> for ApiError {
    fn from(err: NotesError) -> Self {
        match err {
            NotesError::Unauthenticated => ApiError::unauthorized(err.to_string()),
            NotesError::NotFound => ApiError::new(StatusCode::NOT_FOUND, err.to_string()),
            NotesError::Internal(e) => ApiError::internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_fixed_statuses() {
        let cases = [
            (ApiError::from(AuthError::UsernameTaken), StatusCode::BAD_REQUEST),
            (ApiError::from(AuthError::InvalidCredentials), StatusCode::BAD_REQUEST),
            (ApiError::from(AuthError::InvalidToken), StatusCode::UNAUTHORIZED),
            (ApiError::from(NotesError::NotFound), StatusCode::NOT_FOUND),
            (ApiError::from(NotesError::Unauthenticated), StatusCode::UNAUTHORIZED),
        ];
        for (err, status) in cases {
            assert_eq!(err.status(), status, "{}", err.detail());
        }
    }

    #[test]
    fn internal_errors_hide_the_cause() {
        let err = ApiError::from(NotesError::Internal(anyhow::anyhow!("disk on fire")));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Internal server error");
    }
}
