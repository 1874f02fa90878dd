pub mod create_note;
pub mod delete_note;
pub mod get_note;
pub mod list_notes;
pub mod translate_text;
pub mod update_note;

use crate::application::access::Unauthenticated;

#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Note not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<Unauthenticated> for NotesError {
    fn from(_: Unauthenticated) -> Self {
        NotesError::Unauthenticated
    }
}
