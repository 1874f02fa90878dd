use crate::application::access::{self, Actor, OwnershipPolicy};
use crate::application::ports::note_repository::NoteRepository;
use crate::application::use_cases::notes::NotesError;

pub struct DeleteNote<'a, R: NoteRepository + ?Sized> {
    pub repo: &'a R,
    pub policy: OwnershipPolicy,
}

impl<'a, R: NoteRepository + ?Sized> DeleteNote<'a, R> {
    /// Deletion is terminal: a second call for the same id is `NotFound`.
    pub async fn execute(&self, actor: &Actor, id: i64) -> Result<(), NotesError> {
        let scope = access::note_scope(self.policy, actor)?;
        if !self.repo.delete(id, scope).await? {
            return Err(NotesError::NotFound);
        }
        tracing::info!(note_id = id, "note_deleted");
        Ok(())
    }
}
