use crate::application::access::{self, Actor, OwnershipPolicy};
use crate::application::ports::note_repository::NoteRepository;
use crate::application::use_cases::notes::NotesError;
use crate::domain::notes::note::Note;

pub struct UpdateNote<'a, R: NoteRepository + ?Sized> {
    pub repo: &'a R,
    pub policy: OwnershipPolicy,
}

impl<'a, R: NoteRepository + ?Sized> UpdateNote<'a, R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        id: i64,
        title: &str,
        content: &str,
    ) -> Result<Note, NotesError> {
        let scope = access::note_scope(self.policy, actor)?;
        let note = self
            .repo
            .update(id, scope, title, content)
            .await?
            .ok_or(NotesError::NotFound)?;
        tracing::info!(note_id = note.id, "note_updated");
        Ok(note)
    }
}
