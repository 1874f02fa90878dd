use crate::application::access::{self, Actor, OwnershipPolicy};
use crate::application::ports::note_repository::NoteRepository;
use crate::application::use_cases::notes::NotesError;
use crate::domain::notes::note::Note;

pub struct CreateNote<'a, R: NoteRepository + ?Sized> {
    pub repo: &'a R,
    pub policy: OwnershipPolicy,
}

impl<'a, R: NoteRepository + ?Sized> CreateNote<'a, R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        title: &str,
        content: &str,
    ) -> Result<Note, NotesError> {
        let owner_id = access::creation_owner(self.policy, actor)?;
        let note = self.repo.create(owner_id, title, content).await?;
        tracing::info!(note_id = note.id, owner_id = ?note.owner_id, "note_created");
        Ok(note)
    }
}
