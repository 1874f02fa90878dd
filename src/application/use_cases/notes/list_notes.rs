use crate::application::access::{self, Actor, OwnershipPolicy};
use crate::application::ports::note_repository::NoteRepository;
use crate::application::use_cases::notes::NotesError;
use crate::domain::notes::note::Note;

pub struct ListNotes<'a, R: NoteRepository + ?Sized> {
    pub repo: &'a R,
    pub policy: OwnershipPolicy,
}

impl<'a, R: NoteRepository + ?Sized> ListNotes<'a, R> {
    pub async fn execute(&self, actor: &Actor) -> Result<Vec<Note>, NotesError> {
        let scope = access::note_scope(self.policy, actor)?;
        Ok(self.repo.list(scope).await?)
    }
}
