use crate::application::access::{self, Actor, OwnershipPolicy};
use crate::application::ports::note_repository::NoteRepository;
use crate::application::use_cases::notes::NotesError;
use crate::domain::notes::note::Note;

pub struct GetNote<'a, R: NoteRepository + ?Sized> {
    pub repo: &'a R,
    pub policy: OwnershipPolicy,
}

impl<'a, R: NoteRepository + ?Sized> GetNote<'a, R> {
    pub async fn execute(&self, actor: &Actor, id: i64) -> Result<Note, NotesError> {
        let scope = access::note_scope(self.policy, actor)?;
        self.repo.get(id, scope).await?.ok_or(NotesError::NotFound)
    }
}
