use async_trait::async_trait;

use crate::domain::notes::note::Note;

/// Which notes a repository call may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteScope {
    All,
    OwnedBy(i64),
}

impl NoteScope {
    pub fn owner(&self) -> Option<i64> {
        match self {
            NoteScope::All => None,
            NoteScope::OwnedBy(id) => Some(*id),
        }
    }
}

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn create(
        &self,
        owner_id: Option<i64>,
        title: &str,
        content: &str,
    ) -> anyhow::Result<Note>;

    async fn list(&self, scope: NoteScope) -> anyhow::Result<Vec<Note>>;

    async fn get(&self, id: i64, scope: NoteScope) -> anyhow::Result<Option<Note>>;

    // None when the note does not exist in scope
    async fn update(
        &self,
        id: i64,
        scope: NoteScope,
        title: &str,
        content: &str,
    ) -> anyhow::Result<Option<Note>>;

    async fn delete(&self, id: i64, scope: NoteScope) -> anyhow::Result<bool>;
}
