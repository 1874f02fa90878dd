//! In-memory port fakes for use case tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::access::Actor;
use crate::application::ports::note_repository::{NoteRepository, NoteScope};
use crate::application::ports::translation_port::{Translation, TranslationPort};
use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::domain::notes::note::Note;

pub fn user(id: i64) -> Actor {
    Actor::User {
        id,
        username: format!("user{id}"),
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<UserRow>>,
    hide_lookups: bool,
}

impl InMemoryUserRepository {
    /// Username lookups always miss, as if a concurrent insert had not landed yet.
    pub fn hiding_lookups(mut self) -> Self {
        self.hide_lookups = true;
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<Option<UserRow>> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.username == username) {
            return Ok(None);
        }
        let row = UserRow {
            id: rows.len() as i64 + 1,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        rows.push(row.clone());
        Ok(Some(row))
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        if self.hide_lookups {
            return Ok(None);
        }
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.username == username).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: Mutex<BTreeMap<i64, Note>>,
    next_id: Mutex<i64>,
}

impl InMemoryNoteRepository {
    pub fn is_empty(&self) -> bool {
        self.notes.lock().unwrap().is_empty()
    }
}

fn visible(note: &Note, scope: NoteScope) -> bool {
    match scope {
        NoteScope::All => true,
        NoteScope::OwnedBy(owner) => note.owner_id == Some(owner),
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn create(
        &self,
        owner_id: Option<i64>,
        title: &str,
        content: &str,
    ) -> anyhow::Result<Note> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let note = Note {
            id: *next,
            title: title.to_string(),
            content: content.to_string(),
            owner_id,
        };
        self.notes.lock().unwrap().insert(note.id, note.clone());
        Ok(note)
    }

    async fn list(&self, scope: NoteScope) -> anyhow::Result<Vec<Note>> {
        let notes = self.notes.lock().unwrap();
        Ok(notes.values().filter(|n| visible(n, scope)).cloned().collect())
    }

    async fn get(&self, id: i64, scope: NoteScope) -> anyhow::Result<Option<Note>> {
        let notes = self.notes.lock().unwrap();
        Ok(notes.get(&id).filter(|n| visible(n, scope)).cloned())
    }

    async fn update(
        &self,
        id: i64,
        scope: NoteScope,
        title: &str,
        content: &str,
    ) -> anyhow::Result<Option<Note>> {
        let mut notes = self.notes.lock().unwrap();
        Ok(notes.get_mut(&id).filter(|n| visible(n, scope)).map(|n| {
            n.title = title.to_string();
            n.content = content.to_string();
            n.clone()
        }))
    }

    async fn delete(&self, id: i64, scope: NoteScope) -> anyhow::Result<bool> {
        let mut notes = self.notes.lock().unwrap();
        match notes.get(&id) {
            Some(n) if visible(n, scope) => {
                notes.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Returns a fixed outcome and records every call.
pub struct ScriptedTranslator {
    outcome: Translation,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl ScriptedTranslator {
    pub fn new(outcome: Translation) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationPort for ScriptedTranslator {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Translation {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        ));
        self.outcome.clone()
    }
}
