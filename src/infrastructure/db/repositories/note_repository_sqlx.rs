use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::application::ports::note_repository::{NoteRepository, NoteScope};
use crate::domain::notes::note::Note;
use crate::infrastructure::db::DbPool;

pub struct SqlxNoteRepository {
    pub pool: DbPool,
}

impl SqlxNoteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &SqliteRow) -> Note {
    Note {
        id: r.get("id"),
        title: r.get("title"),
        content: r.get("content"),
        owner_id: r.get("owner_id"),
    }
}

// `?2 IS NULL` lets NoteScope::All bind NULL and skip the owner filter.

#[async_trait]
impl NoteRepository for SqlxNoteRepository {
    async fn create(
        &self,
        owner_id: Option<i64>,
        title: &str,
        content: &str,
    ) -> anyhow::Result<Note> {
        let row = sqlx::query(
            r#"INSERT INTO notes (title, content, owner_id) VALUES (?1, ?2, ?3)
               RETURNING id, title, content, owner_id"#,
        )
        .bind(title)
        .bind(content)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(&row))
    }

    async fn list(&self, scope: NoteScope) -> anyhow::Result<Vec<Note>> {
        let rows = sqlx::query(
            r#"SELECT id, title, content, owner_id FROM notes
               WHERE ?1 IS NULL OR owner_id = ?1
               ORDER BY id"#,
        )
        .bind(scope.owner())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn get(&self, id: i64, scope: NoteScope) -> anyhow::Result<Option<Note>> {
        let row = sqlx::query(
            r#"SELECT id, title, content, owner_id FROM notes
               WHERE id = ?1 AND (?2 IS NULL OR owner_id = ?2)"#,
        )
        .bind(id)
        .bind(scope.owner())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn update(
        &self,
        id: i64,
        scope: NoteScope,
        title: &str,
        content: &str,
    ) -> anyhow::Result<Option<Note>> {
        let row = sqlx::query(
            r#"UPDATE notes SET title = ?3, content = ?4
               WHERE id = ?1 AND (?2 IS NULL OR owner_id = ?2)
               RETURNING id, title, content, owner_id"#,
        )
        .bind(id)
        .bind(scope.owner())
        .bind(title)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn delete(&self, id: i64, scope: NoteScope) -> anyhow::Result<bool> {
        let res =
            sqlx::query(r#"DELETE FROM notes WHERE id = ?1 AND (?2 IS NULL OR owner_id = ?2)"#)
                .bind(id)
                .bind(scope.owner())
                .execute(&self.pool)
                .await?;
        Ok(res.rows_affected() > 0)
    }
}
