use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::infrastructure::db::DbPool;

pub struct SqlxUserRepository {
    pub pool: DbPool,
}

impl SqlxUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &SqliteRow) -> UserRow {
    UserRow {
        id: r.get("id"),
        username: r.get("username"),
        password_hash: r.get("password_hash"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<Option<UserRow>> {
        let res = sqlx::query(
            r#"INSERT INTO users (username, password_hash) VALUES (?1, ?2)
               RETURNING id, username, password_hash"#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await;
        match res {
            Ok(row) => Ok(Some(map_row(&row))),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::warn!(%username, "username_unique_violation");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        let row =
            sqlx::query(r#"SELECT id, username, password_hash FROM users WHERE username = ?1"#)
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.as_ref().map(map_row))
    }
}
