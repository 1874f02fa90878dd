use crate::application::ports::user_repository::UserRepository;
use crate::application::services::auth::hash_password;
use crate::application::use_cases::auth::AuthError;
use crate::domain::users::user::User;

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> Result<User, AuthError> {
        if req.username.trim().is_empty() {
            return Err(AuthError::Validation("Username must not be empty"));
        }
        if req.password.is_empty() {
            return Err(AuthError::Validation("Password must not be empty"));
        }
        if self.repo.find_by_username(&req.username).await?.is_some() {
            return Err(AuthError::UsernameTaken);
        }
        let hash = hash_password(&req.password).await?;
        // The unique constraint catches a concurrent registration that slipped past the lookup.
        let row = self
            .repo
            .create_user(&req.username, &hash)
            .await?
            .ok_or(AuthError::UsernameTaken)?;
        tracing::info!(user_id = row.id, username = %row.username, "user_registered");
        Ok(User {
            id: row.id,
            username: row.username,
        })
    }
}
