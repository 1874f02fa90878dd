use crate::application::ports::user_repository::UserRepository;
use crate::application::services::auth::TokenKeys;
use crate::application::use_cases::auth::AuthError;
use crate::domain::users::user::User;

/// Resolves a bearer token to the user it was issued for.
pub struct GetMe<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
    pub keys: &'a TokenKeys,
}

impl<'a, R: UserRepository + ?Sized> GetMe<'a, R> {
    pub async fn execute(&self, token: &str) -> Result<User, AuthError> {
        let username = self
            .keys
            .subject(token)
            .map_err(|_| AuthError::InvalidToken)?;
        let row = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidToken)?;
        Ok(User {
            id: row.id,
            username: row.username,
        })
    }
}
