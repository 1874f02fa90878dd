use crate::application::ports::user_repository::UserRepository;
use crate::application::services::auth::{TOKEN_TYPE, TokenKeys, verify_password};
use crate::application::use_cases::auth::AuthError;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
    pub keys: &'a TokenKeys,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    pub async fn execute(&self, req: &LoginRequest) -> Result<IssuedToken, AuthError> {
        let row = match self.repo.find_by_username(&req.username).await? {
            Some(r) => r,
            None => {
                tracing::debug!(username = %req.username, "login_unknown_user");
                return Err(AuthError::InvalidCredentials);
            }
        };
        if !verify_password(&req.password, &row.password_hash).await? {
            tracing::debug!(user_id = row.id, "login_bad_password");
            return Err(AuthError::InvalidCredentials);
        }
        let access_token = self.keys.issue(&row.username)?;
        Ok(IssuedToken {
            access_token,
            token_type: TOKEN_TYPE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryUserRepository;
    use crate::application::use_cases::auth::register::{Register, RegisterRequest};

    async fn seeded() -> InMemoryUserRepository {
        let repo = InMemoryUserRepository::default();
        Register { repo: &repo }
            .execute(&RegisterRequest {
                username: "testuser".into(),
                password: "testpass".into(),
            })
            .await
            .unwrap();
        repo
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn issues_token_for_username() {
        let repo = seeded().await;
        let keys = TokenKeys::new("secret", 60);
        let out = Login {
            repo: &repo,
            keys: &keys,
        }
        .execute(&login("testuser", "testpass"))
        .await
        .unwrap();
        assert_eq!(out.token_type, "bearer");
        assert_eq!(keys.subject(&out.access_token).unwrap(), "testuser");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let repo = seeded().await;
        let keys = TokenKeys::new("secret", 60);
        let uc = Login {
            repo: &repo,
            keys: &keys,
        };
        let wrong = uc.execute(&login("testuser", "wrong")).await.unwrap_err();
        let unknown = uc.execute(&login("nobody", "testpass")).await.unwrap_err();
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }
}
