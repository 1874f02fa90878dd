use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use password_hash::rand_core::OsRng;
use serde::{Deserialize, Serialize};
use tokio::task;

pub const TOKEN_TYPE: &str = "bearer";

/// Argon2 runs on the blocking pool so request workers keep serving.
pub async fn hash_password(password: &str) -> anyhow::Result<String> {
    let password = password.to_owned();
    task::spawn_blocking(move || -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        Ok(hash)
    })
    .await?
}

pub async fn verify_password(password: &str, hash: &str) -> anyhow::Result<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    task::spawn_blocking(move || -> anyhow::Result<bool> {
        let parsed = PasswordHash::new(&hash).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    })
    .await?
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// HS256 signing material for bearer tokens.
#[derive(Clone)]
pub struct TokenKeys {
    secret: String,
    expires_secs: i64,
}

impl TokenKeys {
    pub fn new(secret: impl Into<String>, expires_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            expires_secs,
        }
    }

    pub fn issue(&self, username: &str) -> anyhow::Result<String> {
        let exp = chrono::Utc::now().timestamp() + self.expires_secs;
        let claims = Claims {
            sub: username.to_string(),
            exp: exp.max(0) as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Returns the username carried by a valid, unexpired token.
    pub fn subject(&self, token: &str) -> anyhow::Result<String> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims.sub)
    }
}
