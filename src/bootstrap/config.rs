use std::env;

use crate::application::access::OwnershipPolicy;
use crate::application::services::auth::TokenKeys;
use crate::infrastructure::translation::translation_client_reqwest::DEFAULT_TRANSLATION_URL;

const DEV_JWT_SECRET: &str = "development-secret-change-me";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub frontend_url: Option<String>,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expires_secs: i64,
    pub rapidapi_key: Option<String>,
    pub translation_url: String,
    pub notes_ownership: OwnershipPolicy,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; `from_env` passes the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let api_port = get("API_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);
        let frontend_url = non_empty("FRONTEND_URL");
        let database_url =
            non_empty("DATABASE_URL").unwrap_or_else(|| "sqlite://notes.db?mode=rwc".into());
        let jwt_secret = non_empty("JWT_SECRET").unwrap_or_else(|| DEV_JWT_SECRET.into());
        let jwt_expires_secs = get("JWT_EXPIRES_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(30 * 60);
        let rapidapi_key = non_empty("RAPIDAPI_KEY");
        let translation_url =
            non_empty("TRANSLATION_API_URL").unwrap_or_else(|| DEFAULT_TRANSLATION_URL.into());
        let notes_ownership = match non_empty("NOTES_OWNERSHIP") {
            Some(v) => v.parse()?,
            None => OwnershipPolicy::default(),
        };
        let is_production = matches!(
            get("RUST_ENV").as_deref(),
            Some("production") | Some("prod")
        );

        if is_production && (jwt_secret == DEV_JWT_SECRET || jwt_secret.len() < 16) {
            anyhow::bail!("JWT_SECRET must be set to a strong secret in production");
        }

        Ok(Self {
            api_port,
            frontend_url,
            database_url,
            jwt_secret,
            jwt_expires_secs,
            rapidapi_key,
            translation_url,
            notes_ownership,
            is_production,
        })
    }

    pub fn token_keys(&self) -> TokenKeys {
        TokenKeys::new(self.jwt_secret.clone(), self.jwt_expires_secs)
    }
}
