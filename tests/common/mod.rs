#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use notes_api::application::ports::translation_port::{Translation, TranslationPort};
use notes_api::bootstrap::app_context::{AppContext, AppServices};
use notes_api::bootstrap::config::Config;
use notes_api::infrastructure::db::repositories::note_repository_sqlx::SqlxNoteRepository;
use notes_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;
use notes_api::infrastructure::db::{self, DbPool};

/// Translator double that answers with a fixed outcome and records calls.
pub struct FixedTranslator {
    outcome: Translation,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl FixedTranslator {
    pub fn new(outcome: Translation) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationPort for FixedTranslator {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Translation {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        ));
        self.outcome.clone()
    }
}

pub fn test_config(ownership: &str) -> Config {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("DATABASE_URL", "sqlite::memory:"),
        ("JWT_SECRET", "integration-test-secret"),
        ("NOTES_OWNERSHIP", ownership),
    ]);
    Config::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap()
}

pub async fn memory_pool() -> DbPool {
    let pool = db::connect_pool("sqlite::memory:").await.unwrap();
    db::migrate(&pool).await.unwrap();
    pool
}

pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
}

pub async fn spawn_app_with(ownership: &str, translator: Arc<dyn TranslationPort>) -> TestApp {
    let pool = memory_pool().await;
    let services = AppServices::new(
        Arc::new(SqlxUserRepository::new(pool.clone())),
        Arc::new(SqlxNoteRepository::new(pool.clone())),
        translator,
    );
    let ctx = AppContext::new(test_config(ownership), services);
    TestApp {
        router: notes_api::presentation::http::router(ctx, pool.clone()),
        pool,
    }
}

pub async fn spawn_app(ownership: &str) -> TestApp {
    spawn_app_with(
        ownership,
        FixedTranslator::new(Translation::Translated("unused".into())),
    )
    .await
}

impl TestApp {
    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.call_with_authorization(method, uri, body, authorization.as_deref())
            .await
    }

    /// Like `call`, with the `Authorization` header sent verbatim.
    pub async fn call_with_authorization(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            req = req.header(http::header::AUTHORIZATION, value);
        }
        let req = match body {
            Some(json) => req
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap())),
            None => req.body(Body::empty()),
        }
        .unwrap();
        self.send(req).await
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn register(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.call(
            Method::POST,
            "/users/register",
            Some(serde_json::json!({ "username": username, "password": password })),
            None,
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.call(
            Method::POST,
            "/users/login",
            Some(serde_json::json!({ "username": username, "password": password })),
            None,
        )
        .await
    }

    /// Registers and logs in, returning the bearer token.
    pub async fn token_for(&self, username: &str) -> String {
        let (status, _) = self.register(username, "password123").await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = self.login(username, "password123").await;
        assert_eq!(status, StatusCode::OK);
        body["access_token"].as_str().unwrap().to_string()
    }
}
