use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};

use notes_api::bootstrap::app_context::{AppContext, AppServices};
use notes_api::bootstrap::config::Config;
use notes_api::infrastructure::db::repositories::note_repository_sqlx::SqlxNoteRepository;
use notes_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;
use notes_api::infrastructure::translation::translation_client_reqwest::ReqwestTranslationClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "notes_api=debug,tower_http=info,axum=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        api_port = cfg.api_port,
        database_url = %cfg.database_url,
        ownership = ?cfg.notes_ownership,
        "Starting notes API"
    );
    if cfg.rapidapi_key.is_none() {
        warn!("RAPIDAPI_KEY is not set; translation requests will be rejected by the provider");
    }

    // Database
    let pool = notes_api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    notes_api::infrastructure::db::migrate(&pool).await?;

    let services = AppServices::new(
        Arc::new(SqlxUserRepository::new(pool.clone())),
        Arc::new(SqlxNoteRepository::new(pool.clone())),
        Arc::new(ReqwestTranslationClient::new(
            cfg.translation_url.clone(),
            cfg.rapidapi_key.clone(),
        )),
    );
    let ctx = AppContext::new(cfg.clone(), services);
    let app = notes_api::presentation::http::router(ctx, pool);

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    info!(%api_addr, "HTTP API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
