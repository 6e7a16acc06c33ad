use anyhow::Context;
use std::sync::Arc;

use student_marks::modules::marks::core::store::RecordStore;
use student_marks::shared::infrastructure::snapshot::json_file::JsonFileSnapshot;
use student_marks::shell::{config::AppConfig, http, logging, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    let snapshot = Arc::new(JsonFileSnapshot::new(&config.snapshot_path));
    let store = RecordStore::load(snapshot)
        .await
        .with_context(|| format!("loading {}", config.snapshot_path.display()))?;

    if tokio::fs::metadata(&config.static_dir).await.is_err() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "static assets directory not found; static requests will 404"
        );
    }

    let app = http::router(AppState::new(store), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("server started on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
