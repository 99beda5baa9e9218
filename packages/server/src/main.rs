use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::config::AppConfig;
use server::state::AppState;
use server::{database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = database::init_db(&config.database.url)
        .await
        .context("Failed to initialize database")?;
    info!(url = %config.database.url, "Database ready");

    seed::seed_animal_types(&db)
        .await
        .context("Failed to seed animal types")?;
    if config.seed.sample_data {
        seed::seed_sample_data(&db)
            .await
            .context("Failed to seed sample data")?;
    }

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?;
    info!("Server running at http://{}", listener.local_addr()?);

    let app = server::build_router(AppState { db, config });
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
