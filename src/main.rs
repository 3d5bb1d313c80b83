//! Workboard GraphQL server.

use std::io;

use thiserror::Error;
use workboard::{
    api::{build_schema, http::router},
    app::{AppServices, Repositories},
    config::{ConfigError, ServerConfig},
    persistence::{DatabaseSetupError, apply_migrations, build_pool},
    telemetry::init_tracing,
};

/// Errors that abort start-up or serving.
#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Database(#[from] DatabaseSetupError),
    #[error("server I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_tracing();
    let config = ServerConfig::from_env()?;
    let repositories = open_repositories(&config).await?;
    let app = router(build_schema(AppServices::new(repositories)));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "workboard listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("workboard stopped");
    Ok(())
}

async fn open_repositories(config: &ServerConfig) -> Result<Repositories, DatabaseSetupError> {
    let Some(database_url) = config.database_url.clone() else {
        tracing::warn!("DATABASE_URL is not set; data is kept in memory only");
        return Ok(Repositories::in_memory());
    };

    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || apply_migrations(&migration_url)).await??;
    let pool = build_pool(&database_url, config.db_max_connections)?;
    tracing::info!(
        max_connections = config.db_max_connections,
        "connected to PostgreSQL"
    );
    Ok(Repositories::postgres(&pool))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        // Keep serving; the process can still be stopped externally.
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
