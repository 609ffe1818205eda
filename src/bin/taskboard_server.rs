//! Serves the task API on `0.0.0.0:5000`.
//!
//! Configuration comes from the environment (and a `.env` file when present);
//! see [`taskboard::config`] for the variables. `STORAGE_MODE=in_memory` runs
//! without a database.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::{
    api::{AppState, router},
    config::{DatabaseSettings, ServerConfig, StorageMode},
    task::{
        adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
        ports::TaskRepository,
        services::TaskLifecycleService,
    },
    telemetry,
};
use tokio::net::TcpListener;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let dotenv = dotenvy::dotenv();
    telemetry::init_tracing()?;
    if let Err(err) = dotenv {
        tracing::debug!(error = %err, "no .env file loaded");
    }

    let config = ServerConfig::from_env()?;
    tracing::info!(storage = ?config.storage, "starting taskboard server");

    match config.storage {
        StorageMode::InMemory => serve(InMemoryTaskRepository::new()).await,
        StorageMode::Postgres => serve(connect_postgres(&config.database).await?).await,
    }
}

async fn connect_postgres(settings: &DatabaseSettings) -> Result<PostgresTaskRepository, BoxError> {
    let manager = ConnectionManager::<PgConnection>::new(settings.url());
    let pool = tokio::task::spawn_blocking({
        let pool_size = settings.pool_size;
        move || Pool::builder().max_size(pool_size).build(manager)
    })
    .await??;
    let repository = PostgresTaskRepository::new(pool);
    repository.ensure_schema().await?;
    tracing::info!(pool_size = settings.pool_size, "connected to PostgreSQL");
    Ok(repository)
}

async fn serve<R>(repository: R) -> Result<(), BoxError>
where
    R: TaskRepository + 'static,
{
    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    let app = router(AppState::new(service));

    let address = ServerConfig::listen_addr();
    let listener = TcpListener::bind(address).await?;
    tracing::info!(%address, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
        Err(err) => tracing::error!(error = %err, "failed to listen for Ctrl+C"),
    }
}
