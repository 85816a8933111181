//! Task lifecycle HTTP server.
//!
//! Serves the task API over a `PostgreSQL` store when a database URL is
//! configured, and over an in-memory store otherwise.
//!
//! ```text
//! tasktrack-server --bind 0.0.0.0:8080 --database-url postgres://localhost/tasks
//! DATABASE_URL=postgres://localhost/tasks tasktrack-server
//! ```

use clap::Parser;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use tasktrack::config::ServerConfig;
use tasktrack::task::{
    adapters::{http, memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Some(database_url) = config.database_url.as_deref() {
        let manager = ConnectionManager::new(database_url);
        let pool = Pool::builder().max_size(config.pool_size).build(manager)?;
        let repository = PostgresTaskRepository::new(pool);
        repository.ensure_schema().await?;
        tracing::info!(pool_size = config.pool_size, "using PostgreSQL task store");
        serve(&config, repository).await
    } else {
        tracing::info!("using in-memory task store");
        serve(&config, InMemoryTaskRepository::new()).await
    }
}

async fn serve<R>(config: &ServerConfig, repository: R) -> Result<(), BoxError>
where
    R: TaskRepository + 'static,
{
    let lifecycle_config = config.lifecycle_config();
    tracing::info!(
        max_tasks_in_progress = lifecycle_config.max_tasks_in_progress(),
        page_size = lifecycle_config.default_page_size(),
        "task lifecycle configured"
    );
    let service = TaskLifecycleService::with_config(
        Arc::new(repository),
        Arc::new(DefaultClock),
        lifecycle_config,
    );

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "task server listening");
    axum::serve(listener, http::router(service)).await?;
    Ok(())
}
