//! Command-line and environment configuration for the task server.
//!
//! Values resolve in clap order: explicit flags first, then environment
//! variables, then compiled defaults.

use crate::task::services::{
    DEFAULT_MAX_TASKS_IN_PROGRESS, DEFAULT_PAGE_SIZE, TaskLifecycleConfig,
};
use std::net::SocketAddr;

/// Default listen address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
/// Default maximum number of pooled database connections.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// CLI arguments for the task server.
#[derive(clap::Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "Task lifecycle HTTP server")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    #[arg(short, long, env = "TASKTRACK_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// `PostgreSQL` connection URL; tasks are kept in memory when absent.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TASKTRACK_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: u32,

    /// Ceiling on tasks that may be `IN_PROGRESS` at once.
    #[arg(long, env = "TASKTRACK_MAX_IN_PROGRESS", default_value_t = DEFAULT_MAX_TASKS_IN_PROGRESS)]
    pub max_tasks_in_progress: u64,

    /// Page size used when a listing request does not specify one.
    #[arg(
        long,
        env = "TASKTRACK_PAGE_SIZE",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page_size: u32,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "TASKTRACK_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// Builds the lifecycle service configuration from these arguments.
    #[must_use]
    pub fn lifecycle_config(&self) -> TaskLifecycleConfig {
        TaskLifecycleConfig::default()
            .with_max_tasks_in_progress(self.max_tasks_in_progress)
            .with_default_page_size(self.page_size)
    }
}
