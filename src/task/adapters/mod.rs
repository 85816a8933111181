//! Adapter implementations for task lifecycle ports.
//!
//! - [`memory`]: in-process store for tests and ephemeral deployments
//! - [`postgres`]: Diesel-backed `PostgreSQL` store
//! - [`http`]: axum request surface over the lifecycle service

pub mod http;
pub mod memory;
pub mod postgres;
