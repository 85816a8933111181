//! Tasktrack: task lifecycle tracking with admission control.
//!
//! Tasks move through a small workflow (`CREATED`, `IN_PROGRESS`, `DONE`,
//! with `DONE` resumable back to `IN_PROGRESS`). The crate validates field
//! values on creation and update, enforces a ceiling on simultaneously
//! in-progress tasks, and serves filtered, paged listings.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, storage port, adapters and lifecycle service
//! - [`config`]: Server configuration from flags and environment

pub mod config;
pub mod task;
