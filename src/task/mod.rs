//! Task lifecycle management.
//!
//! Creates, updates, deletes and lists tasks, and moves them through the
//! `CREATED` to `IN_PROGRESS` to `DONE` workflow under an in-progress
//! admission ceiling. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`] (in-memory, `PostgreSQL`, HTTP)
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
