//! Unit tests for the task module.
//!
//! Tests are organised by concern: field validation, the workflow state
//! machine, and service orchestration over the storage port.

mod support;
