//! Service layer
//!
//! Services contain the batch execution logic. They are trait-based so the
//! HTTP layer and tests can substitute their own implementation.

mod execution;

pub use execution::{ExecutionService, StandardExecutionService};
