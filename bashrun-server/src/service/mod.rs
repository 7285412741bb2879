//! Service Module
//!
//! Business logic layer for the server.
//! Services orchestrate between the execution engine and the repositories.

pub mod command;

// Re-export for convenience
pub use command as command_service;
