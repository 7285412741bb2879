//! Repository Module
//!
//! Data access layer for the server.

pub mod command;

// Re-export for convenience
pub use command as command_repository;
