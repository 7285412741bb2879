//! Core domain types
//!
//! These types are produced by the runner, persisted by the server and
//! returned to clients unchanged.

pub mod command;
