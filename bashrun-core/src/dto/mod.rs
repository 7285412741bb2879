//! Data Transfer Objects
//!
//! Request bodies exchanged between the bashrun server and its clients.

pub mod command;
