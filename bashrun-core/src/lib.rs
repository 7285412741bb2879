//! Bashrun Core
//!
//! Core types shared by the bashrun services.
//!
//! This crate contains:
//! - Domain types: command outcomes and their stored form
//! - DTOs: request bodies exchanged between the server and its clients

pub mod domain;
pub mod dto;
