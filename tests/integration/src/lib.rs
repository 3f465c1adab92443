//! Integration test utilities for the chat services
//!
//! This crate provides helpers for running end-to-end scenarios against the
//! service layer, wired to the in-memory adapters or to PostgreSQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
