//! Shared module - Common types and utilities
//!
//! Types shared across all features.

pub mod models;
pub mod utils;

pub use models::*;
