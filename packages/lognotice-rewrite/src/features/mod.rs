//! Feature modules
//!
//! Leaf first: parsing → loader → call_site → recompose → patch.
//! `pipeline::driver` wires them into the reprocessing loop.

pub mod call_site;
pub mod loader;
pub mod parsing;
pub mod patch;
pub mod recompose;
