//! Shared utilities

pub mod line_index;
pub mod tree_sitter;

pub use line_index::LineIndex;
