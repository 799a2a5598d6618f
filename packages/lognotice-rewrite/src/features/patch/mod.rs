//! Text Patcher
//!
//! Writes a single `RewriteEdit` into the file it was computed from.

mod text_patcher;

pub use text_patcher::{splice, TextPatcher};
