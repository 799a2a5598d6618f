//! Parsing Feature
//!
//! Turns Java files into `SourceUnit`s.
//!
//! ## Structure
//! - `domain/` - SourceUnit model
//! - `ports/` - SourceParser trait
//! - `infrastructure/` - tree-sitter Java parser

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::SourceUnit;
pub use infrastructure::JavaParser;
pub use ports::SourceParser;
