//! Parsing domain models

mod source_unit;

pub use source_unit::SourceUnit;
