//! Parser port (interface)
//!
//! Defines the contract for turning a Java file into a `SourceUnit`. Used
//! both for the initial corpus load and for every post-edit reparse.

use std::path::Path;

use crate::errors::{Result, RewriteError};
use crate::features::parsing::domain::SourceUnit;

/// Parser trait - abstraction over parsing implementation
pub trait SourceParser {
    /// Parse source text that belongs to `path`
    fn parse_source(&self, source: String, path: &Path) -> Result<SourceUnit>;

    /// Read `path` from disk and parse it
    ///
    /// Text that is not valid UTF-8 is reported as a parse failure.
    fn parse_file(&self, path: &Path) -> Result<SourceUnit> {
        let bytes = std::fs::read(path).map_err(|e| RewriteError::io(path, e))?;
        let source = String::from_utf8(bytes).map_err(|e| {
            RewriteError::parse(path, format!("not valid UTF-8 ({})", e.utf8_error()))
        })?;
        self.parse_source(source, path)
    }
}
