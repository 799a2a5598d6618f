//! Tree-sitter Java parser
//!
//! This is where the tree-sitter dependency lives.

use std::path::Path;

use tree_sitter::Parser as TSParser;

use crate::errors::{Result, RewriteError};
use crate::features::parsing::domain::SourceUnit;
use crate::features::parsing::ports::SourceParser;

/// Tree-sitter based Java parser
///
/// A tree with ERROR or MISSING nodes is reported as a parse error.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaParser;

impl JavaParser {
    pub fn new() -> Self {
        Self
    }

    fn get_ts_language(&self) -> tree_sitter::Language {
        tree_sitter_java::language()
    }
}

impl SourceParser for JavaParser {
    fn parse_source(&self, source: String, path: &Path) -> Result<SourceUnit> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| RewriteError::parse(path, format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| RewriteError::parse(path, "Failed to parse source code"))?;

        let unit = SourceUnit::new(path, source, tree);
        if unit.has_syntax_errors() {
            let location = unit
                .first_syntax_error()
                .map(|span| span.to_string())
                .unwrap_or_else(|| "unknown position".to_string());
            return Err(RewriteError::parse(
                path,
                format!("syntax error at {}", location),
            ));
        }

        Ok(unit)
    }
}
