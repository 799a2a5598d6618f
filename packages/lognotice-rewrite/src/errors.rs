//! Error types for lognotice-rewrite
//!
//! Every variant is fatal: the driver aborts the whole run on the first one.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::Span;

/// Main error type for rewrite operations
#[derive(Debug, Error)]
pub enum RewriteError {
    /// Matched call with an argument count outside {3, 4}
    #[error("The arguments is not 3 or 4 args ({count}) at {}:{line} - {expression}", file.display())]
    Arity {
        file: PathBuf,
        line: u32,
        count: usize,
        expression: String,
    },

    /// Matched call whose arguments cannot be flattened
    #[error("Not support this yet at {}:{line} - {expression}", file.display())]
    UnsupportedShape {
        file: PathBuf,
        line: u32,
        expression: String,
    },

    /// Initial or post-edit parse failure
    #[error("Fail to parse file {}: {message}", file.display())]
    Parse { file: PathBuf, message: String },

    /// Text at the computed range differs from the call being replaced
    #[error("Range mismatch in {} at {span}: expected {expected:?}, found {found:?}", file.display())]
    RangeMismatch {
        file: PathBuf,
        span: Span,
        expected: String,
        found: String,
    },

    /// A single file kept producing rewrites past the configured limit
    #[error("No fixed point for {} after {limit} passes", file.display())]
    PassLimitExceeded { file: PathBuf, limit: usize },

    /// IO error with the offending path
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk error
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RewriteError {
    /// Create a parse error for a file
    pub fn parse(file: impl AsRef<Path>, message: impl Into<String>) -> Self {
        RewriteError::Parse {
            file: file.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Wrap an IO error with its path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        RewriteError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type alias for rewrite operations
pub type Result<T> = std::result::Result<T, RewriteError>;
