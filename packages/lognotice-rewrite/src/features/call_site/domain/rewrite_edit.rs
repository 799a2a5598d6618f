//! Single-shot text replacement

use serde::Serialize;

use crate::shared::models::Span;

/// Replacement of one call's source span
///
/// Applied once, then the file is reparsed before any further edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteEdit {
    /// Verbatim source text of the matched call
    pub original: String,
    /// Text written in its place
    pub replacement: String,
    /// Location of `original` in the text the edit was computed from
    pub span: Span,
}

impl RewriteEdit {
    pub fn new(original: impl Into<String>, replacement: impl Into<String>, span: Span) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
            span,
        }
    }
}
