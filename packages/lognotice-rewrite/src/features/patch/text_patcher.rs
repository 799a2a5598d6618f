//! Range-addressed text patching
//!
//! The span is resolved against the file as it is on disk now; the edit is
//! written only if that range still holds the call text it was built from.

use std::path::Path;

use tracing::debug;

use crate::errors::{Result, RewriteError};
use crate::features::call_site::RewriteEdit;
use crate::shared::utils::LineIndex;

/// Range-addressed splice of the current on-disk text
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPatcher;

impl TextPatcher {
    pub fn new() -> Self {
        Self
    }

    /// Replace `edit.original` at `edit.span` in `path` and write the file back
    ///
    /// Nothing is written when the text at the span differs from the original.
    pub fn apply(&self, path: &Path, edit: &RewriteEdit) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(|e| RewriteError::io(path, e))?;
        let patched = splice(&text, edit).map_err(|found| RewriteError::RangeMismatch {
            file: path.to_path_buf(),
            span: edit.span,
            expected: edit.original.clone(),
            found,
        })?;
        std::fs::write(path, patched).map_err(|e| RewriteError::io(path, e))?;

        debug!("Patched {} at {}", path.display(), edit.span);
        Ok(())
    }
}

/// Apply `edit` to `text`
///
/// On mismatch returns the text actually found at the span (empty when the
/// span lies outside `text`).
pub fn splice(text: &str, edit: &RewriteEdit) -> std::result::Result<String, String> {
    let index = LineIndex::new(text);
    let range = index.byte_range(&edit.span).ok_or_else(String::new)?;
    let found = text.get(range.clone()).ok_or_else(String::new)?;
    if found != edit.original {
        return Err(found.to_string());
    }

    let mut out = String::with_capacity(text.len() - found.len() + edit.replacement.len());
    out.push_str(&text[..range.start]);
    out.push_str(&edit.replacement);
    out.push_str(&text[range.end..]);
    Ok(out)
}
