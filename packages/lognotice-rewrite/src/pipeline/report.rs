//! Run summary

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::features::call_site::RewriteEdit;
use crate::shared::models::Span;

/// One edit written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedRewrite {
    pub file: PathBuf,
    /// 1-based patch cycle within the file
    pub pass: usize,
    pub span: Span,
    pub original: String,
    pub replacement: String,
}

impl AppliedRewrite {
    pub fn new(file: impl Into<PathBuf>, pass: usize, edit: RewriteEdit) -> Self {
        Self {
            file: file.into(),
            pass,
            span: edit.span,
            original: edit.original,
            replacement: edit.replacement,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RewriteReport {
    pub corpus_root: PathBuf,
    pub start_package: String,
    pub files_discovered: usize,
    pub files_skipped: Vec<PathBuf>,
    pub files_unparsable: Vec<PathBuf>,
    pub rewrites: Vec<AppliedRewrite>,
}

impl RewriteReport {
    pub fn files_rewritten(&self) -> BTreeSet<&PathBuf> {
        self.rewrites.iter().map(|r| &r.file).collect()
    }

    pub fn rewrite_count(&self) -> usize {
        self.rewrites.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
