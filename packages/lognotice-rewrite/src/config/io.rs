//! Configuration I/O (YAML loading)
//!
//! Defines the on-disk schema. Conversion into `RewriteConfig` lives in
//! rewrite_config.rs.

use serde::Deserialize;

/// YAML Schema v1
///
/// Every field except `version` falls back to the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    pub target_api: Option<String>,

    pub target_import: Option<String>,

    pub replacement_api: Option<String>,

    pub literal_separator: Option<String>,

    pub file_extension: Option<String>,

    pub strict_parse: Option<bool>,

    pub preflight_arity: Option<bool>,

    pub reject_nested_bodies: Option<bool>,

    pub max_passes_per_unit: Option<usize>,
}
