//! Rewrite configuration
//!
//! Names the legacy and replacement APIs and the policy switches the
//! scanner, recomposer and driver consult.

use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigFileV1;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Complete rewrite configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Receiver identifier of the legacy API (`LogNotice`)
    pub target_api: String,

    /// Fully qualified import that marks a file as referencing the legacy API
    pub target_import: String,

    /// Receiver identifier of the replacement API (`LogMsg`)
    pub replacement_api: String,

    /// Joins two merged string literals
    pub literal_separator: String,

    /// Source file extension considered by the loader
    pub file_extension: String,

    /// Treat syntax errors found during the initial load as fatal
    pub strict_parse: bool,

    /// Audit every candidate's arity before any file is modified
    pub preflight_arity: bool,

    /// Refuse to flatten anonymous class bodies into a concatenation
    pub reject_nested_bodies: bool,

    /// Upper bound on patch cycles for a single file
    pub max_passes_per_unit: usize,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            target_api: "LogNotice".to_string(),
            target_import: "com.santaba.common.logger.LogNotice".to_string(),
            replacement_api: "LogMsg".to_string(),
            literal_separator: ", ".to_string(),
            file_extension: "java".to_string(),
            strict_parse: true,
            preflight_arity: true,
            reject_nested_bodies: false,
            max_passes_per_unit: 10_000,
        }
    }
}

impl RewriteConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(v) if !SUPPORTED_VERSIONS.contains(&v) => {
                return Err(ConfigError::UnsupportedVersion {
                    found: v,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                });
            }
            Some(_) => {}
        }

        let config = Self::default().apply(file);
        config.validate()?;
        Ok(config)
    }

    fn apply(mut self, file: ConfigFileV1) -> Self {
        if let Some(v) = file.target_api {
            self.target_api = v;
        }
        if let Some(v) = file.target_import {
            self.target_import = v;
        }
        if let Some(v) = file.replacement_api {
            self.replacement_api = v;
        }
        if let Some(v) = file.literal_separator {
            self.literal_separator = v;
        }
        if let Some(v) = file.file_extension {
            self.file_extension = v;
        }
        if let Some(v) = file.strict_parse {
            self.strict_parse = v;
        }
        if let Some(v) = file.preflight_arity {
            self.preflight_arity = v;
        }
        if let Some(v) = file.reject_nested_bodies {
            self.reject_nested_bodies = v;
        }
        if let Some(v) = file.max_passes_per_unit {
            self.max_passes_per_unit = v;
        }
        self
    }

    /// Validate field values and cross-field consistency
    pub fn validate(&self) -> ConfigResult<()> {
        if !is_java_identifier(&self.target_api) {
            return Err(ConfigError::invalid(
                "target_api",
                &self.target_api,
                "Must be a plain Java identifier such as 'LogNotice'",
            ));
        }
        if !is_java_identifier(&self.replacement_api) {
            return Err(ConfigError::invalid(
                "replacement_api",
                &self.replacement_api,
                "Must be a plain Java identifier such as 'LogMsg'",
            ));
        }
        if self.replacement_api == self.target_api {
            return Err(ConfigError::invalid(
                "replacement_api",
                &self.replacement_api,
                "Must differ from target_api, otherwise every rewrite matches again",
            ));
        }
        if self.target_import.trim().is_empty() {
            return Err(ConfigError::invalid(
                "target_import",
                "\"\"",
                "Provide the fully qualified import of the target API",
            ));
        }
        if self.file_extension.is_empty() || self.file_extension.starts_with('.') {
            return Err(ConfigError::invalid(
                "file_extension",
                &self.file_extension,
                "Use the bare extension, e.g. 'java'",
            ));
        }
        if self.max_passes_per_unit == 0 {
            return Err(ConfigError::invalid(
                "max_passes_per_unit",
                0,
                "At least one pass is needed to rewrite anything",
            ));
        }
        Ok(())
    }
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
