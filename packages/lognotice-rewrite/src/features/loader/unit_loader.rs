//! Unit Loader
//!
//! Discovers the Java files under a start package, parses them and keeps the
//! ones referencing the target API. Read-only.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::RewriteConfig;
use crate::errors::{Result, RewriteError};
use crate::features::call_site::CallSiteScanner;
use crate::features::parsing::{SourceParser, SourceUnit};

/// Result of the initial corpus load
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Units referencing the target API, in discovery order
    pub units: Vec<SourceUnit>,
    pub discovered: usize,
    /// Files without any reference to the target API
    pub skipped: Vec<PathBuf>,
    /// Files with syntax errors (non-strict mode only)
    pub unparsable: Vec<PathBuf>,
    /// Candidate calls found by the arity preflight
    pub candidates: usize,
}

pub struct UnitLoader<'a, P: SourceParser> {
    parser: &'a P,
    config: &'a RewriteConfig,
}

impl<'a, P: SourceParser> UnitLoader<'a, P> {
    pub fn new(parser: &'a P, config: &'a RewriteConfig) -> Self {
        Self { parser, config }
    }

    /// Directory holding `package` (`a.b.c` → `<root>/a/b/c`)
    pub fn package_dir(root: &Path, package: &str) -> PathBuf {
        package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .fold(root.to_path_buf(), |dir, segment| dir.join(segment))
    }

    /// Source files under the package directory, sorted by path
    pub fn discover(&self, root: &Path, package: &str) -> Result<Vec<PathBuf>> {
        let dir = Self::package_dir(root, package);
        if !dir.is_dir() {
            return Err(RewriteError::io(
                &dir,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("package directory for '{}' not found", package),
                ),
            ));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
        {
            let entry = entry?;
            if entry.file_type().is_file() {
                let path = entry.path();
                if path.extension().map_or(false, |ext| ext == self.config.file_extension.as_str()) {
                    files.push(path.to_path_buf());
                }
            }
        }

        debug!("Discovered {} files under {}", files.len(), dir.display());
        Ok(files)
    }

    /// Whether `unit` imports the target API or mentions it anywhere
    pub fn references_target(&self, unit: &SourceUnit) -> bool {
        unit.imports().iter().any(|name| name == &self.config.target_import)
            || unit.source().contains(self.config.target_api.as_str())
    }

    /// Parse every discovered file and keep the referencing units
    pub fn load(&self, root: &Path, package: &str) -> Result<LoadOutcome> {
        let files = self.discover(root, package)?;
        let mut outcome = LoadOutcome {
            discovered: files.len(),
            ..LoadOutcome::default()
        };

        for path in files {
            let unit = match self.parser.parse_file(&path) {
                Ok(unit) => unit,
                Err(RewriteError::Parse { file, message }) if !self.config.strict_parse => {
                    warn!("Fail to parse file {}: {}", file.display(), message);
                    outcome.unparsable.push(file);
                    continue;
                }
                Err(e) => return Err(e),
            };

            if self.references_target(&unit) {
                outcome.units.push(unit);
            } else {
                info!("Skipped {}", unit.file_name());
                outcome.skipped.push(path);
            }
        }

        if self.config.preflight_arity {
            let scanner = CallSiteScanner::new(self.config);
            for unit in &outcome.units {
                outcome.candidates += scanner.audit(unit)?.len();
            }
            debug!(
                "Preflight found {} call sites in {} units",
                outcome.candidates,
                outcome.units.len()
            );
        }

        Ok(outcome)
    }
}
