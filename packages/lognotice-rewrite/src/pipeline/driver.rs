//! Reprocessing Driver
//!
//! Per unit: `Scanning → Done` when nothing matches, otherwise
//! `Scanning → Patched → Reparsing → Scanning`.
//!
//! Exactly one edit is written before the file is parsed again. Offsets are
//! never rebased: the fresh tree is the only source of positions after a
//! change.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::report::{AppliedRewrite, RewriteReport};
use super::work_queue::WorkQueue;
use crate::config::RewriteConfig;
use crate::errors::{Result, RewriteError};
use crate::features::call_site::{CallSiteScanner, RewriteEdit};
use crate::features::loader::UnitLoader;
use crate::features::parsing::{JavaParser, SourceParser, SourceUnit};
use crate::features::patch::TextPatcher;

pub struct RewriteDriver<'a, P: SourceParser> {
    parser: &'a P,
    config: &'a RewriteConfig,
    scanner: CallSiteScanner,
    patcher: TextPatcher,
}

impl<'a, P: SourceParser> RewriteDriver<'a, P> {
    pub fn new(parser: &'a P, config: &'a RewriteConfig) -> Self {
        Self {
            parser,
            config,
            scanner: CallSiteScanner::new(config),
            patcher: TextPatcher::new(),
        }
    }

    /// One cycle: scan `unit` and write at most one edit to its file
    ///
    /// `passes_done` counts the edits already written to this file; the edit
    /// is refused once it reaches `max_passes_per_unit`. `unit` is stale once
    /// this returns `Some`.
    pub fn process_unit(
        &self,
        unit: &SourceUnit,
        passes_done: usize,
    ) -> Result<Option<RewriteEdit>> {
        info!("File {}", unit.file_name());

        let Some(edit) = self.scanner.scan(unit)? else {
            debug!("{} done", unit.file_name());
            return Ok(None);
        };

        if passes_done >= self.config.max_passes_per_unit {
            return Err(RewriteError::PassLimitExceeded {
                file: unit.path().to_path_buf(),
                limit: self.config.max_passes_per_unit,
            });
        }

        self.patcher.apply(unit.path(), &edit)?;
        info!("The reformat string is {}", edit.replacement);
        Ok(Some(edit))
    }

    /// Drain the queue, reparsing and re-enqueueing every patched unit
    pub fn run(&self, mut queue: WorkQueue) -> Result<Vec<AppliedRewrite>> {
        let mut applied = Vec::new();
        let mut passes: HashMap<PathBuf, usize> = HashMap::new();

        while let Some(unit) = queue.pop() {
            let pass = passes.entry(unit.path().to_path_buf()).or_insert(0);
            let Some(edit) = self.process_unit(&unit, *pass)? else {
                continue;
            };
            *pass += 1;

            let path = unit.path().to_path_buf();
            applied.push(AppliedRewrite::new(&path, *pass, edit));
            drop(unit);

            debug!("Reparsing {} after pass {}", path.display(), *pass);
            queue.push(self.parser.parse_file(&path)?);
        }

        Ok(applied)
    }
}

/// Load the corpus under `start_package` and rewrite it to a fixed point
pub fn rewrite_corpus(
    corpus_root: &Path,
    start_package: &str,
    config: &RewriteConfig,
) -> Result<RewriteReport> {
    config.validate()?;

    let parser = JavaParser::new();
    let outcome = UnitLoader::new(&parser, config).load(corpus_root, start_package)?;
    info!(
        "{} of {} files reference {}",
        outcome.units.len(),
        outcome.discovered,
        config.target_api
    );

    let mut report = RewriteReport {
        corpus_root: corpus_root.to_path_buf(),
        start_package: start_package.to_string(),
        files_discovered: outcome.discovered,
        files_skipped: outcome.skipped,
        files_unparsable: outcome.unparsable,
        rewrites: Vec::new(),
    };

    let driver = RewriteDriver::new(&parser, config);
    report.rewrites = driver.run(WorkQueue::from_discovered(outcome.units))?;

    info!(
        "Rewrote {} call sites in {} files",
        report.rewrite_count(),
        report.files_rewritten().len()
    );
    Ok(report)
}
