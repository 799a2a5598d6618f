/*
 * lognotice-rewrite - In-place LogNotice → LogMsg migration
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Span) and tree-sitter helpers
 * - features/    : Vertical slices (parsing → loader → call_site → recompose → patch)
 * - pipeline/    : Reprocessing driver, work queue, run report
 * - config/      : RewriteConfig (defaults + YAML)
 *
 * Rewrites one call per pass, then reparses the file from disk.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::RewriteConfig;
pub use errors::{Result, RewriteError};
pub use features::call_site::{ArgumentExpression, CallExpression, RewriteEdit};
pub use features::parsing::{JavaParser, SourceParser, SourceUnit};
pub use pipeline::{rewrite_corpus, AppliedRewrite, RewriteDriver, RewriteReport, WorkQueue};
pub use shared::models::Span;
