//! Call-Site Feature
//!
//! Finds legacy API call statements inside method and constructor bodies.
//!
//! ## Structure
//! - `domain/` - CallExpression, ArgumentExpression, RewriteEdit
//! - `infrastructure/` - tree-sitter visitor and scanner

pub mod domain;
pub mod infrastructure;

pub use domain::{ArgumentExpression, CallExpression, RewriteEdit};
pub use infrastructure::{CallSiteScanner, CandidateCall, SyntaxVisitor, VisitControl};
