//! Call-site infrastructure - tree-sitter traversal

mod scanner;
pub mod visitor;

pub use scanner::CallSiteScanner;
pub use visitor::{CandidateCall, NodeShape, SyntaxVisitor, VisitControl};
