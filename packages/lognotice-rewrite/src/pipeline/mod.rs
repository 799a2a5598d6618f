//! Pipeline orchestration
//!
//! Unit Loader → WorkQueue → Reprocessing Driver.

pub mod driver;
pub mod report;
pub mod work_queue;

pub use driver::{rewrite_corpus, RewriteDriver};
pub use report::{AppliedRewrite, RewriteReport};
pub use work_queue::WorkQueue;
