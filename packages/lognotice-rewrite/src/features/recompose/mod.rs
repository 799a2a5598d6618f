//! Argument Classifier & Recomposer
//!
//! Classifies the leading arguments of a matched call and builds the text of
//! the equivalent replacement-API call.

pub mod classifier;
pub mod recomposer;

pub use classifier::{classify_argument, nested_body_members, Classifier};
pub use recomposer::Recomposer;
