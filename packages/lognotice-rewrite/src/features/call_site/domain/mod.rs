//! Call-site domain models

mod call_expression;
mod rewrite_edit;

pub use call_expression::{ArgumentExpression, CallExpression};
pub use rewrite_edit::RewriteEdit;
