//! Replacement call assembly
//!
//! `LogNotice.m(a0, a1, a2[, a3])` becomes `LogMsg.m(<a0 ⊕ a1>, a2[, a3]);`
//! where the merge of `a0` and `a1` depends on which of them are literals:
//!
//! | a0      | a1      | merged                     |
//! |---------|---------|----------------------------|
//! | literal | literal | `"<a0><sep><a1>"`          |
//! | literal | expr    | `"<a0>" + <a1>`            |
//! | expr    | literal | `<a0> + "<a1>"`            |
//! | expr    | expr    | `<a0> + <a1>`              |

use crate::config::RewriteConfig;
use crate::features::call_site::{ArgumentExpression, CallExpression, RewriteEdit};

/// Builds replacement text for matched calls
#[derive(Debug, Clone)]
pub struct Recomposer {
    replacement_api: String,
    literal_separator: String,
}

impl Recomposer {
    pub fn new(config: &RewriteConfig) -> Self {
        Self {
            replacement_api: config.replacement_api.clone(),
            literal_separator: config.literal_separator.clone(),
        }
    }

    /// Merge the first two arguments into one expression
    pub fn merge_leading(&self, first: &ArgumentExpression, second: &ArgumentExpression) -> String {
        use ArgumentExpression::Literal;

        match (first, second) {
            (Literal(a), Literal(b)) => format!("\"{}{}{}\"", a, self.literal_separator, b),
            (Literal(a), b) => format!("\"{}\" + {}", a, b.source_text()),
            (a, Literal(b)) => format!("{} + \"{}\"", a.source_text(), b),
            (a, b) => format!("{} + {}", a.source_text(), b.source_text()),
        }
    }

    /// Full replacement statement, terminator included
    ///
    /// Returns `None` unless there are exactly 3 or 4 arguments.
    pub fn recompose(&self, method_name: &str, arguments: &[ArgumentExpression]) -> Option<String> {
        let (first, second, rest) = match arguments {
            [a0, a1, rest @ ..] if matches!(rest.len(), 1 | 2) => (a0, a1, rest),
            _ => return None,
        };

        let mut out = format!(
            "{}.{}({}",
            self.replacement_api,
            method_name,
            self.merge_leading(first, second)
        );
        for arg in rest {
            out.push_str(", ");
            out.push_str(&arg.source_text());
        }
        out.push_str(");");
        Some(out)
    }

    /// Edit replacing `call` in place
    ///
    /// The generated `;` is dropped when the matched text has none, so the
    /// statement keeps its own terminator.
    pub fn build_edit(&self, call: &CallExpression) -> Option<RewriteEdit> {
        let mut replacement = self.recompose(&call.method_name, &call.arguments)?;
        if !call.text.ends_with(';') {
            replacement.pop();
        }
        Some(RewriteEdit::new(call.text.clone(), replacement, call.span))
    }
}
