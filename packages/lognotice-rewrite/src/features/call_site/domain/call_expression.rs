//! Matched call expression model

use serde::Serialize;

use crate::shared::models::Span;

/// One argument of a matched call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ArgumentExpression {
    /// Quoted string constant; holds the content between the quotes as written
    Literal(String),
    /// Any other expression, kept as raw source text
    Expression(String),
    /// Object creation with an anonymous class body, kept as raw source text
    NestedBody(String),
}

impl ArgumentExpression {
    pub fn is_literal(&self) -> bool {
        matches!(self, ArgumentExpression::Literal(_))
    }

    pub fn has_nested_body(&self) -> bool {
        matches!(self, ArgumentExpression::NestedBody(_))
    }

    /// Source text of the argument as it appears in the call
    pub fn source_text(&self) -> String {
        match self {
            ArgumentExpression::Literal(content) => format!("\"{}\"", content),
            ArgumentExpression::Expression(text) | ArgumentExpression::NestedBody(text) => {
                text.clone()
            }
        }
    }
}

/// Legacy API call found by the scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallExpression {
    /// Receiver text, e.g. `LogNotice`
    pub scope: String,
    /// Invoked method, e.g. `info`
    pub method_name: String,
    pub arguments: Vec<ArgumentExpression>,
    /// Verbatim source text of the whole call
    pub text: String,
    pub span: Span,
}

impl CallExpression {
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    pub fn has_supported_arity(&self) -> bool {
        matches!(self.arity(), 3 | 4)
    }
}
