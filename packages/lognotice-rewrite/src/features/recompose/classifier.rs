//! Argument shape classification

use tree_sitter::Node;

use crate::config::RewriteConfig;
use crate::features::call_site::ArgumentExpression;
use crate::shared::utils::tree_sitter::{extract_node_text, find_child_by_kind, named_children};

/// Classify one argument node
///
/// Text blocks (`"""..."""`) are not treated as literals: their content cannot
/// be re-quoted on a single line.
pub fn classify_argument(node: &Node, source: &str) -> ArgumentExpression {
    let text = extract_node_text(node, source);
    match node.kind() {
        "string_literal" if !text.starts_with("\"\"\"") && text.len() >= 2 => {
            ArgumentExpression::Literal(text[1..text.len() - 1].to_string())
        }
        "object_creation_expression" if find_child_by_kind(node, "class_body").is_some() => {
            ArgumentExpression::NestedBody(text.to_string())
        }
        _ => ArgumentExpression::Expression(text.to_string()),
    }
}

/// Member declarations of an anonymous class argument, in source order
pub fn nested_body_members<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    find_child_by_kind(node, "class_body")
        .map(|body| named_children(&body))
        .unwrap_or_default()
}

/// Decides which argument shapes may be flattened into the merged argument
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    reject_nested_bodies: bool,
}

impl Classifier {
    pub fn new(config: &RewriteConfig) -> Self {
        Self {
            reject_nested_bodies: config.reject_nested_bodies,
        }
    }

    /// Every shape is acceptable unless nested bodies are explicitly rejected
    pub fn is_acceptable(&self, arg: &ArgumentExpression) -> bool {
        !(self.reject_nested_bodies && arg.has_nested_body())
    }
}
