//! Tree-sitter Utility Functions
//!
//! Common utilities for working with tree-sitter AST nodes.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
///
/// # Example
/// ```ignore
/// let body = find_child_by_kind(&creation, "class_body");
/// ```
#[inline]
pub fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.kind() == kind {
                return Some(child);
            }
        }
    }
    None
}

/// Named children in source order, without extras (comments)
pub fn named_children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut result = Vec::with_capacity(node.named_child_count());
    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            if !child.is_extra() {
                result.push(child);
            }
        }
    }
    result
}

/// Find all descendants whose kind is one of `kinds`, in document order
pub fn find_descendants_by_kinds<'a>(node: &Node<'a>, kinds: &[&str]) -> Vec<Node<'a>> {
    let mut result = Vec::new();
    let mut stack = vec![*node];
    while let Some(current) = stack.pop() {
        if kinds.contains(&current.kind()) {
            result.push(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    result
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn extract_node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// Extract text content from a node as owned String
#[inline]
pub fn extract_node_text_owned(node: &Node, source: &str) -> String {
    extract_node_text(node, source).to_string()
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1, // 1-indexed
        start_pos.column as u32,
        end_pos.row as u32 + 1, // 1-indexed
        end_pos.column as u32,
    )
}
