//! Parsed source file
//!
//! A `SourceUnit` is a snapshot: its tree and every span derived from it are
//! only valid for the text it was parsed from. After a rewrite the unit must
//! be discarded and the file parsed again.

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Tree};

use crate::shared::models::Span;
use crate::shared::utils::tree_sitter::{extract_node_text, named_children, node_to_span};

/// One parsed Java file
#[derive(Debug, Clone)]
pub struct SourceUnit {
    path: PathBuf,
    source: String,
    tree: Tree,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, source: String, tree: Tree) -> Self {
        Self {
            path: path.into(),
            source,
            tree,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for progress messages
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text of a node of this unit's tree
    pub fn node_text(&self, node: &Node) -> &str {
        extract_node_text(node, &self.source)
    }

    /// Imported names, without the `static` modifier or trailing `.*`
    pub fn imports(&self) -> Vec<String> {
        named_children(&self.root())
            .into_iter()
            .filter(|n| n.kind() == "import_declaration")
            .filter_map(|decl| {
                named_children(&decl)
                    .into_iter()
                    .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
                    .map(|name| self.node_text(&name).to_string())
            })
            .collect()
    }

    /// Whether the tree contains ERROR or MISSING nodes
    pub fn has_syntax_errors(&self) -> bool {
        self.root().has_error()
    }

    /// Span of the first ERROR or MISSING node in document order
    pub fn first_syntax_error(&self) -> Option<Span> {
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            if node.is_error() || node.is_missing() {
                return Some(node_to_span(&node));
            }
            if !node.has_error() {
                continue;
            }
            for i in (0..node.child_count()).rev() {
                if let Some(child) = node.child(i) {
                    stack.push(child);
                }
            }
        }
        None
    }
}
