//! Typed traversal over method and constructor bodies
//!
//! The walker classifies every popped node into a closed set of shapes and
//! lets a `SyntaxVisitor` decide what happens next through `VisitControl`.

use tree_sitter::Node;

use crate::errors::Result;
use crate::features::parsing::SourceUnit;
use crate::shared::utils::tree_sitter::{find_descendants_by_kinds, named_children};

/// Declarations whose bodies seed the traversal
const BODY_OWNERS: &[&str] = &[
    "constructor_declaration",
    "compact_constructor_declaration",
    "method_declaration",
];

/// `<target>.<method>(<args>);` statement
#[derive(Debug, Clone, Copy)]
pub struct CandidateCall<'t> {
    pub statement: Node<'t>,
    pub invocation: Node<'t>,
}

impl<'t> CandidateCall<'t> {
    /// Argument nodes in source order, comments excluded
    pub fn argument_nodes(&self) -> Vec<Node<'t>> {
        self.invocation
            .child_by_field_name("arguments")
            .map(|list| named_children(&list))
            .unwrap_or_default()
    }
}

/// Closed set of shapes the walker distinguishes
#[derive(Debug, Clone, Copy)]
pub enum NodeShape<'t> {
    TargetCall(CandidateCall<'t>),
    Other(Node<'t>),
}

impl<'t> NodeShape<'t> {
    pub fn classify(node: Node<'t>, unit: &'t SourceUnit, target_api: &str) -> Self {
        if node.kind() == "expression_statement" {
            if let Some(expr) = node.named_child(0) {
                if expr.kind() == "method_invocation" {
                    let scope = expr
                        .child_by_field_name("object")
                        .map(|scope| unit.node_text(&scope));
                    if scope == Some(target_api) {
                        return NodeShape::TargetCall(CandidateCall {
                            statement: node,
                            invocation: expr,
                        });
                    }
                }
            }
        }
        NodeShape::Other(node)
    }
}

/// What the walker does after a visit
#[derive(Debug)]
pub enum VisitControl<'t> {
    /// Continue with the node's named children
    Descend,
    /// Continue with these nodes instead of the node's children
    Inject(Vec<Node<'t>>),
    /// The node was consumed; end the traversal
    Stop,
}

pub trait SyntaxVisitor<'t> {
    fn visit_target_call(&mut self, call: CandidateCall<'t>) -> Result<VisitControl<'t>>;

    fn visit_other(&mut self, _node: Node<'t>) -> Result<VisitControl<'t>> {
        Ok(VisitControl::Descend)
    }
}

/// Bodies of every constructor and every method that has one, in document order
pub fn seed_bodies(unit: &SourceUnit) -> Vec<Node<'_>> {
    find_descendants_by_kinds(&unit.root(), BODY_OWNERS)
        .into_iter()
        .filter_map(|decl| decl.child_by_field_name("body"))
        .collect()
}

/// Depth-first walk; nodes are visited in document order
pub fn walk<'t, V: SyntaxVisitor<'t>>(
    unit: &'t SourceUnit,
    target_api: &str,
    visitor: &mut V,
) -> Result<()> {
    let mut stack: Vec<Node<'t>> = seed_bodies(unit);
    stack.reverse();

    while let Some(node) = stack.pop() {
        let control = match NodeShape::classify(node, unit, target_api) {
            NodeShape::TargetCall(call) => visitor.visit_target_call(call)?,
            NodeShape::Other(node) => visitor.visit_other(node)?,
        };

        match control {
            VisitControl::Descend => stack.extend(named_children(&node).into_iter().rev()),
            VisitControl::Inject(nodes) => stack.extend(nodes.into_iter().rev()),
            VisitControl::Stop => return Ok(()),
        }
    }
    Ok(())
}
