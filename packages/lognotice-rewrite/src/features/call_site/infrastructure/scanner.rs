//! Call-Site Scanner
//!
//! Produces at most one `RewriteEdit` per invocation. The caller must reparse
//! the file after applying it: every other span in the unit is stale once the
//! text changes.

use std::collections::HashSet;

use tracing::debug;

use super::visitor::{walk, CandidateCall, SyntaxVisitor, VisitControl};
use crate::config::RewriteConfig;
use crate::errors::{Result, RewriteError};
use crate::features::call_site::domain::{CallExpression, RewriteEdit};
use crate::features::parsing::SourceUnit;
use crate::features::recompose::{classify_argument, nested_body_members, Classifier, Recomposer};
use crate::shared::utils::tree_sitter::{extract_node_text_owned, node_to_span};

/// Finds legacy API calls and turns the first one into an edit
#[derive(Debug, Clone)]
pub struct CallSiteScanner {
    target_api: String,
    classifier: Classifier,
    recomposer: Recomposer,
}

impl CallSiteScanner {
    pub fn new(config: &RewriteConfig) -> Self {
        Self {
            target_api: config.target_api.clone(),
            classifier: Classifier::new(config),
            recomposer: Recomposer::new(config),
        }
    }

    /// Find the first rewritable call in `unit` and build its edit
    pub fn scan(&self, unit: &SourceUnit) -> Result<Option<RewriteEdit>> {
        debug!("Scanning {}", unit.file_name());

        let mut visitor = RewriteVisitor {
            scanner: self,
            unit,
            edit: None,
        };
        walk(unit, &self.target_api, &mut visitor)?;
        Ok(visitor.edit)
    }

    /// Every candidate call in `unit`, each once, without producing edits
    ///
    /// Fails on the first candidate whose arity is outside {3, 4}.
    pub fn audit(&self, unit: &SourceUnit) -> Result<Vec<CallExpression>> {
        let mut visitor = AuditVisitor {
            scanner: self,
            unit,
            seen: HashSet::new(),
            calls: Vec::new(),
        };
        walk(unit, &self.target_api, &mut visitor)?;
        Ok(visitor.calls)
    }

    fn to_call_expression(&self, unit: &SourceUnit, call: &CandidateCall) -> CallExpression {
        let source = unit.source();
        let method_name = call
            .invocation
            .child_by_field_name("name")
            .map(|n| extract_node_text_owned(&n, source))
            .unwrap_or_default();

        CallExpression {
            scope: self.target_api.clone(),
            method_name,
            arguments: call
                .argument_nodes()
                .iter()
                .map(|n| classify_argument(n, source))
                .collect(),
            text: extract_node_text_owned(&call.invocation, source),
            span: node_to_span(&call.invocation),
        }
    }

    fn check_arity(&self, unit: &SourceUnit, call: &CallExpression) -> Result<()> {
        if call.has_supported_arity() {
            return Ok(());
        }
        Err(RewriteError::Arity {
            file: unit.path().to_path_buf(),
            line: call.span.start_line,
            count: call.arity(),
            expression: call.text.clone(),
        })
    }
}

struct RewriteVisitor<'s, 'u> {
    scanner: &'s CallSiteScanner,
    unit: &'u SourceUnit,
    edit: Option<RewriteEdit>,
}

impl<'s, 't> SyntaxVisitor<'t> for RewriteVisitor<'s, 't> {
    fn visit_target_call(&mut self, candidate: CandidateCall<'t>) -> Result<VisitControl<'t>> {
        let scanner = self.scanner;
        let call = scanner.to_call_expression(self.unit, &candidate);
        scanner.check_arity(self.unit, &call)?;

        let (first, second) = (&call.arguments[0], &call.arguments[1]);
        if scanner.classifier.is_acceptable(first) && scanner.classifier.is_acceptable(second) {
            // arity was checked above, so recompose cannot return None here
            if let Some(edit) = scanner.recomposer.build_edit(&call) {
                self.edit = Some(edit);
                return Ok(VisitControl::Stop);
            }
        }

        if first.has_nested_body() {
            let members = candidate
                .argument_nodes()
                .first()
                .map(nested_body_members)
                .unwrap_or_default();
            debug!(
                "Descending into {} anonymous members at line {}",
                members.len(),
                call.span.start_line
            );
            return Ok(VisitControl::Inject(members));
        }

        Err(RewriteError::UnsupportedShape {
            file: self.unit.path().to_path_buf(),
            line: call.span.start_line,
            expression: call.text,
        })
    }
}

struct AuditVisitor<'s, 'u> {
    scanner: &'s CallSiteScanner,
    unit: &'u SourceUnit,
    seen: HashSet<usize>,
    calls: Vec<CallExpression>,
}

impl<'s, 't> SyntaxVisitor<'t> for AuditVisitor<'s, 't> {
    fn visit_target_call(&mut self, candidate: CandidateCall<'t>) -> Result<VisitControl<'t>> {
        // nested method bodies are both seeds and descendants of their parent
        if !self.seen.insert(candidate.invocation.start_byte()) {
            return Ok(VisitControl::Descend);
        }
        let call = self.scanner.to_call_expression(self.unit, &candidate);
        self.scanner.check_arity(self.unit, &call)?;
        self.calls.push(call);
        Ok(VisitControl::Descend)
    }
}
