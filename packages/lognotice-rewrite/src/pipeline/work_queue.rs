//! LIFO queue of units awaiting a scan

use crate::features::parsing::SourceUnit;

/// Units awaiting a scan
///
/// Pops in discovery order; a reparsed unit pushed back is popped next.
#[derive(Debug, Default)]
pub struct WorkQueue {
    stack: Vec<SourceUnit>,
}

impl WorkQueue {
    /// Queue that yields `units` in the given order
    pub fn from_discovered(mut units: Vec<SourceUnit>) -> Self {
        units.reverse();
        Self { stack: units }
    }

    pub fn push(&mut self, unit: SourceUnit) {
        self.stack.push(unit);
    }

    pub fn pop(&mut self) -> Option<SourceUnit> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
