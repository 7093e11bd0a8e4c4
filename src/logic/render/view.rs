//! Results View State
//!
//! Tracks which per-function rows of a contract report are expanded. Rows
//! are keyed by index, so two same-named functions (overloads) expand and
//! collapse independently.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct ResultsView {
    expanded: HashSet<usize>,
}

impl ResultsView {
    /// Everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every row of an `n`-function report expanded.
    pub fn expand_all(n: usize) -> Self {
        Self { expanded: (0..n).collect() }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Flip one row. Toggling twice restores the original state.
    pub fn toggle(&mut self, index: usize) {
        if !self.expanded.insert(index) {
            self.expanded.remove(&index);
        }
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}
