//! Search-tree instrumentation.

use std::collections::BTreeMap;

/// Counters describing the shape of an explored search tree.
///
/// Pure telemetry: the engine updates these next to the branch they
/// measure, and nothing reads them back during the search.
///
/// For every complete run the following identities hold:
///
/// - `children_generated == children_valid + children_pruned_zero + children_pruned_closure`
/// - `leaves_feasible + leaves_infeasible` equals the number of nodes at
///   depth `N`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Partial arrangements visited.
    pub nodes_expanded: u64,
    /// Children considered before any pruning (every remaining item).
    pub children_generated: u64,
    /// Children actually recursed into.
    pub children_valid: u64,
    /// Children discarded because their edge to the previous item is forbidden.
    pub children_pruned_zero: u64,
    /// Last-slot children discarded because they cannot close the ring.
    pub children_pruned_closure: u64,
    /// Complete arrangements that close the ring.
    pub leaves_feasible: u64,
    /// Complete arrangements rejected at ring closure.
    pub leaves_infeasible: u64,
    /// Expansions per recursion depth (slot index being filled).
    pub depth_expansions: BTreeMap<usize, u64>,
}

impl SearchStats {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_expansion(&mut self, depth: usize) {
        self.nodes_expanded += 1;
        *self.depth_expansions.entry(depth).or_insert(0) += 1;
    }

    /// Total complete arrangements reached.
    pub fn leaves(&self) -> u64 {
        self.leaves_feasible + self.leaves_infeasible
    }

    /// Total children skipped without recursing.
    pub fn children_pruned(&self) -> u64 {
        self.children_pruned_zero + self.children_pruned_closure
    }

    /// Expansions recorded at `depth`.
    pub fn expansions_at(&self, depth: usize) -> u64 {
        self.depth_expansions.get(&depth).copied().unwrap_or(0)
    }
}
