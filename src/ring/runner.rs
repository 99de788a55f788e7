//! Backtracking engine and solve entry point.
//!
//! # Algorithm
//!
//! 1. Pin the anchor to slot 0 (removes rotational symmetry)
//! 2. At depth `pos`, with `prev = slots[pos - 1]`:
//!    a. Drop every remaining item whose edge to `prev` is forbidden
//!    b. Order the survivors with the [`CandidateOrdering`]
//!    c. On the last slot, skip candidates that cannot close the ring
//!    d. Place, recurse, unplace
//! 3. At depth `N`, check the closing edge and keep the arrangement if it
//!    strictly beats the incumbent
//!
//! The whole pruned tree is explored, so the returned score is optimal
//! unless a node budget or cancellation stops the search early. Reflections
//! are not merged: clockwise and counter-clockwise rings are distinct.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, trace};

use super::config::SearchConfig;
use super::heuristic::{CandidateOrdering, OrderingContext};
use super::state::{Incumbent, SearchState};
use super::stats::SearchStats;
use super::types::{Layout, RingResult, SearchStatus};
use crate::adjacency::{AdjacencyMatrix, ItemRegistry};
use crate::error::RingError;

/// Ring search runner.
pub struct RingRunner;

impl RingRunner {
    /// Finds the highest-scoring feasible ring of `items`.
    ///
    /// `anchor` is pinned to slot 0; `None` pins the first item.
    ///
    /// # Errors
    ///
    /// - [`RingError::MalformedMatrix`] if `matrix` does not match `items`
    /// - [`RingError::DuplicateItem`] if `items` repeats an identifier
    /// - [`RingError::UnknownAnchor`] if `anchor` is not in `items`
    /// - [`RingError::InvalidConfig`] if `config` fails validation
    ///
    /// An instance without any feasible ring is not an error: the result
    /// has no `best` layout and status [`SearchStatus::Infeasible`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_layout::adjacency::AdjacencyMatrix;
    /// use ring_layout::ring::{RingRunner, SearchConfig, SearchStatus};
    ///
    /// // A-C forbidden, everything else scores 1.
    /// let matrix = AdjacencyMatrix::from_rows(vec![
    ///     vec![0, 1, 0, 1],
    ///     vec![1, 0, 1, 1],
    ///     vec![0, 1, 0, 1],
    ///     vec![1, 1, 1, 0],
    /// ]).unwrap();
    ///
    /// let result = RingRunner::run(&["A", "B", "C", "D"], &matrix, Some(&"A"), &SearchConfig::default())
    ///     .unwrap();
    /// let best = result.best.unwrap();
    /// assert_eq!(best.items, vec!["A", "B", "C", "D"]);
    /// assert_eq!(best.score, 4);
    /// assert_eq!(result.status, SearchStatus::Optimal);
    /// ```
    pub fn run<T>(
        items: &[T],
        matrix: &AdjacencyMatrix,
        anchor: Option<&T>,
        config: &SearchConfig,
    ) -> Result<RingResult<T>, RingError>
    where
        T: Clone + Eq + Hash + Debug,
    {
        Self::run_with_ordering(items, matrix, anchor, config, &CandidateOrdering::standard(), None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search
    /// unwinds at the next node and returns the best layout found so far
    /// with status [`SearchStatus::Cancelled`].
    pub fn run_with_cancel<T>(
        items: &[T],
        matrix: &AdjacencyMatrix,
        anchor: Option<&T>,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RingResult<T>, RingError>
    where
        T: Clone + Eq + Hash + Debug,
    {
        Self::run_with_ordering(
            items,
            matrix,
            anchor,
            config,
            &CandidateOrdering::standard(),
            cancel,
        )
    }

    /// Runs the search with a custom candidate ordering.
    ///
    /// The ordering changes which of several equally scored layouts is
    /// reported and how the tree is traversed, never the optimal score.
    pub fn run_with_ordering<T>(
        items: &[T],
        matrix: &AdjacencyMatrix,
        anchor: Option<&T>,
        config: &SearchConfig,
        ordering: &CandidateOrdering,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RingResult<T>, RingError>
    where
        T: Clone + Eq + Hash + Debug,
    {
        config.validate().map_err(RingError::InvalidConfig)?;
        matrix.check_items(items.len())?;
        let registry = ItemRegistry::from_slice(items)?;
        let anchor = match anchor {
            Some(item) => registry
                .index_of(item)
                .ok_or_else(|| RingError::UnknownAnchor(format!("{item:?}")))?,
            None => 0,
        };

        let n = registry.len();
        if n == 0 {
            return Ok(RingResult {
                best: Some(Layout::empty()),
                stats: SearchStats::new(),
                status: SearchStatus::Optimal,
            });
        }

        debug!(items = n, anchor, ?config, ?ordering, "starting ring search");

        let zero_counts = matrix.zero_counts();
        let mut search = Search {
            matrix,
            ctx: OrderingContext {
                matrix,
                zero_counts: &zero_counts,
            },
            ordering,
            config,
            cancel: cancel.as_deref(),
            state: SearchState::new(n, anchor),
            best: Incumbent::new(),
            stats: SearchStats::new(),
            halted: None,
        };
        search.expand(1);

        let Search {
            best, stats, halted, ..
        } = search;
        let order = best.into_order();
        let status = match (halted, &order) {
            (Some(reason), _) => reason,
            (None, Some(_)) => SearchStatus::Optimal,
            (None, None) => SearchStatus::Infeasible,
        };
        let best = order.map(|o| Layout::from_indices(&o, registry.items(), matrix));

        debug!(
            ?status,
            best_score = ?best.as_ref().map(|l| l.score),
            nodes = stats.nodes_expanded,
            leaves = stats.leaves(),
            "ring search finished"
        );

        Ok(RingResult { best, stats, status })
    }
}

/// One solve call's exclusive state.
struct Search<'a> {
    matrix: &'a AdjacencyMatrix,
    ctx: OrderingContext<'a>,
    ordering: &'a CandidateOrdering,
    config: &'a SearchConfig,
    cancel: Option<&'a AtomicBool>,
    state: SearchState,
    best: Incumbent,
    stats: SearchStats,
    halted: Option<SearchStatus>,
}

impl Search<'_> {
    fn should_halt(&mut self) -> bool {
        if self.halted.is_some() {
            return true;
        }
        if let Some(flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                debug!(nodes = self.stats.nodes_expanded, "ring search cancelled");
                self.halted = Some(SearchStatus::Cancelled);
                return true;
            }
        }
        if let Some(limit) = self.config.node_limit {
            if self.stats.nodes_expanded >= limit {
                debug!(limit, "ring search hit node limit");
                self.halted = Some(SearchStatus::NodeLimit);
                return true;
            }
        }
        false
    }

    /// Expands the node that fills slot `pos`.
    fn expand(&mut self, pos: usize) {
        if self.should_halt() {
            return;
        }
        self.stats.record_expansion(pos);

        let n = self.matrix.len();
        if pos == n {
            self.close_ring();
            return;
        }

        let prev = self.state.slot(pos - 1);
        let generated = self.state.remaining_len();
        self.stats.children_generated += generated as u64;

        let mut candidates: Vec<usize> = self
            .state
            .remaining()
            .filter(|&r| !self.matrix.is_forbidden(prev, r))
            .collect();
        self.stats.children_pruned_zero += (generated - candidates.len()) as u64;
        self.ordering.order(prev, &mut candidates, &self.ctx);

        let anchor = self.state.slot(0);
        for r in candidates {
            if self.config.closure_lookahead && pos == n - 1 && self.matrix.is_forbidden(r, anchor) {
                self.stats.children_pruned_closure += 1;
                continue;
            }
            // Checked before counting so a halted child is never reported as explored.
            if self.should_halt() {
                return;
            }

            self.stats.children_valid += 1;
            let gain = self.matrix.weight(prev, r);
            self.state.place(pos, r, gain);
            self.expand(pos + 1);
            self.state.unplace(pos, r, gain);
        }
    }

    /// Classifies a complete arrangement.
    fn close_ring(&mut self) {
        let n = self.matrix.len();
        // A single item has no ring edge to violate.
        let closing = if n == 1 {
            0
        } else {
            let w = self.matrix.weight(self.state.slot(n - 1), self.state.slot(0));
            if w == 0 {
                self.stats.leaves_infeasible += 1;
                return;
            }
            w
        };

        self.stats.leaves_feasible += 1;
        let total = self.state.score() + u64::from(closing);
        let previous = self.best.score();
        if self.best.offer(self.state.slots(), total) {
            trace!(
                score = total,
                depth = n,
                ?previous,
                nodes = self.stats.nodes_expanded,
                "new best ring"
            );
        }
    }
}
