//! Ring search inputs and outcomes.

use super::stats::SearchStats;
use crate::adjacency::AdjacencyMatrix;
use std::fmt::{Display, Write};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The pruned tree was fully explored and the best layout is optimal.
    Optimal,
    /// The pruned tree was fully explored and no feasible ring exists.
    Infeasible,
    /// The node budget ran out; the best layout so far is reported.
    NodeLimit,
    /// The cancellation flag was raised; the best layout so far is reported.
    Cancelled,
}

impl SearchStatus {
    /// Whether the whole pruned tree was explored.
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Optimal | Self::Infeasible)
    }
}

/// One edge of a ring layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEdge<'a, T> {
    pub from: &'a T,
    pub to: &'a T,
    pub weight: u32,
}

/// A complete, feasible ring arrangement.
///
/// Slot 0 holds the anchor; the last slot neighbors slot 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout<T> {
    /// Items in slot order.
    pub items: Vec<T>,
    /// Registry indices in slot order.
    pub indices: Vec<usize>,
    /// Sum of all ring edge weights.
    pub score: u64,
    edge_weights: Vec<u32>,
}

impl<T: Clone> Layout<T> {
    /// Builds a layout from slot indices into `items`.
    ///
    /// The score is taken from `matrix`; a ring with a forbidden edge is
    /// never passed here by the engine.
    pub(crate) fn from_indices(order: &[usize], items: &[T], matrix: &AdjacencyMatrix) -> Self {
        let n = order.len();
        let edge_weights: Vec<u32> = if n < 2 {
            Vec::new()
        } else {
            (0..n)
                .map(|k| matrix.weight(order[k], order[(k + 1) % n]))
                .collect()
        };
        Self {
            items: order.iter().map(|&i| items[i].clone()).collect(),
            indices: order.to_vec(),
            score: edge_weights.iter().map(|&w| u64::from(w)).sum(),
            edge_weights,
        }
    }
}

impl<T> Layout<T> {
    /// The empty layout of an empty instance.
    pub(crate) fn empty() -> Self {
        Self {
            items: Vec::new(),
            indices: Vec::new(),
            score: 0,
            edge_weights: Vec::new(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the layout has no slots.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every ring edge in slot order, closing edge last.
    ///
    /// Rings of fewer than two items have no edges.
    pub fn edges(&self) -> Vec<LayoutEdge<'_, T>> {
        let n = self.items.len();
        self.edge_weights
            .iter()
            .enumerate()
            .map(|(k, &weight)| LayoutEdge {
                from: &self.items[k],
                to: &self.items[(k + 1) % n],
                weight,
            })
            .collect()
    }
}

impl<T: Display> Layout<T> {
    /// Renders the ring followed by a per-edge score breakdown.
    ///
    /// ```text
    /// A -> B -> C -> D -> A
    ///   A - B = 1
    ///   ...
    /// total = 4
    /// ```
    pub fn explain(&self) -> String {
        let mut out = String::new();
        if let Some(first) = self.items.first() {
            for item in &self.items {
                let _ = write!(out, "{item} -> ");
            }
            let _ = writeln!(out, "{first}");
        }
        for edge in self.edges() {
            let _ = writeln!(out, "  {} - {} = {}", edge.from, edge.to, edge.weight);
        }
        let _ = write!(out, "total = {}", self.score);
        out
    }
}

/// Result of a ring search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingResult<T> {
    /// Best feasible layout found, `None` if none was found.
    pub best: Option<Layout<T>>,
    /// Search-tree statistics.
    pub stats: SearchStats,
    /// How the search ended.
    pub status: SearchStatus,
}

impl<T> RingResult<T> {
    /// Score of the best layout, if any.
    pub fn best_score(&self) -> Option<u64> {
        self.best.as_ref().map(|l| l.score)
    }

    /// Whether a feasible layout was found.
    pub fn is_solution_found(&self) -> bool {
        self.best.is_some()
    }

    /// Whether the whole pruned tree was explored.
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }
}

/// An independent problem for batch solving.
#[derive(Debug, Clone)]
pub struct RingInstance<T> {
    /// Items in registry order.
    pub items: Vec<T>,
    /// Adjacency weights, indexed like `items`.
    pub matrix: AdjacencyMatrix,
    /// Item pinned to slot 0; `None` pins the first item.
    pub anchor: Option<T>,
}

impl<T> RingInstance<T> {
    /// Creates an instance anchored at its first item.
    pub fn new(items: Vec<T>, matrix: AdjacencyMatrix) -> Self {
        Self {
            items,
            matrix,
            anchor: None,
        }
    }

    /// Pins `anchor` to slot 0.
    pub fn with_anchor(mut self, anchor: T) -> Self {
        self.anchor = Some(anchor);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(vec![
            vec![0, 2, 1],
            vec![2, 0, 3],
            vec![1, 3, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_layout_edges_and_score() {
        let layout = Layout::from_indices(&[0, 1, 2], &["A", "B", "C"], &matrix());
        assert_eq!(layout.items, vec!["A", "B", "C"]);
        assert_eq!(layout.score, 6);
        let edges = layout.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(*edges[2].from, "C");
        assert_eq!(*edges[2].to, "A");
        assert_eq!(edges[2].weight, 1);
    }

    #[test]
    fn test_layout_explain() {
        let layout = Layout::from_indices(&[0, 1, 2], &["A", "B", "C"], &matrix());
        assert_eq!(
            layout.explain(),
            "A -> B -> C -> A\n  A - B = 2\n  B - C = 3\n  C - A = 1\ntotal = 6"
        );
    }

    #[test]
    fn test_single_item_layout() {
        let m = AdjacencyMatrix::from_rows(vec![vec![0]]).unwrap();
        let layout = Layout::from_indices(&[0], &["A"], &m);
        assert_eq!(layout.score, 0);
        assert!(layout.edges().is_empty());
        assert_eq!(layout.explain(), "A -> A\ntotal = 0");
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::<&str>::empty();
        assert!(layout.is_empty());
        assert_eq!(layout.explain(), "total = 0");
    }

    #[test]
    fn test_status_completeness() {
        assert!(SearchStatus::Optimal.is_complete());
        assert!(SearchStatus::Infeasible.is_complete());
        assert!(!SearchStatus::NodeLimit.is_complete());
        assert!(!SearchStatus::Cancelled.is_complete());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::adjacency::AdjacencyBuilder;
    use crate::ring::{RingResult, RingRunner, SearchConfig, SearchStatus};

    #[test]
    fn test_result_round_trip() {
        let rooms: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let (_, matrix) = AdjacencyBuilder::new()
            .forbid("A".to_string(), "C".to_string())
            .build_for(&rooms)
            .unwrap();
        let result = RingRunner::run(&rooms, &matrix, None, &SearchConfig::default()).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let back: RingResult<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.best, result.best);
        assert_eq!(back.stats, result.stats);
        assert_eq!(back.status, SearchStatus::Optimal);
        assert_eq!(back.best.unwrap().explain(), result.best.unwrap().explain());
    }
}
