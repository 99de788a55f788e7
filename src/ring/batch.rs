//! Independent solves over many instances or anchors.
//!
//! Every solve owns its state and statistics, so instances run without
//! synchronization. With the `parallel` feature they are spread over the
//! rayon thread pool; otherwise they run one after another. Results keep
//! input order either way.

use std::fmt::Debug;
use std::hash::Hash;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::config::SearchConfig;
use super::runner::RingRunner;
use super::types::{RingInstance, RingResult};
use crate::adjacency::AdjacencyMatrix;
use crate::error::RingError;

impl RingRunner {
    /// Solves every instance independently.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_layout::adjacency::AdjacencyBuilder;
    /// use ring_layout::ring::{RingInstance, RingRunner, SearchConfig};
    ///
    /// let floors = vec![vec!["Galley", "Medbay", "Lab"], vec!["Airlock", "Storage", "Hygiene", "Gym"]];
    /// let catalog = AdjacencyBuilder::new().forbid("Galley", "Hygiene").prefer("Medbay", "Lab", 3);
    ///
    /// let instances: Vec<_> = floors
    ///     .into_iter()
    ///     .map(|rooms| {
    ///         let matrix = catalog.restrict_to(&rooms).build_for(&rooms).unwrap().1;
    ///         RingInstance::new(rooms, matrix)
    ///     })
    ///     .collect();
    ///
    /// let results = RingRunner::run_batch(&instances, &SearchConfig::default());
    /// assert_eq!(results.len(), 2);
    /// assert_eq!(results[0].as_ref().unwrap().best_score(), Some(5));
    /// ```
    pub fn run_batch<T>(
        instances: &[RingInstance<T>],
        config: &SearchConfig,
    ) -> Vec<Result<RingResult<T>, RingError>>
    where
        T: Clone + Eq + Hash + Debug + Send + Sync,
    {
        debug!(instances = instances.len(), "starting ring batch");
        let solve = |(i, inst): (usize, &RingInstance<T>)| {
            debug!(instance = i, items = inst.items.len(), "solving batch instance");
            Self::run(&inst.items, &inst.matrix, inst.anchor.as_ref(), config)
        };

        #[cfg(feature = "parallel")]
        let results = instances.par_iter().enumerate().map(solve).collect();
        #[cfg(not(feature = "parallel"))]
        let results = instances.iter().enumerate().map(solve).collect();

        results
    }

    /// Solves one instance once per anchor, sharing the matrix read-only.
    pub fn run_each_anchor<T>(
        items: &[T],
        matrix: &AdjacencyMatrix,
        anchors: &[T],
        config: &SearchConfig,
    ) -> Vec<Result<RingResult<T>, RingError>>
    where
        T: Clone + Eq + Hash + Debug + Send + Sync,
    {
        debug!(anchors = anchors.len(), items = items.len(), "starting ring anchor sweep");
        let solve = |anchor: &T| {
            debug!(?anchor, "solving anchored instance");
            Self::run(items, matrix, Some(anchor), config)
        };

        #[cfg(feature = "parallel")]
        let results = anchors.par_iter().map(solve).collect();
        #[cfg(not(feature = "parallel"))]
        let results = anchors.iter().map(solve).collect();

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyBuilder;
    use crate::ring::SearchStatus;

    #[test]
    fn test_batch_keeps_order_and_errors() {
        let good = AdjacencyBuilder::new()
            .forbid("A", "C")
            .build_for(&["A", "B", "C", "D"])
            .unwrap()
            .1;
        let instances = vec![
            RingInstance::new(vec!["A", "B", "C", "D"], good.clone()).with_anchor("B"),
            RingInstance::new(vec!["A", "B"], good.clone()),
            RingInstance::new(vec!["A", "B", "C", "D"], AdjacencyMatrix::filled(4, 0)),
        ];

        let results = RingRunner::run_batch(&instances, &SearchConfig::default());
        assert_eq!(results.len(), 3);

        let first = results[0].as_ref().unwrap();
        assert_eq!(first.best_score(), Some(4));
        assert_eq!(first.best.as_ref().unwrap().items[0], "B");

        assert!(matches!(results[1], Err(RingError::MalformedMatrix { .. })));

        let third = results[2].as_ref().unwrap();
        assert_eq!(third.status, SearchStatus::Infeasible);
    }

    #[test]
    fn test_each_anchor_same_optimum() {
        let items = ["A", "B", "C", "D", "E"];
        let matrix = AdjacencyBuilder::new()
            .forbid("A", "C")
            .prefer("B", "E", 4)
            .prefer("D", "A", 2)
            .build_for(&items)
            .unwrap()
            .1;
        let results = RingRunner::run_each_anchor(&items, &matrix, &items, &SearchConfig::default());
        let scores: Vec<_> = results
            .iter()
            .map(|r| r.as_ref().unwrap().best_score())
            .collect();
        assert!(scores.iter().all(|&s| s == scores[0]));
        for (anchor, r) in items.iter().zip(&results) {
            assert_eq!(&r.as_ref().unwrap().best.as_ref().unwrap().items[0], anchor);
        }
    }

    #[test]
    fn test_each_anchor_unknown() {
        let matrix = AdjacencyMatrix::filled(2, 1);
        let results =
            RingRunner::run_each_anchor(&["a", "b"], &matrix, &["b", "z"], &SearchConfig::default());
        assert!(results[0].is_ok());
        assert_eq!(
            results[1].as_ref().unwrap_err(),
            &RingError::UnknownAnchor("\"z\"".into())
        );
    }
}
