//! Constrained circular arrangement search.
//!
//! Finds a high-scoring ring arrangement of `N` labeled items (rooms)
//! given a pairwise compatibility matrix:
//!
//! - **Adjacency model**: [`adjacency`] — item registry, validated weight
//!   matrix where zero forbids a neighbor pair, and a builder turning
//!   forbidden/preferred pairs into a matrix.
//! - **Ring search**: [`ring`] — depth-first branch-and-bound with anchor
//!   symmetry breaking, forbidden-edge pruning, ring-closure lookahead, a
//!   greedy ordering heuristic and search-tree statistics.
//! - **Instances**: [`instance`] — seeded random matrices for benchmarks.
//!
//! # Example
//!
//! ```
//! use ring_layout::adjacency::AdjacencyBuilder;
//!
//! let rooms = ["Airlock", "Galley", "Medbay", "Hygiene"];
//! let (_, matrix) = AdjacencyBuilder::new()
//!     .forbid("Galley", "Hygiene")
//!     .prefer("Galley", "Medbay", 3)
//!     .build_for(&rooms)
//!     .unwrap();
//!
//! let result = ring_layout::solve(&rooms, &matrix, Some(&"Airlock")).unwrap();
//! let best = result.best.unwrap();
//! assert_eq!(best.items[0], "Airlock");
//! assert_eq!(best.score, 6);
//! ```
//!
//! # Scope
//!
//! The search is exact and exponential in the worst case; keep `N`
//! small or bound the run with [`ring::SearchConfig::node_limit`].
//! Each call owns its state, so independent calls may run on separate
//! threads (see [`ring::RingRunner::run_batch`]).

pub mod adjacency;
pub mod error;
pub mod instance;
pub mod ring;

use std::fmt::Debug;
use std::hash::Hash;

pub use error::RingError;

use adjacency::AdjacencyMatrix;
use ring::{RingResult, RingRunner, SearchConfig};

/// Solves one instance with the default configuration.
///
/// `anchor` is pinned to slot 0; `None` pins the first item. See
/// [`RingRunner::run`] for errors and outcomes.
pub fn solve<T>(
    items: &[T],
    matrix: &AdjacencyMatrix,
    anchor: Option<&T>,
) -> Result<RingResult<T>, RingError>
where
    T: Clone + Eq + Hash + Debug,
{
    RingRunner::run(items, matrix, anchor, &SearchConfig::default())
}
