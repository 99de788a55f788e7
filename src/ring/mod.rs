//! Circular arrangement search.
//!
//! Places every item of an instance into a slot around a ring so that no
//! two ring neighbors form a forbidden pair, maximizing the sum of the
//! adjacency weights over all ring edges (the last slot neighbors the
//! first).
//!
//! The search is a depth-first branch-and-bound over slot assignments:
//!
//! - the anchor item is pinned to slot 0 to remove rotational symmetry
//! - candidates forbidden next to the previous item are pruned
//! - the last slot is pre-checked against the anchor (ring closure)
//! - surviving candidates are explored greedily by immediate gain, most
//!   restricted first on ties
//!
//! Every visited node is recorded in [`SearchStats`].
//!
//! The search is exhaustive and exponential in the worst case. Use
//! [`SearchConfig::node_limit`] or a cancellation flag to bound it.

mod batch;
mod config;
mod heuristic;
mod runner;
mod state;
mod stats;
mod types;


pub use config::SearchConfig;
pub use heuristic::{CandidateOrdering, CandidateRule, ImmediateGain, OrderingContext, Restrictiveness};
pub use runner::RingRunner;
pub use stats::SearchStats;
pub use types::{Layout, LayoutEdge, RingInstance, RingResult, SearchStatus};
