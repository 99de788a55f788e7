//! Adjacency model.
//!
//! Holds the finite set of items to arrange, a stable item → index mapping,
//! and the symmetric weight matrix consulted by the search.
//!
//! # Key Components
//!
//! - **Registry**: [`ItemRegistry`] — ordered, duplicate-free item list
//! - **Matrix**: [`AdjacencyMatrix`] — validated `N×N` weights, zero = forbidden
//! - **Builder**: [`AdjacencyBuilder`] — forbidden pairs, weighted
//!   preferences and a default weight turned into a matrix
//!
//! # Weights
//!
//! A weight of exactly zero marks a hard-forbidden neighbor pair. Any
//! positive weight is the score awarded when the two items sit next to
//! each other on the ring. The diagonal is always zero.

mod builder;
mod matrix;
mod registry;

pub use builder::{AdjacencyBuilder, Preference};
pub use matrix::AdjacencyMatrix;
pub use registry::ItemRegistry;
