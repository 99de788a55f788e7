//! Error type shared by the adjacency model and the search runner.
//!
//! An instance without any feasible ring is *not* an error; it is reported
//! through [`RingResult::best`](crate::ring::RingResult::best) being `None`.

use thiserror::Error;

/// Things that may go wrong building an instance or starting a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("malformed adjacency matrix: {rows} rows, {cols} columns, {items} items")]
    MalformedMatrix {
        rows: usize,
        cols: usize,
        items: usize,
    },
    #[error("adjacency matrix is not symmetric at ({row}, {col})")]
    AsymmetricMatrix { row: usize, col: usize },
    #[error("adjacency matrix has a non-zero diagonal entry at index {index}")]
    NonZeroDiagonal { index: usize },
    #[error("anchor {0} is not a registered item")]
    UnknownAnchor(String),
    #[error("constraint references unregistered item {0}")]
    UnknownConstraintItem(String),
    #[error("item {0} appears more than once")]
    DuplicateItem(String),
    #[error("constraint pairs item {0} with itself")]
    SelfPair(String),
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}
