//! Seeded random instances for benchmarks and tests.

use crate::adjacency::AdjacencyMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a random valid adjacency matrix.
///
/// Each off-diagonal pair is forbidden with probability
/// `forbid_probability`; otherwise its weight is uniform in
/// `1..=max_weight`. The same seed always yields the same matrix.
///
/// # Panics
/// Panics if `max_weight == 0` or `forbid_probability` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use ring_layout::instance::random_matrix;
///
/// let a = random_matrix(8, 0.2, 5, 42);
/// let b = random_matrix(8, 0.2, 5, 42);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 8);
/// ```
pub fn random_matrix(n: usize, forbid_probability: f64, max_weight: u32, seed: u64) -> AdjacencyMatrix {
    assert!(max_weight > 0, "max_weight must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = AdjacencyMatrix::filled(n, 1);
    for i in 0..n {
        for j in (i + 1)..n {
            let w = if rng.random_bool(forbid_probability) {
                0
            } else {
                rng.random_range(1..=max_weight)
            };
            matrix.set_pair(i, j, w);
        }
    }
    matrix
}

/// Item names `"R0"`, `"R1"`, ... for an `n`-item instance.
pub fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("R{i}")).collect()
}
