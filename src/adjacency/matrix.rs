//! Validated adjacency weight matrix.

use crate::error::RingError;

/// A square, symmetric, zero-diagonal matrix of adjacency weights.
///
/// `weight(i, j) == 0` forbids items `i` and `j` from being ring
/// neighbors; a positive weight is the score of that ring edge.
///
/// All constructors validate the invariants, so lookups for in-range
/// indices never fail.
///
/// # Examples
///
/// ```
/// use ring_layout::adjacency::AdjacencyMatrix;
///
/// let m = AdjacencyMatrix::from_rows(vec![
///     vec![0, 2, 0],
///     vec![2, 0, 1],
///     vec![0, 1, 0],
/// ]).unwrap();
/// assert_eq!(m.weight(0, 1), 2);
/// assert!(m.is_forbidden(0, 2));
/// assert_eq!(m.zero_count(0), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
pub struct AdjacencyMatrix {
    n: usize,
    weights: Vec<u32>,
}

impl AdjacencyMatrix {
    /// Builds a matrix from row vectors, rejecting ragged, non-square,
    /// asymmetric or non-zero-diagonal input.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, RingError> {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);
        for row in &rows {
            if row.len() != n {
                return Err(RingError::MalformedMatrix {
                    rows: n,
                    cols: row.len(),
                    items: n,
                });
            }
            weights.extend_from_slice(row);
        }
        let matrix = Self { n, weights };
        matrix.validate()?;
        Ok(matrix)
    }

    /// A matrix where every off-diagonal pair has weight `default_weight`.
    pub fn filled(n: usize, default_weight: u32) -> Self {
        let mut weights = vec![default_weight; n * n];
        for i in 0..n {
            weights[i * n + i] = 0;
        }
        Self { n, weights }
    }

    fn validate(&self) -> Result<(), RingError> {
        for i in 0..self.n {
            if self.weight(i, i) != 0 {
                return Err(RingError::NonZeroDiagonal { index: i });
            }
            for j in (i + 1)..self.n {
                if self.weight(i, j) != self.weight(j, i) {
                    return Err(RingError::AsymmetricMatrix { row: i, col: j });
                }
            }
        }
        Ok(())
    }

    /// Sets both `(i, j)` and `(j, i)`. Diagonal writes are ignored.
    pub(crate) fn set_pair(&mut self, i: usize, j: usize, weight: u32) {
        if i == j {
            return;
        }
        self.weights[i * self.n + j] = weight;
        self.weights[j * self.n + i] = weight;
    }

    /// Dimension of the matrix.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix is `0×0`.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight between items `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> u32 {
        self.weights[i * self.n + j]
    }

    /// Whether `i` and `j` may never be ring neighbors.
    #[inline]
    pub fn is_forbidden(&self, i: usize, j: usize) -> bool {
        self.weight(i, j) == 0
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> &[u32] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    /// Number of zero entries in row `i`, diagonal included.
    ///
    /// This is the item's restrictiveness: the more forbidden neighbors,
    /// the harder the item is to place.
    pub fn zero_count(&self, i: usize) -> usize {
        self.row(i).iter().filter(|&&w| w == 0).count()
    }

    /// Restrictiveness of every item, in index order.
    pub fn zero_counts(&self) -> Vec<usize> {
        (0..self.n).map(|i| self.zero_count(i)).collect()
    }

    /// Sum of all ring edges of `order`, closing edge included.
    ///
    /// Returns `None` if any ring edge is forbidden. Rings of zero or one
    /// item have no edges and score 0.
    ///
    /// # Panics
    /// Panics if `order` holds an out-of-range index.
    pub fn ring_score(&self, order: &[usize]) -> Option<u64> {
        if order.len() < 2 {
            return Some(0);
        }
        let mut total = 0u64;
        for (k, &a) in order.iter().enumerate() {
            let b = order[(k + 1) % order.len()];
            let w = self.weight(a, b);
            if w == 0 {
                return None;
            }
            total += u64::from(w);
        }
        Some(total)
    }

    /// Checks that the matrix dimension matches an item count.
    pub fn check_items(&self, items: usize) -> Result<(), RingError> {
        if self.n != items {
            return Err(RingError::MalformedMatrix {
                rows: self.n,
                cols: self.n,
                items,
            });
        }
        Ok(())
    }

    /// The matrix as row vectors.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.weights
            .chunks(self.n.max(1))
            .take(self.n)
            .map(<[u32]>::to_vec)
            .collect()
    }
}

impl TryFrom<Vec<Vec<u32>>> for AdjacencyMatrix {
    type Error = RingError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<u32>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(vec![
            vec![0, 1, 0, 1],
            vec![1, 0, 1, 1],
            vec![0, 1, 0, 1],
            vec![1, 1, 1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let m = sample();
        assert_eq!(m.len(), 4);
        assert_eq!(m.weight(1, 2), 1);
        assert!(m.is_forbidden(0, 2));
        assert!(m.is_forbidden(2, 0));
        assert_eq!(m.row(3), &[1, 1, 1, 0]);
    }

    #[test]
    fn test_zero_counts() {
        let m = sample();
        assert_eq!(m.zero_counts(), vec![2, 1, 2, 1]);
    }

    #[test]
    fn test_ring_score() {
        let m = sample();
        assert_eq!(m.ring_score(&[0, 1, 2, 3]), Some(4));
        assert_eq!(m.ring_score(&[0, 2, 1, 3]), None);
        assert_eq!(m.ring_score(&[2]), Some(0));
        assert_eq!(m.ring_score(&[]), Some(0));
    }

    #[test]
    fn test_two_item_ring_counts_edge_twice() {
        let m = AdjacencyMatrix::from_rows(vec![vec![0, 3], vec![3, 0]]).unwrap();
        assert_eq!(m.ring_score(&[0, 1]), Some(6));
    }

    #[test]
    fn test_ragged_rejected() {
        let err = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            RingError::MalformedMatrix {
                rows: 2,
                cols: 1,
                items: 2
            }
        );
    }

    #[test]
    fn test_asymmetric_rejected() {
        let err = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap_err();
        assert_eq!(err, RingError::AsymmetricMatrix { row: 0, col: 1 });
    }

    #[test]
    fn test_diagonal_rejected() {
        let err = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![1, 5]]).unwrap_err();
        assert_eq!(err, RingError::NonZeroDiagonal { index: 1 });
    }

    #[test]
    fn test_filled_and_set_pair() {
        let mut m = AdjacencyMatrix::filled(3, 2);
        m.set_pair(0, 2, 0);
        m.set_pair(1, 1, 9);
        assert_eq!(
            m.to_rows(),
            vec![vec![0, 2, 0], vec![2, 0, 2], vec![0, 2, 0]]
        );
    }

    #[test]
    fn test_check_items() {
        let m = sample();
        assert!(m.check_items(4).is_ok());
        assert_eq!(
            m.check_items(3),
            Err(RingError::MalformedMatrix {
                rows: 4,
                cols: 4,
                items: 3
            })
        );
    }

    #[test]
    fn test_empty_matrix() {
        let m = AdjacencyMatrix::from_rows(vec![]).unwrap();
        assert!(m.is_empty());
        assert!(m.to_rows().is_empty());
    }
}
