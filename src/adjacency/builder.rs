//! Construction of an adjacency matrix from constraint pairs.

use super::matrix::AdjacencyMatrix;
use super::registry::ItemRegistry;
use crate::error::RingError;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A weighted preference: `pair` scores `weight` when adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preference<T> {
    pub pair: (T, T),
    pub weight: u32,
}

/// Collects forbidden pairs, weighted preferences and a default weight,
/// and turns them into an [`AdjacencyMatrix`] for a registry.
///
/// Every unlisted pair gets `default_weight`. Preferences overwrite the
/// default. Forbidden pairs are applied last, so zero always wins over a
/// preference for the same pair.
///
/// # Examples
///
/// ```
/// use ring_layout::adjacency::{AdjacencyBuilder, ItemRegistry};
///
/// let registry = ItemRegistry::new(vec!["Galley", "Airlock", "Medbay", "Hygiene"]).unwrap();
/// let matrix = AdjacencyBuilder::new()
///     .with_default_weight(1)
///     .forbid("Galley", "Hygiene")
///     .prefer("Galley", "Medbay", 5)
///     .build(&registry)
///     .unwrap();
///
/// assert_eq!(matrix.weight(0, 3), 0);
/// assert_eq!(matrix.weight(2, 0), 5);
/// assert_eq!(matrix.weight(1, 2), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyBuilder<T> {
    /// Pairs that may never be ring neighbors.
    #[cfg_attr(feature = "serde", serde(default))]
    pub zero_pairs: Vec<(T, T)>,
    /// Pairs with an explicit adjacency score.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: Vec<Preference<T>>,
    /// Weight of every pair not listed above.
    #[cfg_attr(feature = "serde", serde(default = "default_weight"))]
    pub default_weight: u32,
}

#[cfg(feature = "serde")]
fn default_weight() -> u32 {
    1
}

impl<T> Default for AdjacencyBuilder<T> {
    fn default() -> Self {
        Self {
            zero_pairs: Vec::new(),
            preferences: Vec::new(),
            default_weight: 1,
        }
    }
}

impl<T> AdjacencyBuilder<T> {
    /// Creates an empty builder with default weight 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weight of unlisted pairs.
    pub fn with_default_weight(mut self, weight: u32) -> Self {
        self.default_weight = weight;
        self
    }

    /// Forbids `a` and `b` from being ring neighbors.
    pub fn forbid(mut self, a: T, b: T) -> Self {
        self.zero_pairs.push((a, b));
        self
    }

    /// Scores the pair `(a, b)` with `weight`.
    pub fn prefer(mut self, a: T, b: T, weight: u32) -> Self {
        self.preferences.push(Preference {
            pair: (a, b),
            weight,
        });
        self
    }
}

impl<T> AdjacencyBuilder<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Keeps only the pairs whose both ends are in `items`.
    ///
    /// Used to cut a catalog-wide constraint set down to the items of one
    /// instance before building.
    pub fn restrict_to(&self, items: &[T]) -> Self {
        let keep: HashSet<&T> = items.iter().collect();
        Self {
            zero_pairs: self
                .zero_pairs
                .iter()
                .filter(|(a, b)| keep.contains(a) && keep.contains(b))
                .cloned()
                .collect(),
            preferences: self
                .preferences
                .iter()
                .filter(|p| keep.contains(&p.pair.0) && keep.contains(&p.pair.1))
                .cloned()
                .collect(),
            default_weight: self.default_weight,
        }
    }

    /// Builds the matrix for `registry`.
    ///
    /// Fails with [`RingError::UnknownConstraintItem`] if a pair names an
    /// unregistered item and with [`RingError::SelfPair`] if a pair names
    /// the same item twice.
    pub fn build(&self, registry: &ItemRegistry<T>) -> Result<AdjacencyMatrix, RingError> {
        let mut matrix = AdjacencyMatrix::filled(registry.len(), self.default_weight);
        for p in &self.preferences {
            let (i, j) = resolve(registry, &p.pair.0, &p.pair.1)?;
            matrix.set_pair(i, j, p.weight);
        }
        for (a, b) in &self.zero_pairs {
            let (i, j) = resolve(registry, a, b)?;
            matrix.set_pair(i, j, 0);
        }
        Ok(matrix)
    }

    /// Registers `items` and builds their matrix in one step.
    pub fn build_for(&self, items: &[T]) -> Result<(ItemRegistry<T>, AdjacencyMatrix), RingError> {
        let registry = ItemRegistry::from_slice(items)?;
        let matrix = self.build(&registry)?;
        Ok((registry, matrix))
    }
}

fn resolve<T>(registry: &ItemRegistry<T>, a: &T, b: &T) -> Result<(usize, usize), RingError>
where
    T: Clone + Eq + Hash + Debug,
{
    let i = registry.require(a)?;
    let j = registry.require(b)?;
    if i == j {
        return Err(RingError::SelfPair(format!("{a:?}")));
    }
    Ok((i, j))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms() -> ItemRegistry<&'static str> {
        ItemRegistry::new(vec!["A", "B", "C", "D"]).unwrap()
    }

    #[test]
    fn test_default_fill() {
        let m = AdjacencyBuilder::new()
            .with_default_weight(3)
            .build(&rooms())
            .unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m.weight(i, j), if i == j { 0 } else { 3 });
            }
        }
    }

    #[test]
    fn test_forbidden_overrides_preference() {
        let m = AdjacencyBuilder::new()
            .forbid("A", "C")
            .prefer("C", "A", 9)
            .prefer("B", "D", 4)
            .build(&rooms())
            .unwrap();
        assert_eq!(m.weight(0, 2), 0);
        assert_eq!(m.weight(2, 0), 0);
        assert_eq!(m.weight(1, 3), 4);
        assert_eq!(m.weight(3, 1), 4);
        assert_eq!(m.weight(0, 1), 1);
    }

    #[test]
    fn test_unknown_item() {
        let err = AdjacencyBuilder::new()
            .forbid("A", "Z")
            .build(&rooms())
            .unwrap_err();
        assert_eq!(err, RingError::UnknownConstraintItem("\"Z\"".into()));

        let err = AdjacencyBuilder::new()
            .prefer("Q", "A", 2)
            .build(&rooms())
            .unwrap_err();
        assert_eq!(err, RingError::UnknownConstraintItem("\"Q\"".into()));
    }

    #[test]
    fn test_self_pair() {
        let err = AdjacencyBuilder::new()
            .prefer("B", "B", 2)
            .build(&rooms())
            .unwrap_err();
        assert_eq!(err, RingError::SelfPair("\"B\"".into()));
    }

    #[test]
    fn test_restrict_to_subset() {
        let catalog = AdjacencyBuilder::new()
            .forbid("A", "C")
            .forbid("A", "Z")
            .prefer("B", "Y", 7)
            .prefer("B", "D", 2);

        let subset = catalog.restrict_to(&["A", "B", "C", "D"]);
        assert_eq!(subset.zero_pairs, vec![("A", "C")]);
        assert_eq!(subset.preferences.len(), 1);
        assert_eq!(subset.preferences[0].pair, ("B", "D"));
        assert!(subset.build(&rooms()).is_ok());
        assert!(catalog.build(&rooms()).is_err());
    }

    #[test]
    fn test_build_for() {
        let (registry, m) = AdjacencyBuilder::new()
            .forbid(1u8, 2)
            .build_for(&[1, 2, 3])
            .unwrap();
        assert_eq!(registry.len(), 3);
        assert!(m.is_forbidden(0, 1));
    }

    #[test]
    fn test_build_for_duplicate_items() {
        let err = AdjacencyBuilder::<u8>::new().build_for(&[1, 1]).unwrap_err();
        assert_eq!(err, RingError::DuplicateItem("1".into()));
    }
}
