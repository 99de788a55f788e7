//! Item registry.

use crate::error::RingError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An ordered, duplicate-free sequence of items with a bijective
/// item → index mapping.
///
/// Index order is the caller-supplied order; the item at index 0 is the
/// default anchor of a search.
///
/// # Examples
///
/// ```
/// use ring_layout::adjacency::ItemRegistry;
///
/// let registry = ItemRegistry::new(vec!["Galley", "Airlock", "Medbay"]).unwrap();
/// assert_eq!(registry.len(), 3);
/// assert_eq!(registry.index_of(&"Airlock"), Some(1));
/// assert_eq!(registry.item(2), &"Medbay");
/// ```
#[derive(Debug, Clone)]
pub struct ItemRegistry<T> {
    items: Vec<T>,
    index: HashMap<T, usize>,
}

impl<T> ItemRegistry<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Registers `items` in order.
    ///
    /// Fails with [`RingError::DuplicateItem`] if an identifier repeats.
    pub fn new(items: Vec<T>) -> Result<Self, RingError> {
        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if index.insert(item.clone(), i).is_some() {
                return Err(RingError::DuplicateItem(format!("{item:?}")));
            }
        }
        Ok(Self { items, index })
    }

    /// Registers a copy of `items`.
    pub fn from_slice(items: &[T]) -> Result<Self, RingError> {
        Self::new(items.to_vec())
    }

    /// Index of `item`, if registered.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.index.get(item).copied()
    }

    /// Index of `item`, or [`RingError::UnknownConstraintItem`].
    pub(crate) fn require(&self, item: &T) -> Result<usize, RingError> {
        self.index_of(item)
            .ok_or_else(|| RingError::UnknownConstraintItem(format!("{item:?}")))
    }

    /// Whether `item` is registered.
    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }
}

impl<T> ItemRegistry<T> {
    /// Item stored at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn item(&self, index: usize) -> &T {
        &self.items[index]
    }

    /// All items in index order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let registry = ItemRegistry::new(vec!["a", "b", "c"]).unwrap();
        assert_eq!(registry.items(), &["a", "b", "c"]);
        assert_eq!(registry.index_of(&"a"), Some(0));
        assert_eq!(registry.index_of(&"c"), Some(2));
        assert_eq!(registry.index_of(&"z"), None);
        assert!(registry.contains(&"b"));
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_registry_integer_items() {
        let registry = ItemRegistry::new(vec![10u32, 7, 3]).unwrap();
        assert_eq!(registry.index_of(&7), Some(1));
        assert_eq!(*registry.item(2), 3);
    }

    #[test]
    fn test_registry_duplicate() {
        let err = ItemRegistry::new(vec!["a", "b", "a"]).unwrap_err();
        assert_eq!(err, RingError::DuplicateItem("\"a\"".into()));
    }

    #[test]
    fn test_registry_require_unknown() {
        let registry = ItemRegistry::new(vec!["a"]).unwrap();
        assert_eq!(
            registry.require(&"b"),
            Err(RingError::UnknownConstraintItem("\"b\"".into()))
        );
    }

    #[test]
    fn test_registry_empty() {
        let registry = ItemRegistry::<String>::new(vec![]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
