use std::cmp::Ordering;

/// The direction a sort should arrange its elements in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// smallest element first
    #[default]
    Ascending,
    /// largest element first
    Descending,
}

/// A generalisation of the Ord trait.
/// The main difference is that the Orderer is able to
/// reference some internal state as it is passed by ref
/// and compares some other type.
pub trait Orderer<T> {
    /// the type to compare
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// An orderer that just delegates to the Ord implementation on the type itself
#[derive(Default, Clone, Copy, Debug)]
pub struct OrdOrderer {}
impl OrdOrderer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<T: Ord> Orderer<T> for OrdOrderer {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// an orderer that compares values based on a key extracted from then.
pub struct KeyOrderer<F> {
    key_extractor: F,
}
impl<F> KeyOrderer<F> {
    pub fn new<T, K>(key_extractor: F) -> Self
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        Self { key_extractor }
    }
}

impl<F, T, K> Orderer<T> for KeyOrderer<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        let left = (self.key_extractor)(left);
        let right = (self.key_extractor)(right);
        left.cmp(&right)
    }
}

/// an orderer that compares values by delegating to a comparison function
pub struct FuncOrderer<F> {
    comparator: F,
}

impl<F> FuncOrderer<F> {
    pub fn new<T>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        Self { comparator }
    }
}

impl<F, T> Orderer<T> for FuncOrderer<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.comparator)(left, right)
    }
}

/// Wraps another orderer and applies a sort direction to it.
///
/// Descending order flips the result of the inner comparison,
/// so equal elements stay equal in both directions.
pub struct DirectedOrderer<O> {
    inner: O,
    direction: SortDirection,
}

impl<O> DirectedOrderer<O> {
    pub fn new(inner: O, direction: SortDirection) -> Self {
        Self { inner, direction }
    }
}

impl<O, T> Orderer<T> for DirectedOrderer<O>
where
    O: Orderer<T>,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        let ordering = self.inner.compare(left, right);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use super::{DirectedOrderer, FuncOrderer, KeyOrderer, OrdOrderer, Orderer, SortDirection};

    #[test]
    fn test_default_direction() {
        assert_eq!(SortDirection::Ascending, SortDirection::default());
    }

    #[test]
    fn test_directed() {
        let ascending = DirectedOrderer::new(OrdOrderer::new(), SortDirection::Ascending);
        let descending = DirectedOrderer::new(OrdOrderer::new(), SortDirection::Descending);

        assert_eq!(Ordering::Less, ascending.compare(&1, &2));
        assert_eq!(Ordering::Greater, descending.compare(&1, &2));
        assert_eq!(Ordering::Equal, descending.compare(&2, &2));
    }

    #[test]
    fn test_key_and_func() {
        let by_len = KeyOrderer::new(|s: &&str| s.len());
        assert_eq!(Ordering::Less, by_len.compare(&"b", &"aa"));

        let reversed = FuncOrderer::new(|l: &i32, r: &i32| r.cmp(l));
        assert_eq!(Ordering::Greater, reversed.compare(&1, &2));
    }
}
