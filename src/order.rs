use serde::{Deserialize, Serialize};

/// Which of several equal extremal keys a window reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Direction {
    /// The earliest occurrence wins.
    Leftmost,
    /// The latest occurrence wins.
    #[default]
    Rightmost,
}

/// Maps an element to the key it is ordered by.
pub trait ToKey<T> {
    type Key: Ord;
    fn key(&self, elem: &T) -> Self::Key;
}

/// Elements are their own key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<T: Ord + Clone> ToKey<T> for Identity {
    type Key = T;
    #[inline(always)]
    fn key(&self, elem: &T) -> T {
        elem.clone()
    }
}

/// Any `Fn(&T) -> K` closure extracts keys.
impl<T, K: Ord, F: Fn(&T) -> K> ToKey<T> for F {
    type Key = K;
    #[inline(always)]
    fn key(&self, elem: &T) -> K {
        self(elem)
    }
}

/// A comparator deciding which of two keys is preferred.
///
/// Deques and heaps are parameterized over an `Order` so the same code
/// answers both minimum and maximum queries.
pub trait Order {
    /// `a` is strictly preferred over `b`.
    fn better<K: Ord + ?Sized>(a: &K, b: &K) -> bool;

    #[inline(always)]
    fn better_or_equal<K: Ord + ?Sized>(a: &K, b: &K) -> bool {
        !Self::better(b, a)
    }

    fn name() -> &'static str;
}

/// Smaller keys are better.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

/// Larger keys are better.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl Order for Min {
    #[inline(always)]
    fn better<K: Ord + ?Sized>(a: &K, b: &K) -> bool {
        a < b
    }
    fn name() -> &'static str {
        "min"
    }
}

impl Order for Max {
    #[inline(always)]
    fn better<K: Ord + ?Sized>(a: &K, b: &K) -> bool {
        a > b
    }
    fn name() -> &'static str {
        "max"
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn comparators() {
        assert!(Min::better(&1, &2));
        assert!(!Min::better(&2, &2));
        assert!(Min::better_or_equal(&2, &2));
        assert!(Max::better(&3, &2));
        assert!(!Max::better_or_equal(&1, &2));
    }

    #[test]
    fn closure_keys() {
        let by_abs = |x: &i32| x.abs();
        assert_eq!(by_abs.key(&-7), 7);
        assert_eq!(ToKey::<u8>::key(&Identity, &4), 4);
    }
}
