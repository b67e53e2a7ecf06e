//! Key policies decide how an operator keys the entries it emits.
//!
//! Every sequence in this crate yields `(key, value)` entries. An operator
//! either passes the source key through ([`SourceKeys`]), re-keys its output
//! with fresh 0-based ordinals ([`Ordinal`], the default), or, for [`chain`],
//! folds the source key into the value ([`KeyedPairs`]).
//!
//! [`chain`]: crate::iterator::chain::chain

/// Maps a source entry to the entry an operator emits.
pub trait KeyPolicy<K, V> {
    type Key;
    type Value;

    fn apply(&mut self, key: K, value: V) -> (Self::Key, Self::Value);
}

/// Emits the source key unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SourceKeys;

impl<K, V> KeyPolicy<K, V> for SourceKeys {
    type Key = K;
    type Value = V;

    #[inline]
    fn apply(&mut self, key: K, value: V) -> (K, V) {
        (key, value)
    }
}

/// Drops the source key and numbers emitted values from 0.
#[derive(Debug, Default, Clone, PartialEq, Eq, new)]
pub struct Ordinal {
    #[new(default)]
    next: usize,
}

impl Ordinal {
    fn bump(&mut self) -> usize {
        let key = self.next;
        self.next += 1;
        key
    }
}

impl<K, V> KeyPolicy<K, V> for Ordinal {
    type Key = usize;
    type Value = V;

    #[inline]
    fn apply(&mut self, _key: K, value: V) -> (usize, V) {
        (self.bump(), value)
    }
}

/// Keeps the source key inside the value, as a `(key, value)` pair, and
/// numbers emitted pairs from 0.
#[derive(Debug, Default, Clone, PartialEq, Eq, new)]
pub struct KeyedPairs {
    #[new(default)]
    ordinal: Ordinal,
}

impl<K, V> KeyPolicy<K, V> for KeyedPairs {
    type Key = usize;
    type Value = (K, V);

    #[inline]
    fn apply(&mut self, key: K, value: V) -> (usize, (K, V)) {
        (self.ordinal.bump(), (key, value))
    }
}

/// Policies allowed to key a sequence built out of several sources.
///
/// Keys of distinct sources are not unique across them, so passing them
/// through is not allowed.
pub trait MergingKeyPolicy<K, V>: KeyPolicy<K, V> {}

impl<K, V> MergingKeyPolicy<K, V> for Ordinal {}

impl<K, V> MergingKeyPolicy<K, V> for KeyedPairs {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn should_pass_source_keys_through() {
        let mut keys = SourceKeys;
        assert_eq!(keys.apply(7, 'a'), (7, 'a'));
        assert_eq!(keys.apply(3, 'b'), (3, 'b'));
    }

    #[test]
    fn should_number_values_from_zero() {
        let mut keys = Ordinal::new();
        assert_eq!(keys.apply(7, 'a'), (0, 'a'));
        assert_eq!(keys.apply(3, 'b'), (1, 'b'));
        assert_eq!(keys.apply("x", 'c'), (2, 'c'));
    }

    #[test]
    fn should_fold_source_keys_into_values() {
        let mut keys = KeyedPairs::new();
        assert_eq!(keys.apply(4, 'e'), (0, (4, 'e')));
        assert_eq!(keys.apply(0, 'a'), (1, (0, 'a')));
    }
}
