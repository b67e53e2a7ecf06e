//! Drains keyed sequences into in-memory collections.

use std::collections::BTreeMap;

use fallible_iterator::FallibleIterator;

/// Collects the values, in order, dropping keys.
pub fn values<I, K, V>(input: I) -> Result<Vec<V>, I::Error>
where
    I: FallibleIterator<Item = (K, V)>,
{
    input.map(|(_, value)| Ok(value)).collect()
}

/// Collects `(key, value)` entries, in order.
pub fn entries<I, K, V>(input: I) -> Result<Vec<(K, V)>, I::Error>
where
    I: FallibleIterator<Item = (K, V)>,
{
    input.collect()
}

/// Collects entries by key. A later entry replaces an earlier one with the
/// same key.
pub fn to_map<I, K, V>(mut input: I) -> Result<BTreeMap<K, V>, I::Error>
where
    I: FallibleIterator<Item = (K, V)>,
    K: Ord,
{
    let mut map = BTreeMap::new();
    while let Some((key, value)) = input.next()? {
        map.insert(key, value);
    }
    Ok(map)
}
