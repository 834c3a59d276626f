//! Per-column value lookup.

use std::collections::HashMap;

use crate::scalar::Scalar;

/// Lookup from a literal cell value to its replacement.
///
/// Keys are matched with [`Scalar`] equality; anything not present as a key
/// passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueMap {
    entries: HashMap<Scalar, Scalar>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the replacement for `key`, returning the previous one.
    pub fn insert(&mut self, key: impl Into<Scalar>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.entries.insert(key.into(), value.into())
    }

    /// Replacement for `key`, if the key is mapped.
    pub fn get(&self, key: &Scalar) -> Option<&Scalar> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ValueMap
where
    K: Into<Scalar>,
    V: Into<Scalar>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ValueMap
where
    K: Into<Scalar>,
    V: Into<Scalar>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_literal_value() {
        let map = ValueMap::from([(1, "aa"), (2, "bb")]);
        assert_eq!(map.get(&Scalar::Int(1)), Some(&Scalar::from("aa")));
        assert_eq!(map.get(&Scalar::Float(2.0)), Some(&Scalar::from("bb")));
        assert_eq!(map.get(&Scalar::from("1")), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn later_insert_replaces() {
        let mut map = ValueMap::new();
        assert!(map.is_empty());
        map.insert("x", "a");
        assert_eq!(map.insert("x", "b"), Some(Scalar::from("a")));
        assert_eq!(map.get(&Scalar::from("x")), Some(&Scalar::from("b")));
    }
}
