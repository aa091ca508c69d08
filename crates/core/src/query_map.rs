//! Ordered mapping from media-query strings to caller values.

use alloc::string::String;
use alloc::vec::Vec;

/// Query strings paired with the values registered against them.
///
/// Iteration follows first-insertion order. Inserting a query that is
/// already present replaces its value in place, so the last registration
/// for a query wins without moving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for QueryMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueryMap<T> {
    /// Creates an empty query map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a query, returning the value it replaced.
    pub fn insert(&mut self, query: impl Into<String>, value: T) -> Option<T> {
        let query = query.into();
        match self.entries.iter_mut().find(|(q, _)| *q == query) {
            Some((_, existing)) => Some(core::mem::replace(existing, value)),
            None => {
                self.entries.push((query, value));
                None
            }
        }
    }

    /// Returns the value registered for `query`.
    pub fn get(&self, query: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(q, _)| q == query)
            .map(|(_, v)| v)
    }

    /// Returns the number of queries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no queries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(query, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(q, v)| (q.as_str(), v))
    }

    /// Iterates over the query strings in order.
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(q, _)| q.as_str())
    }
}

impl<T> IntoIterator for QueryMap<T> {
    type Item = (String, T);
    type IntoIter = alloc::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for QueryMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, T> Extend<(K, T)> for QueryMap<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (query, value) in iter {
            self.insert(query, value);
        }
    }
}

impl<K: Into<String>, T, const N: usize> From<[(K, T); N]> for QueryMap<T> {
    fn from(entries: [(K, T); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_insertion_order() {
        let map = QueryMap::from([("(min-width: 100px)", 'A'), ("(max-width: 50px)", 'B')]);

        let queries: Vec<_> = map.queries().collect();
        assert_eq!(queries, vec!["(min-width: 100px)", "(max-width: 50px)"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_last_registration_wins_in_place() {
        let mut map = QueryMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.insert("a", 3), Some(1));

        let pairs: Vec<_> = map.iter().map(|(q, v)| (q, *v)).collect();
        assert_eq!(pairs, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_from_iter_dedupes() {
        let map: QueryMap<i32> = vec![("x", 1), ("y", 2), ("x", 9)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("x"), Some(&9));
        assert_eq!(map.get("z"), None);
    }

    #[test]
    fn test_empty() {
        let map: QueryMap<()> = QueryMap::default();
        assert!(map.is_empty());
    }
}
