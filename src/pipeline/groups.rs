use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use indexmap::{Equivalent, IndexMap};
use serde::Serialize;

/// Result of a grouping terminal: key → collected value.
///
/// Keys iterate in the order they were first seen in the input; values collected per key keep
/// input order too. Serializes as a map in that same order.
#[derive(Clone, Serialize)]
#[serde(transparent)]
pub struct Groups<K, V> {
    map: IndexMap<K, V>,
}

impl<K, V> Groups<K, V>
where
    K: Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Returns the slot for `key`, inserting `init()` if the key is new.
    pub(crate) fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        self.map.entry(key).or_insert_with(init)
    }

    /// Apply `f` to every collected value, keeping keys and key order.
    pub fn map_values<W>(self, mut f: impl FnMut(V) -> W) -> Groups<K, W> {
        Groups {
            map: self.map.into_iter().map(|(k, v)| (k, f(v))).collect(),
        }
    }

    /// Value collected for `key`, if the key occurred.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.map.get(key)
    }

    /// Whether `key` occurred in the input.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.map.contains_key(key)
    }
}

impl<K, V> Groups<K, V> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    /// `(key, value)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }
}

/// Two groupings are equal when they hold the same pairs in the same key order.
impl<K: PartialEq, V: PartialEq> PartialEq for Groups<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.map.len() == other.map.len() && self.map.iter().eq(other.map.iter())
    }
}

impl<K: Eq, V: Eq> Eq for Groups<K, V> {}

/// Panics if `key` is not present, like `HashMap`'s indexing.
impl<K, V, Q> Index<&Q> for Groups<K, V>
where
    Q: Hash + Equivalent<K> + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        &self.map[key]
    }
}

impl<K, V> IntoIterator for Groups<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Groups<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.map, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Groups;

    fn cloud_groups() -> Groups<String, Vec<&'static str>> {
        let mut g = Groups::new();
        for (cat, name) in [("Framework", "Spring"), ("Cloud", "AWS"), ("Cloud", "GCP")] {
            g.entry_or_insert_with(cat.to_string(), Vec::new).push(name);
        }
        g
    }

    #[test]
    fn keys_follow_first_seen_order() {
        let g = cloud_groups();
        let keys: Vec<_> = g.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Framework", "Cloud"]);
        assert_eq!(g.get("Cloud"), Some(&vec!["AWS", "GCP"]));
        assert_eq!(g["Framework"], vec!["Spring"]);
        assert!(g.contains_key("Cloud"));
        assert!(g.get("Data").is_none());
    }

    #[test]
    fn serializes_as_ordered_json_object() {
        let json = serde_json::to_string(&cloud_groups()).unwrap();
        assert_eq!(json, r#"{"Framework":["Spring"],"Cloud":["AWS","GCP"]}"#);
    }

    #[test]
    fn map_values_keeps_key_order() {
        let counts = cloud_groups().map_values(|v| v.len());
        let pairs: Vec<_> = counts.into_iter().collect();
        assert_eq!(
            pairs,
            vec![("Framework".to_string(), 1), ("Cloud".to_string(), 2)]
        );
    }

    #[test]
    fn equality_depends_on_key_order() {
        let mut reordered = Groups::new();
        reordered.entry_or_insert_with("Cloud".to_string(), Vec::new).extend(["AWS", "GCP"]);
        reordered.entry_or_insert_with("Framework".to_string(), Vec::new).push("Spring");

        assert_eq!(cloud_groups(), cloud_groups());
        assert_ne!(cloud_groups(), reordered);
    }

    #[test]
    fn debug_renders_as_a_map() {
        let counts = cloud_groups().map_values(|v| v.len());
        assert_eq!(format!("{counts:?}"), r#"{"Framework": 1, "Cloud": 2}"#);
    }
}
