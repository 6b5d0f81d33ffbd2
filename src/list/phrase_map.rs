/// Insertion-ordered map from one phrase to another.
///
/// Lists stay small enough that a linear scan beats hashing, and the order
/// of entries is what the menus number and what practice starts from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseMap {
    entries: Vec<(String, String)>,
}

impl PhraseMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, &str)> {
        self.entries
            .get(index)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Upsert. An existing key keeps its position; a new key goes last.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Replaces the value of an existing key in place.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.entries[idx].1 = value.into();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.position(key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn pop_front(&mut self) -> Option<(String, String)> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Values become keys, in the current iteration order. Duplicate values
    /// collapse onto the first slot, keeping the last key seen for them.
    pub fn inverted(&self) -> PhraseMap {
        let mut out = PhraseMap::new();
        for (k, v) in &self.entries {
            out.insert(v.clone(), k.clone());
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PhraseMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PhraseMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut map = PhraseMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        map.insert("a", "3");
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut map: PhraseMap = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(map.remove("b").as_deref(), Some("2"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(map.remove("zzz").is_none());
    }

    #[test]
    fn test_pop_front_drains_in_order() {
        let mut map: PhraseMap = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(map.pop_front(), Some(("a".to_string(), "1".to_string())));
        assert_eq!(map.pop_front(), Some(("b".to_string(), "2".to_string())));
        assert_eq!(map.pop_front(), None);
    }

    #[test]
    fn test_inverted_keeps_iteration_order() {
        let map: PhraseMap = [("z", "1"), ("a", "2")].into_iter().collect();
        let inv = map.inverted();
        assert_eq!(inv.iter().collect::<Vec<_>>(), vec![("1", "z"), ("2", "a")]);
        assert_eq!(inv.inverted(), map);
    }

    #[test]
    fn test_inverted_duplicate_values_collapse() {
        let map: PhraseMap = [("hi", "salut"), ("hey", "salut")].into_iter().collect();
        let inv = map.inverted();
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.get("salut"), Some("hey"));
    }

    #[test]
    fn test_set_only_touches_existing() {
        let mut map: PhraseMap = [("a", "1")].into_iter().collect();
        assert!(map.set("a", "9"));
        assert!(!map.set("b", "2"));
        assert_eq!(map.get("a"), Some("9"));
        assert_eq!(map.len(), 1);
    }
}
