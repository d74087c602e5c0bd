//! In-memory store for exercising store consumers without touching disk.

use super::KeyValueStore;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("jewelryCalc.currentUser"), None);

        store.set("jewelryCalc.currentUser", "alice");
        assert_eq!(store.get("jewelryCalc.currentUser").as_deref(), Some("alice"));

        assert_eq!(store.remove("jewelryCalc.currentUser").as_deref(), Some("alice"));
        assert_eq!(store.get("jewelryCalc.currentUser"), None);
    }

    #[test]
    fn borrowed_store_is_a_store() {
        fn read<S: KeyValueStore>(store: S) -> Option<String> {
            store.get("k")
        }
        let store: MemoryStore = [("k", "v")].into_iter().collect();
        assert_eq!(read(&store).as_deref(), Some("v"));
    }
}
