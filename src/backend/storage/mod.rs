//! Key-value storage backing the session marker.
//!
//! The navigation guard only ever needs read access, so the capability it is
//! handed is [`KeyValueStore`]. Writes go through the concrete stores.

mod local;
#[cfg(test)]
mod memory;

pub use local::{Committed, LocalStorage, PendingWrite};
#[cfg(test)]
pub use memory::MemoryStore;

/// Read-only view of a string key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
