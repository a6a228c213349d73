// src/dex/cache.rs
use std::collections::HashMap;
use std::collections::hash_map::Entry as MapEntry;
use std::sync::Arc;

use super::entry::Entry;

/// id → Entry. Grows for the lifetime of the process, never evicts; the id
/// universe is fixed and small, so a bound would buy nothing.
#[derive(Debug, Default)]
pub struct EntryCache {
    map: HashMap<u32, Arc<Entry>>,
}

impl EntryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u32) -> Option<Arc<Entry>> {
        self.map.get(&id).cloned()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.map.contains_key(&id)
    }

    /// Insert, first write wins. Entries are immutable content keyed by id
    /// from an authoritative source, so a duplicate insert is a no-op.
    pub fn put(&mut self, entry: Entry) -> Arc<Entry> {
        match self.map.entry(entry.id) {
            MapEntry::Occupied(slot) => slot.get().clone(),
            MapEntry::Vacant(slot) => slot.insert(Arc::new(entry)).clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, name: &str) -> Entry {
        Entry { id, name: name.into(), types: Vec::new(), sprite: None }
    }

    #[test]
    fn put_is_first_write_wins() {
        let mut cache = EntryCache::new();
        let first = cache.put(entry(25, "pikachu"));
        let second = cache.put(entry(25, "pikachu-duplicate"));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(25).unwrap().name, "pikachu");
    }

    #[test]
    fn get_misses_return_none() {
        let cache = EntryCache::new();
        assert!(cache.get(1).is_none());
        assert!(!cache.contains(1));
    }
}
