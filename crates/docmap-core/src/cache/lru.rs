use super::Cache;
use crate::{schema::Map, Error, Result};

use indexmap::IndexMap;
use std::sync::{Arc, Mutex};

/// Bounded cache that evicts the least recently used map once full.
///
/// Both `fetch` and `save` count as a use.
#[derive(Debug)]
pub struct LruCache {
    capacity: usize,

    /// Least recently used first
    maps: Mutex<IndexMap<String, Arc<Map>>>,
}

impl LruCache {
    /// Creates a cache holding at most `capacity` maps.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "LRU cache capacity must be greater than 0");

        Self {
            capacity,
            maps: Mutex::new(IndexMap::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.maps.lock().map(|maps| maps.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached classes, least recently used first.
    pub fn classes(&self) -> Vec<String> {
        self.maps
            .lock()
            .map(|maps| maps.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Cache for LruCache {
    fn contains(&self, class: &str) -> bool {
        self.maps
            .lock()
            .map(|maps| maps.contains_key(class))
            .unwrap_or(false)
    }

    fn fetch(&self, class: &str) -> Result<Arc<Map>> {
        let mut maps = self
            .maps
            .lock()
            .map_err(|_| crate::err!("LRU cache lock poisoned"))?;

        let index = maps.get_index_of(class).ok_or_else(|| Error::not_found(class))?;
        let last = maps.len() - 1;
        maps.move_index(index, last);

        Ok(maps[last].clone())
    }

    fn save(&self, class: &str, map: Arc<Map>) -> Result<()> {
        let mut maps = self
            .maps
            .lock()
            .map_err(|_| crate::err!("LRU cache lock poisoned"))?;

        maps.shift_remove(class);

        if maps.len() >= self.capacity {
            if let Some((evicted, _)) = maps.shift_remove_index(0) {
                log::debug!("evicting map; class={evicted}");
            }
        }

        maps.insert(class.to_string(), map);
        Ok(())
    }

    fn invalidate(&self, class: &str) -> Result<()> {
        let mut maps = self
            .maps
            .lock()
            .map_err(|_| crate::err!("LRU cache lock poisoned"))?;

        maps.shift_remove(class);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut maps = self
            .maps
            .lock()
            .map_err(|_| crate::err!("LRU cache lock poisoned"))?;

        maps.clear();
        Ok(())
    }
}
