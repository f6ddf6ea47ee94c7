use super::Cache;
use crate::{schema::Map, Error, Result};

use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// Unbounded in-process cache. Entries live until invalidated.
#[derive(Debug, Default)]
pub struct MemoryCache {
    maps: RwLock<IndexMap<String, Arc<Map>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.maps.read().map(|maps| maps.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Cache for MemoryCache {
    fn contains(&self, class: &str) -> bool {
        self.maps
            .read()
            .map(|maps| maps.contains_key(class))
            .unwrap_or(false)
    }

    fn fetch(&self, class: &str) -> Result<Arc<Map>> {
        let maps = self
            .maps
            .read()
            .map_err(|_| crate::err!("memory cache lock poisoned"))?;

        maps.get(class)
            .cloned()
            .ok_or_else(|| Error::not_found(class))
    }

    fn save(&self, class: &str, map: Arc<Map>) -> Result<()> {
        let mut maps = self
            .maps
            .write()
            .map_err(|_| crate::err!("memory cache lock poisoned"))?;

        maps.insert(class.to_string(), map);
        Ok(())
    }

    fn invalidate(&self, class: &str) -> Result<()> {
        let mut maps = self
            .maps
            .write()
            .map_err(|_| crate::err!("memory cache lock poisoned"))?;

        maps.shift_remove(class);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut maps = self
            .maps
            .write()
            .map_err(|_| crate::err!("memory cache lock poisoned"))?;

        maps.clear();
        Ok(())
    }
}
