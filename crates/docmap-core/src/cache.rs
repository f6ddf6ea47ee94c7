//! Storage of compiled maps, keyed by class name.

mod file;
pub use file::FileCache;

mod lru;
pub use lru::LruCache;

mod memory;
pub use memory::MemoryCache;

use crate::{schema::Map, Result};

use std::sync::Arc;

/// Stores compiled maps between mapping calls.
///
/// Caches are shared by reference and use interior locking. A map is saved
/// only once fully built, so readers never observe a partial map. Two callers
/// missing the same class at once may both build and save it; the maps are
/// equal, so the later save is harmless.
pub trait Cache: Send + Sync + 'static {
    fn contains(&self, class: &str) -> bool;

    /// Returns the map cached for `class`, failing with a not found error if
    /// there is none.
    fn fetch(&self, class: &str) -> Result<Arc<Map>>;

    fn save(&self, class: &str, map: Arc<Map>) -> Result<()>;

    /// Drops the map cached for `class`, if any.
    fn invalidate(&self, class: &str) -> Result<()>;

    /// Drops every cached map.
    fn clear(&self) -> Result<()>;
}
