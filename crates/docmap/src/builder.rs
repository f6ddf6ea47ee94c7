use crate::{AnnotationParser, ReflectiveMapper, StrictMapper, DEFAULT_MARKER};

use docmap_core::cache::{Cache, FileCache, LruCache, MemoryCache};
use docmap_core::format::{CamelCaseFormatter, Formatter};
use docmap_core::{schema, Error, Model, Parser, Registry, Result};

use std::path::PathBuf;
use std::sync::Arc;

/// Configures and builds mappers.
///
/// ```
/// # use docmap::Builder;
/// let mut builder = Builder::new();
/// builder.marker("@Mongo").lru_capacity(64);
/// let mapper = builder.build_strict().unwrap();
/// assert_eq!(mapper.warm().unwrap(), 0);
/// ```
#[derive(Default)]
pub struct Builder {
    /// Registered model types
    registry: Registry,

    /// Doc marker flagging mapped fields. Defaults to `@Document`.
    marker: Option<String>,

    /// Naming convention. Defaults to camel case.
    formatter: Option<Arc<dyn Formatter>>,

    /// Declaration source for the strict mapper. Defaults to an
    /// [`AnnotationParser`] over the registry.
    parser: Option<Arc<dyn Parser>>,

    /// Map cache for the strict mapper. Takes precedence over `cache_dir` and
    /// `lru_capacity`.
    cache: Option<Arc<dyn Cache>>,

    /// Bound the in-memory cache to this many maps
    lru_capacity: Option<usize>,

    /// Persist maps as JSON files in this directory
    cache_dir: Option<PathBuf>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.registry.register::<T>();
        self
    }

    pub fn marker(&mut self, marker: impl Into<String>) -> &mut Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn formatter(&mut self, formatter: impl Formatter) -> &mut Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn parser(&mut self, parser: impl Parser) -> &mut Self {
        self.parser = Some(Arc::new(parser));
        self
    }

    pub fn cache(&mut self, cache: Arc<dyn Cache>) -> &mut Self {
        self.cache = Some(cache);
        self
    }

    pub fn lru_capacity(&mut self, capacity: usize) -> &mut Self {
        self.lru_capacity = Some(capacity);
        self
    }

    pub fn cache_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.cache_dir = Some(dir.into());
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn build_reflective(&self) -> ReflectiveMapper {
        ReflectiveMapper::new(Arc::new(self.registry.clone()))
            .with_formatter(self.formatter_or_default())
            .with_marker(self.marker_or_default())
    }

    pub fn build_strict(&self) -> Result<StrictMapper> {
        let registry = Arc::new(self.registry.clone());

        let parser: Arc<dyn Parser> = match &self.parser {
            Some(parser) => parser.clone(),
            None => Arc::new(
                AnnotationParser::new(registry.clone()).with_marker(self.marker_or_default()),
            ),
        };

        let cache: Arc<dyn Cache> = match (&self.cache, &self.cache_dir, self.lru_capacity) {
            (Some(cache), _, _) => cache.clone(),
            (None, Some(dir), _) => Arc::new(FileCache::new(dir, registry.clone())?),
            (None, None, Some(0)) => {
                return Err(Error::invalid_metadata(
                    "LRU cache capacity must be greater than 0",
                ))
            }
            (None, None, Some(capacity)) => Arc::new(LruCache::new(capacity)),
            (None, None, None) => Arc::new(MemoryCache::new()),
        };

        let builder = schema::Builder::new(parser, self.formatter_or_default());
        Ok(StrictMapper::new(registry, builder, cache))
    }

    fn formatter_or_default(&self) -> Arc<dyn Formatter> {
        self.formatter
            .clone()
            .unwrap_or_else(|| Arc::new(CamelCaseFormatter))
    }

    fn marker_or_default(&self) -> String {
        self.marker
            .clone()
            .unwrap_or_else(|| DEFAULT_MARKER.to_string())
    }
}
