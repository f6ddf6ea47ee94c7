use super::{collapse_if_all_null, document_id, Mapper};

use docmap_core::schema::{self, Definition, EmbedKind};
use docmap_core::{AnyModel, Attr, Cache, Document, Error, Map, Registry, Result, Value, ID_KEY};

use std::sync::Arc;

/// Maps models through compiled, cached maps.
///
/// The map of a type is fetched from the cache, or built and saved on the
/// first use. Field selection, naming, and embedding all come from the map.
#[derive(Clone)]
pub struct StrictMapper {
    registry: Arc<Registry>,
    builder: schema::Builder,
    cache: Arc<dyn Cache>,
}

impl StrictMapper {
    pub fn new(registry: Arc<Registry>, builder: schema::Builder, cache: Arc<dyn Cache>) -> Self {
        Self {
            registry,
            builder,
            cache,
        }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn cache(&self) -> &Arc<dyn Cache> {
        &self.cache
    }

    /// Returns the map of `class`, building and caching it on a miss.
    ///
    /// Classes missing from the registry are unsupported types, whatever
    /// the cache or the parser holds for them.
    pub fn map(&self, class: &str) -> Result<Arc<Map>> {
        self.registry.descriptor(class)?;

        if self.cache.contains(class) {
            match self.cache.fetch(class) {
                Ok(map) => {
                    log::debug!("map cache hit; class={class}");
                    return Ok(map);
                }
                // Invalidated between the check and the fetch
                Err(err) if err.is_not_found() => {}
                Err(err) => return Err(err),
            }
        }

        log::debug!("map cache miss; class={class}");

        let map = self.builder.build_map(class, &self.registry)?;
        self.cache.save(class, map.clone())?;
        Ok(map)
    }

    /// Builds and caches the map of every registered type the parser
    /// supports. Returns how many maps were cached.
    pub fn warm(&self) -> Result<usize> {
        let maps = self.builder.build(self.registry.classes(), &self.registry)?;

        for (class, map) in &maps {
            self.cache.save(class, map.clone())?;
        }

        log::debug!("warmed map cache; maps={}", maps.len());
        Ok(maps.len())
    }

    fn write_document(&self, map: &Map, model: &dyn AnyModel, standalone: bool) -> Result<Document> {
        let mut document = Document::with_capacity(map.len() + 1);
        let identifier = map.identifier();

        if standalone || identifier.is_readable() {
            document.insert(ID_KEY, self.normalize(&identifier.read(model)?)?);
        }

        for definition in map.definitions() {
            let value = definition.read(model)?;
            let value = match definition.embed_kind {
                EmbedKind::None => self.normalize(&value)?,
                EmbedKind::Document => self.write_embedded_document(definition, value)?,
                EmbedKind::Collection => self.write_embedded_collection(definition, value)?,
            };

            document.insert(definition.key.clone(), value);
        }

        collapse_if_all_null(&mut document);
        Ok(document)
    }

    fn write_embedded_document(&self, definition: &Definition, value: Attr) -> Result<Value> {
        match value {
            Attr::Null => Ok(Value::Null),
            Attr::Object(model) => {
                let map = embedded_map(definition)?;
                Ok(Value::Document(self.write_document(map, &*model, false)?))
            }
            other => Err(Error::embedding_shape(
                &definition.key,
                "a model",
                other.kind_name(),
            )),
        }
    }

    fn write_embedded_collection(&self, definition: &Definition, value: Attr) -> Result<Value> {
        let items = match value {
            Attr::Null => return Ok(Value::Null),
            Attr::List(items) => items,
            other => {
                return Err(Error::embedding_shape(
                    &definition.key,
                    "a list of models",
                    other.kind_name(),
                ))
            }
        };

        let map = embedded_map(definition)?;

        items
            .into_iter()
            .map(|item| match item {
                Attr::Null => Ok(Value::Null),
                Attr::Object(model) => Ok(Value::Document(self.write_document(map, &*model, false)?)),
                other => Err(Error::embedding_shape(
                    &definition.key,
                    "a list of models",
                    other.kind_name(),
                )),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn read_document(
        &self,
        map: &Map,
        model: &mut dyn AnyModel,
        document: &Document,
        standalone: bool,
    ) -> Result<()> {
        let identifier = map.identifier();

        if standalone {
            let id = document_id(map.class(), document)?;
            identifier.require()?;
            identifier.write(model, Attr::from(id.clone()))?;
        } else if let Some(id) = document.get(ID_KEY).filter(|id| !id.is_null()) {
            if identifier.is_writable() {
                identifier.write(model, Attr::from(id.clone()))?;
            }
        }

        for (key, value) in document.iter() {
            if key == ID_KEY {
                continue;
            }

            if value.is_null() {
                log::trace!("skipping null value; class={} key={key}", map.class());
                continue;
            }

            let Some(definition) = map.definition_for_key(key) else {
                log::trace!("skipping unmapped key; class={} key={key}", map.class());
                continue;
            };

            let value = match definition.embed_kind {
                EmbedKind::None => Attr::from(value.clone()),
                EmbedKind::Document => self.read_embedded_document(definition, value)?,
                EmbedKind::Collection => self.read_embedded_collection(definition, value)?,
            };

            definition.write(model, value)?;
        }

        Ok(())
    }

    fn read_embedded_document(&self, definition: &Definition, value: &Value) -> Result<Attr> {
        match value {
            Value::Document(document) => {
                let map = embedded_map(definition)?;
                Ok(Attr::Object(self.read_embedded(map, document)?))
            }
            other => Err(Error::embedding_shape(
                &definition.key,
                "a document",
                other.shape(),
            )),
        }
    }

    fn read_embedded_collection(&self, definition: &Definition, value: &Value) -> Result<Attr> {
        let Value::Array(items) = value else {
            return Err(Error::embedding_shape(
                &definition.key,
                "an array of documents",
                value.shape(),
            ));
        };

        let map = embedded_map(definition)?;

        items
            .iter()
            .map(|item| match item {
                Value::Document(document) => Ok(Attr::Object(self.read_embedded(map, document)?)),
                other => Err(Error::embedding_shape(
                    &definition.key,
                    "an array of documents",
                    other.shape(),
                )),
            })
            .collect::<Result<Vec<_>>>()
            .map(Attr::List)
    }

    fn read_embedded(&self, map: &Map, document: &Document) -> Result<Box<dyn AnyModel>> {
        let mut model = map.construct()?;
        self.read_document(map, &mut *model, document, false)?;
        Ok(model)
    }
}

impl Mapper for StrictMapper {
    fn to_document(&self, model: &dyn AnyModel) -> Result<Document> {
        let map = self.map(model.class())?;
        self.write_document(&map, model, true)
    }

    fn hydrate_into(&self, model: &mut dyn AnyModel, document: &Document) -> Result<()> {
        let map = self.map(model.class())?;
        self.read_document(&map, model, document, true)
    }

    fn hydrate_class(&self, class: &str, document: &Document) -> Result<Box<dyn AnyModel>> {
        document_id(class, document)?;

        let map = self.map(class)?;
        let mut model = map.construct()?;
        self.read_document(&map, &mut *model, document, true)?;
        Ok(model)
    }
}

fn embedded_map(definition: &Definition) -> Result<&Map> {
    definition.embedded_map.as_deref().ok_or_else(|| {
        Error::invalid_metadata(format!(
            "`{}` is embedded but has no embedded map",
            definition.key
        ))
    })
}
