use super::{DefinitionRecord, EmbedKind, IdentifierRecord, Map, MapRecord};
use crate::format::Formatter;
use crate::model::Registry;
use crate::parse::{Declaration, Embed, FieldMetadata, Parser};
use crate::{Error, Result, ID_ATTRIBUTE};

use indexmap::IndexMap;
use std::sync::Arc;

/// Compiles maps from parser declarations.
///
/// Missing keys and attributes are derived through the formatter, which also
/// names every accessor and mutator. Embedded targets are resolved by handing
/// their class name back to the parser.
#[derive(Clone)]
pub struct Builder {
    parser: Arc<dyn Parser>,
    formatter: Arc<dyn Formatter>,
}

/// Tracks state while compiling one map
struct BuildMap<'a> {
    builder: &'a Builder,

    /// Classes whose records are being compiled, outermost first. Finding a
    /// class here again means the embedding graph has a cycle.
    resolving: Vec<String>,
}

impl Builder {
    pub fn new(parser: Arc<dyn Parser>, formatter: Arc<dyn Formatter>) -> Self {
        Self { parser, formatter }
    }

    pub fn parser(&self) -> &Arc<dyn Parser> {
        &self.parser
    }

    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    /// Builds the map of every source the parser supports, keyed by class.
    /// Unsupported sources are skipped.
    pub fn build<'a>(
        &self,
        sources: impl IntoIterator<Item = &'a str>,
        registry: &Registry,
    ) -> Result<IndexMap<String, Arc<Map>>> {
        let mut processed = IndexMap::new();

        for source in sources {
            if !self.parser.supports(source) {
                log::trace!("skipping unsupported source; source={source}");
                continue;
            }

            let declaration = self.parser.parse(source)?;
            let map = self.bind(declaration, registry)?;
            processed.insert(map.class().to_string(), map);
        }

        Ok(processed)
    }

    /// Builds the map of a single class.
    pub fn build_map(&self, class: &str, registry: &Registry) -> Result<Arc<Map>> {
        if !self.parser.supports(class) {
            return Err(Error::invalid_metadata(format!(
                "no declaration for `{class}`"
            )));
        }

        let declaration = self.parser.parse(class)?;
        self.bind(declaration, registry)
    }

    /// Compiles the names-only record of a declaration.
    pub fn compile(&self, declaration: Declaration) -> Result<MapRecord> {
        BuildMap {
            builder: self,
            resolving: vec![],
        }
        .record(declaration)
    }

    fn bind(&self, declaration: Declaration, registry: &Registry) -> Result<Arc<Map>> {
        let class = declaration.class.clone();
        let record = self.compile(declaration)?;
        let map = Map::bind(&record, registry)
            .map_err(|err| err.context(format!("building map for `{class}`")))?;

        log::debug!(
            "built map; class={} definitions={}",
            map.class(),
            map.len()
        );

        Ok(Arc::new(map))
    }
}

impl BuildMap<'_> {
    fn record(&mut self, declaration: Declaration) -> Result<MapRecord> {
        if self.resolving.contains(&declaration.class) {
            let mut path = self.resolving.clone();
            path.push(declaration.class);
            return Err(Error::invalid_metadata(format!(
                "embedding cycle: {}",
                path.join(" -> ")
            )));
        }

        self.resolving.push(declaration.class.clone());

        let formatter = &self.builder.formatter;
        let identifier = IdentifierRecord {
            accessor: formatter.accessor_name(ID_ATTRIBUTE),
            mutator: formatter.mutator_name(ID_ATTRIBUTE),
        };

        let mut definitions = Vec::with_capacity(declaration.fields.len());

        for field in declaration.fields {
            let definition = self.definition(&declaration.class, field)?;

            // The identifier is always stored under `_id`
            if definition.attribute == ID_ATTRIBUTE {
                log::trace!(
                    "skipping declared identifier field; class={}",
                    declaration.class
                );
                continue;
            }

            definitions.push(definition);
        }

        self.resolving.pop();

        Ok(MapRecord {
            class: declaration.class,
            identifier,
            definitions,
        })
    }

    fn definition(&mut self, class: &str, field: FieldMetadata) -> Result<DefinitionRecord> {
        let formatter = self.builder.formatter.clone();

        let key = field.key.filter(|key| !key.is_empty());
        let attribute = field.attribute.filter(|attribute| !attribute.is_empty());

        let (key, attribute) = match (key, attribute) {
            (Some(key), Some(attribute)) => (key, attribute),
            (Some(key), None) => {
                let attribute = formatter.to_attribute(&key);
                (key, attribute)
            }
            (None, Some(attribute)) => (formatter.to_document_key(&attribute), attribute),
            (None, None) => {
                return Err(Error::invalid_metadata(format!(
                    "`{class}` has a field that provides neither a key nor an attribute"
                )))
            }
        };

        let (embed_kind, embedded) = match field.embed {
            None => (EmbedKind::None, None),
            Some(embed) => self.embedded(class, &attribute, embed)?,
        };

        Ok(DefinitionRecord {
            accessor: Some(formatter.accessor_name(&attribute)),
            mutator: Some(formatter.mutator_name(&attribute)),
            key,
            attribute,
            embed_kind,
            embedded,
        })
    }

    fn embedded(
        &mut self,
        class: &str,
        attribute: &str,
        embed: Embed,
    ) -> Result<(EmbedKind, Option<Box<MapRecord>>)> {
        if embed.kind == EmbedKind::None {
            return Err(Error::invalid_metadata(format!(
                "`{class}.{attribute}` declares an embed without a kind"
            )));
        }

        let parser = &self.builder.parser;
        if !parser.supports(&embed.target) {
            return Err(Error::invalid_metadata(format!(
                "`{class}.{attribute}` embeds `{}`, which has no declaration",
                embed.target
            )));
        }

        let declaration = parser.parse(&embed.target)?;
        let record = self.record(declaration)?;

        Ok((embed.kind, Some(Box::new(record))))
    }
}
