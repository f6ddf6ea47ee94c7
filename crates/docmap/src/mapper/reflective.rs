use super::{collapse_if_all_null, document_id, Mapper};
use crate::DEFAULT_MARKER;

use docmap_core::format::{CamelCaseFormatter, Formatter};
use docmap_core::model::{Descriptor, Getter, Setter};
use docmap_core::{AnyModel, Attr, Document, Error, Registry, Result, ID_ATTRIBUTE, ID_KEY};

use std::sync::Arc;

/// Maps models straight from their descriptors.
///
/// A field is mapped when its doc comment carries the marker and the type
/// exposes a public accessor for it (to write documents) or a public mutator
/// (to read them). Keys and method names come from the formatter, worked out
/// again on every call.
#[derive(Clone)]
pub struct ReflectiveMapper {
    registry: Arc<Registry>,
    formatter: Arc<dyn Formatter>,
    marker: String,
}

impl ReflectiveMapper {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            formatter: Arc::new(CamelCaseFormatter),
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    fn identifier_accessor<'a>(&self, descriptor: &'a Descriptor) -> Result<&'a Getter> {
        self.require_id_field(descriptor)?;

        let name = self.formatter.accessor_name(ID_ATTRIBUTE);
        descriptor.accessor(&name).ok_or_else(|| {
            Error::missing_identifier(descriptor.class(), format!("no public accessor `{name}`"))
        })
    }

    fn identifier_mutator<'a>(&self, descriptor: &'a Descriptor) -> Result<&'a Setter> {
        self.require_id_field(descriptor)?;

        let name = self.formatter.mutator_name(ID_ATTRIBUTE);
        descriptor.mutator(&name).ok_or_else(|| {
            Error::missing_identifier(descriptor.class(), format!("no public mutator `{name}`"))
        })
    }

    fn require_id_field(&self, descriptor: &Descriptor) -> Result<()> {
        if descriptor.has_field(ID_ATTRIBUTE) {
            Ok(())
        } else {
            Err(Error::missing_identifier(
                descriptor.class(),
                format!("no `{ID_ATTRIBUTE}` field"),
            ))
        }
    }
}

impl Mapper for ReflectiveMapper {
    fn to_document(&self, model: &dyn AnyModel) -> Result<Document> {
        let descriptor = self.registry.descriptor(model.class())?;
        let get_id = self.identifier_accessor(descriptor)?;

        let mut document = Document::with_capacity(descriptor.fields().len() + 1);
        document.insert(ID_KEY, self.normalize(&get_id(model)?)?);

        for field in descriptor.fields() {
            if field.name == ID_ATTRIBUTE || !field.is_marked(&self.marker) {
                continue;
            }

            let Some(get) = descriptor.accessor(&self.formatter.accessor_name(&field.name)) else {
                continue;
            };

            let value = get(model)?;
            let key = self.formatter.to_document_key(&field.name);
            document.insert(key, self.normalize(&value)?);
        }

        collapse_if_all_null(&mut document);
        Ok(document)
    }

    fn hydrate_into(&self, model: &mut dyn AnyModel, document: &Document) -> Result<()> {
        let class = model.class();
        let id = document_id(class, document)?;

        let descriptor = self.registry.descriptor(class)?;
        let set_id = self.identifier_mutator(descriptor)?;
        set_id(&mut *model, Attr::from(id.clone()))?;

        for (key, value) in document.iter() {
            if key == ID_KEY {
                continue;
            }

            if value.is_null() {
                log::trace!("skipping null value; class={class} key={key}");
                continue;
            }

            let attribute = self.formatter.to_attribute(key);
            if attribute == ID_ATTRIBUTE {
                continue;
            }

            let marked = descriptor
                .field(&attribute)
                .is_some_and(|field| field.is_marked(&self.marker));

            let mutator = descriptor.mutator(&self.formatter.mutator_name(&attribute));

            match mutator {
                Some(set) if marked => set(&mut *model, Attr::from(value.clone()))?,
                _ => log::trace!("skipping unmapped key; class={class} key={key}"),
            }
        }

        Ok(())
    }

    fn hydrate_class(&self, class: &str, document: &Document) -> Result<Box<dyn AnyModel>> {
        document_id(class, document)?;

        let mut model = self.registry.descriptor(class)?.construct()?;
        self.hydrate_into(&mut *model, document)?;
        Ok(model)
    }
}
