use crate::DEFAULT_MARKER;

use docmap_core::parse::{Declaration, FieldMetadata, Parser};
use docmap_core::schema::EmbedKind;
use docmap_core::{Error, Registry, Result};

use std::sync::Arc;

/// Reads mapping declarations from the doc comments of registered fields.
///
/// A field is mapped when its doc carries the marker, optionally followed by
/// arguments:
///
/// ```text
/// @Document
/// @Document(key = "mail")
/// @Document(embed = "document", target = "app::Address")
/// @Document(embed = "collection", target = "app::Address")
/// ```
#[derive(Debug, Clone)]
pub struct AnnotationParser {
    registry: Arc<Registry>,
    marker: String,
}

impl AnnotationParser {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    fn field(&self, class: &str, name: &str, doc: &str) -> Result<Option<FieldMetadata>> {
        let Some(start) = doc.find(&self.marker) else {
            return Ok(None);
        };

        let mut field = FieldMetadata::attribute(name);
        let rest = doc[start + self.marker.len()..].trim_start();

        let Some(args) = rest.strip_prefix('(') else {
            return Ok(Some(field));
        };

        let Some(args) = split_args(args) else {
            return Err(Error::invalid_metadata(format!(
                "`{class}.{name}`: unterminated `{}` arguments",
                self.marker
            )));
        };

        let mut embed = None;
        let mut target = None;

        for arg in args {
            let (arg_name, value) = parse_arg(arg).ok_or_else(|| {
                Error::invalid_metadata(format!("`{class}.{name}`: malformed argument `{arg}`"))
            })?;

            match arg_name {
                "key" => field.key = Some(value.to_string()),
                "embed" => {
                    embed = Some(match value {
                        "document" => EmbedKind::Document,
                        "collection" => EmbedKind::Collection,
                        other => {
                            return Err(Error::invalid_metadata(format!(
                                "`{class}.{name}`: unknown embed kind `{other}`"
                            )))
                        }
                    })
                }
                "target" => target = Some(value.to_string()),
                other => {
                    return Err(Error::invalid_metadata(format!(
                        "`{class}.{name}`: unknown argument `{other}`"
                    )))
                }
            }
        }

        field = match (embed, target) {
            (None, None) => field,
            (Some(EmbedKind::Document), Some(target)) => field.embed_document(target),
            (Some(EmbedKind::Collection), Some(target)) => field.embed_collection(target),
            _ => {
                return Err(Error::invalid_metadata(format!(
                    "`{class}.{name}`: `embed` and `target` must be given together"
                )))
            }
        };

        Ok(Some(field))
    }
}

impl Parser for AnnotationParser {
    fn supports(&self, source: &str) -> bool {
        self.registry.contains(source)
    }

    fn parse(&self, source: &str) -> Result<Declaration> {
        let descriptor = self.registry.descriptor(source)?;
        let mut declaration = Declaration::new(descriptor.class());

        for field in descriptor.fields() {
            let Some(doc) = &field.doc else {
                continue;
            };

            if let Some(metadata) = self.field(descriptor.class(), &field.name, doc)? {
                declaration.fields.push(metadata);
            }
        }

        Ok(declaration)
    }
}

/// Splits the arguments after `(` on the commas outside quotes, up to the
/// closing `)`. Returns `None` when the list is never closed.
fn split_args(src: &str) -> Option<Vec<&str>> {
    let mut args = vec![];
    let mut start = 0;
    let mut quoted = false;

    for (i, ch) in src.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            ',' | ')' if !quoted => {
                let arg = src[start..i].trim();
                if !arg.is_empty() {
                    args.push(arg);
                }

                if ch == ')' {
                    return Some(args);
                }

                start = i + 1;
            }
            _ => {}
        }
    }

    None
}

/// Splits `name = "value"`.
fn parse_arg(arg: &str) -> Option<(&str, &str)> {
    let (name, value) = arg.split_once('=')?;
    let value = value.trim().strip_prefix('"')?.strip_suffix('"')?;
    Some((name.trim(), value))
}
