use super::{EmbedKind, MapRecord};
use crate::{Error, Result, ID_ATTRIBUTE, ID_KEY};

use std::collections::HashSet;

struct Verify<'a> {
    record: &'a MapRecord,
}

impl MapRecord {
    /// Checks the record is well formed before it is bound. Runs recursively
    /// over embedded records.
    pub(super) fn verify(&self) -> Result<()> {
        Verify { record: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        if self.record.class.is_empty() {
            return Err(Error::invalid_metadata("map has an empty class name"));
        }

        self.verify_names_are_present()?;
        self.verify_identifier_names_are_reserved()?;
        self.verify_names_are_unique()?;
        self.verify_embeds_are_consistent()?;

        for definition in &self.record.definitions {
            if let Some(embedded) = &definition.embedded {
                embedded.verify()?;
            }
        }

        Ok(())
    }

    fn verify_names_are_present(&self) -> Result<()> {
        for definition in &self.record.definitions {
            if definition.key.is_empty() || definition.attribute.is_empty() {
                return Err(Error::invalid_metadata(format!(
                    "`{}` has a definition with an empty key or attribute",
                    self.record.class
                )));
            }
        }

        Ok(())
    }

    fn verify_identifier_names_are_reserved(&self) -> Result<()> {
        for definition in &self.record.definitions {
            if definition.key == ID_KEY || definition.attribute == ID_ATTRIBUTE {
                return Err(Error::invalid_metadata(format!(
                    "`{}` maps `{}` to key `{}`, but `{}` and `{}` are reserved for the identifier",
                    self.record.class, definition.attribute, definition.key, ID_ATTRIBUTE, ID_KEY
                )));
            }
        }

        Ok(())
    }

    fn verify_names_are_unique(&self) -> Result<()> {
        let mut keys = HashSet::new();
        let mut attributes = HashSet::new();

        for definition in &self.record.definitions {
            if !keys.insert(definition.key.as_str()) {
                return Err(Error::invalid_metadata(format!(
                    "`{}` maps key `{}` twice",
                    self.record.class, definition.key
                )));
            }

            if !attributes.insert(definition.attribute.as_str()) {
                return Err(Error::invalid_metadata(format!(
                    "`{}` maps attribute `{}` twice",
                    self.record.class, definition.attribute
                )));
            }
        }

        Ok(())
    }

    fn verify_embeds_are_consistent(&self) -> Result<()> {
        for definition in &self.record.definitions {
            let has_map = definition.embedded.is_some();
            let embeds = definition.embed_kind != EmbedKind::None;

            if has_map != embeds {
                return Err(Error::invalid_metadata(format!(
                    "`{}.{}` has embed kind {:?} but {} embedded map",
                    self.record.class,
                    definition.attribute,
                    definition.embed_kind,
                    if has_map { "an" } else { "no" }
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::{DefinitionRecord, IdentifierRecord};
    use super::*;

    fn record(definitions: Vec<DefinitionRecord>) -> MapRecord {
        MapRecord {
            class: "app::User".to_string(),
            identifier: IdentifierRecord {
                accessor: "getId".to_string(),
                mutator: "setId".to_string(),
            },
            definitions,
        }
    }

    fn definition(key: &str, attribute: &str) -> DefinitionRecord {
        DefinitionRecord {
            key: key.to_string(),
            attribute: attribute.to_string(),
            accessor: None,
            mutator: None,
            embed_kind: EmbedKind::None,
            embedded: None,
        }
    }

    #[test]
    fn accepts_distinct_names() {
        let record = record(vec![
            definition("first_name", "firstName"),
            definition("last_name", "lastName"),
        ]);
        assert!(record.verify().is_ok());
    }

    #[test]
    fn rejects_duplicate_key() {
        let record = record(vec![
            definition("name", "firstName"),
            definition("name", "lastName"),
        ]);
        let err = record.verify().unwrap_err();
        assert!(err.is_invalid_metadata());
        assert_eq!(
            err.to_string(),
            "invalid metadata: `app::User` maps key `name` twice"
        );
    }

    #[test]
    fn rejects_duplicate_attribute() {
        let record = record(vec![
            definition("first_name", "name"),
            definition("last_name", "name"),
        ]);
        assert!(record.verify().unwrap_err().is_invalid_metadata());
    }

    #[test]
    fn rejects_identifier_names() {
        let err = record(vec![definition("_id", "code")]).verify().unwrap_err();
        assert!(err.is_invalid_metadata());
        assert_eq!(
            err.to_string(),
            "invalid metadata: `app::User` maps `code` to key `_id`, but `id` and `_id` are \
             reserved for the identifier"
        );

        let err = record(vec![definition("ident", "id")]).verify().unwrap_err();
        assert!(err.is_invalid_metadata());
    }

    #[test]
    fn rejects_empty_names() {
        let record = record(vec![definition("", "name")]);
        assert!(record.verify().unwrap_err().is_invalid_metadata());
    }

    #[test]
    fn rejects_embed_kind_without_map() {
        let mut address = definition("address", "address");
        address.embed_kind = EmbedKind::Document;

        let record = record(vec![address]);
        assert!(record.verify().unwrap_err().is_invalid_metadata());
    }
}
