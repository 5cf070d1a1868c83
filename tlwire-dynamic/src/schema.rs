use std::collections::HashMap;

use tlwire_parser::errors::ParseError;
use tlwire_parser::tl::{Category, Definition};
use tlwire_parser::{layer_of, parse_tl_file};

use crate::error::SchemaError;

/// Definitions indexed for encoding and decoding.
///
/// Immutable once built; share it freely between threads.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    layer: Option<i32>,
    by_id: HashMap<u32, Definition>,
    /// Constructor full name to ID, for bare references such as `resPQ`.
    by_name: HashMap<String, u32>,
}

impl Schema {
    /// An empty schema.
    pub fn new(layer: Option<i32>) -> Self {
        Self { layer, ..Self::default() }
    }

    /// Parses `.tl` text and registers every definition in it.
    ///
    /// The layer is taken from a leading `// LAYER N` comment, if any.
    /// Built-in definitions the parser does not model, such as
    /// `vector#1cb5c415 {t:Type} # [ t ] = Vector t`, are skipped.
    pub fn parse(contents: &str) -> Result<Self, SchemaError> {
        let mut schema = Self::new(layer_of(contents));
        for def in parse_tl_file(contents) {
            match def {
                Ok(def) => schema.register(def)?,
                Err(ParseError::NotImplemented) => {
                    log::debug!("[schema] skipping definition with unsupported syntax");
                }
                Err(e) => return Err(e.into()),
            }
        }
        log::debug!(
            "[schema] {} definitions, layer {}",
            schema.len(),
            schema.layer.map_or_else(|| "unknown".to_owned(), |l| l.to_string())
        );
        Ok(schema)
    }

    /// Builds a schema from already parsed definitions.
    pub fn from_definitions(
        defs: impl IntoIterator<Item = Definition>,
        layer: Option<i32>,
    ) -> Result<Self, SchemaError> {
        let mut schema = Self::new(layer);
        for def in defs {
            schema.register(def)?;
        }
        Ok(schema)
    }

    /// Adds one definition.
    ///
    /// A constructor ID can only be registered once.
    pub fn register(&mut self, def: Definition) -> Result<(), SchemaError> {
        if let Some(existing) = self.by_id.get(&def.id) {
            return Err(SchemaError::DuplicateId {
                id: def.id,
                existing: existing.full_name(),
                new: def.full_name(),
            });
        }
        log::trace!("[schema] {:#010x} -> {}", def.id, def.full_name());
        if def.category == Category::Types {
            self.by_name.insert(def.full_name(), def.id);
        }
        self.by_id.insert(def.id, def);
        Ok(())
    }

    /// The protocol layer, when known.
    pub fn layer(&self) -> Option<i32> {
        self.layer
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// The definition registered for `id`.
    pub fn definition(&self, id: u32) -> Option<&Definition> {
        self.by_id.get(&id)
    }

    /// The ID of the constructor named `name`, e.g. `auth.sentCodeTypeApp`.
    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }
}
