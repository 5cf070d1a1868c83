//! Constructor-ID dispatch for polymorphic decoding.
//!
//! A [`Registry`] is built once for a protocol layer, then shared read-only.
//! Decoding reads the leading constructor ID and hands the rest of the
//! stream to the reader registered for it.
//!
//! ```rust
//! use tlwire::{Deserializable, Registry, Serializable};
//!
//! #[derive(Debug, PartialEq)]
//! enum Msg { Ping(i64), Pong(i64) }
//!
//! let mut reg = Registry::new(1);
//! reg.insert(0x7abe77ec, "ping", |buf| Ok(Msg::Ping(i64::deserialize(buf)?)));
//! reg.insert(0x347773c5, "pong", |buf| Ok(Msg::Pong(i64::deserialize(buf)?)));
//!
//! let mut wire = 0x347773c5u32.to_bytes();
//! wire.extend(42i64.to_bytes());
//! assert_eq!(reg.from_bytes(&wire).unwrap(), Msg::Pong(42));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::Identifiable;
use crate::deserialize::{Cursor, Deserializable, Error, Result};

type ReadFn<T> = Box<dyn Fn(&mut Cursor<'_>) -> Result<T> + Send + Sync>;

struct Entry<T> {
    name: &'static str,
    read: ReadFn<T>,
}

/// Maps constructor IDs to body readers producing a common sum type `T`.
pub struct Registry<T> {
    layer: i32,
    entries: HashMap<u32, Entry<T>>,
}

impl<T> Registry<T> {
    /// An empty table for protocol layer `layer`.
    pub fn new(layer: i32) -> Self {
        Self { layer, entries: HashMap::new() }
    }

    /// The protocol layer the table was built for.
    pub fn layer(&self) -> i32 { self.layer }

    /// Number of registered constructors.
    pub fn len(&self) -> usize { self.entries.len() }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Whether `id` has a reader.
    pub fn contains(&self, id: u32) -> bool { self.entries.contains_key(&id) }

    /// Schema name registered for `id`.
    pub fn name_for_id(&self, id: u32) -> Option<&'static str> {
        self.entries.get(&id).map(|e| e.name)
    }

    /// Registers `read` as the body reader for constructor `id`.
    ///
    /// `read` is called with the cursor positioned right after the ID.
    /// Returns the name of the entry this one replaced, if any.
    pub fn insert<F>(&mut self, id: u32, name: &'static str, read: F) -> Option<&'static str>
    where
        F: Fn(&mut Cursor<'_>) -> Result<T> + Send + Sync + 'static,
    {
        let previous = self
            .entries
            .insert(id, Entry { name, read: Box::new(read) })
            .map(|e| e.name);
        match previous {
            Some(old) => log::warn!("[registry] {id:#010x} {old} replaced by {name}"),
            None => log::trace!("[registry] {id:#010x} -> {name}"),
        }
        previous
    }

    /// Registers a concrete constructor type whose body converts into `T`.
    pub fn register<X>(&mut self) -> Option<&'static str>
    where
        X: Identifiable + Deserializable + Into<T> + 'static,
        T: 'static,
    {
        self.insert(X::CONSTRUCTOR_ID, X::NAME, |buf| X::deserialize(buf).map(Into::into))
    }

    /// Decodes one boxed object: its constructor ID, then its body.
    ///
    /// An unregistered ID fails with [`Error::UnknownConstructor`] after
    /// consuming exactly the four ID bytes.
    pub fn read(&self, buf: &mut Cursor<'_>) -> Result<T> {
        let id = u32::deserialize(buf)?;
        let Some(entry) = self.entries.get(&id) else {
            log::warn!("[registry] layer {}: unknown constructor {id:#010x} at offset {}", self.layer, buf.pos() - 4);
            return Err(Error::UnknownConstructor { id });
        };
        log::trace!("[registry] decoding {} ({id:#010x})", entry.name);
        (entry.read)(buf)
    }

    /// Decodes one boxed object from the start of `bytes`.
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<T> {
        self.read(&mut Cursor::from_slice(bytes))
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("layer", &self.layer)
            .field("constructors", &self.entries.len())
            .finish()
    }
}
