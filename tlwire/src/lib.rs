//! TL binary serialization.
//!
//! Everything on the wire is little-endian. A boxed object is its 32-bit
//! constructor ID followed by its fields in declared order; a flags word
//! precedes the fields of types with optional parameters.
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`serialize`]     | [`Serializable`] and the primitive encodings              |
//! | [`deserialize`]   | [`Deserializable`], [`Cursor`] and the error taxonomy     |
//! | [`vector`]        | `Vector<T>` / `vector<T>` with explicit element codecs    |
//! | [`registry`]      | [`Registry`], the constructor-ID dispatch table           |
//!
//! # Example
//!
//! ```rust
//! use tlwire::{Deserializable, Serializable};
//!
//! let bytes = vec![7i32, 9].to_bytes();
//! assert_eq!(&bytes[..4], &0x1cb5c415u32.to_le_bytes());
//! assert_eq!(Vec::<i32>::from_bytes(&bytes).unwrap(), vec![7, 9]);
//! ```

#![deny(unsafe_code)]

pub mod deserialize;
pub mod registry;
pub mod serialize;
pub mod vector;

pub use deserialize::{Cursor, Deserializable, Error};
pub use registry::Registry;
pub use serialize::Serializable;

/// Bare vector, TL `vector<T>`: a count and the items, no constructor ID.
#[derive(Clone, Debug, PartialEq)]
pub struct RawVec<T>(pub Vec<T>);


// ─── Core traits ──────────────────────────────────────────────────────────────

/// A concrete constructor with a fixed 32-bit ID.
pub trait Identifiable {
    /// The constructor ID from the schema.
    const CONSTRUCTOR_ID: u32;
    /// The qualified schema name, e.g. `auth.sentCodeTypeApp`.
    const NAME: &'static str;
}

/// Boxed encoding of a concrete constructor: ID first, then the body.
///
/// `Serializable`/`Deserializable` on a constructor struct cover the body
/// only, which is how it appears inside a boxed enum or as a bare field.
pub trait Boxed: Identifiable + Serializable + Deserializable {
    /// Writes the constructor ID followed by the body.
    fn serialize_boxed(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.serialize(buf);
    }

    /// Allocates and returns the boxed encoding.
    fn to_boxed_bytes(&self) -> Vec<u8> {
        let mut v = Vec::new();
        self.serialize_boxed(&mut v);
        v
    }

    /// Reads a constructor ID, which must be this type's, then the body.
    fn deserialize_boxed(buf: deserialize::Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        if id != Self::CONSTRUCTOR_ID {
            return Err(Error::UnknownConstructor { id });
        }
        Self::deserialize(buf)
    }
}

impl<T: Identifiable + Serializable + Deserializable> Boxed for T {}

/// Boxed `Bool` constructors.
pub mod bool_ids {
    /// `boolTrue#997275b5 = Bool`
    pub const TRUE: u32 = 0x997275b5;
    /// `boolFalse#bc799737 = Bool`
    pub const FALSE: u32 = 0xbc799737;
}
