use std::fmt;

use tlwire_parser::errors::ParseError;

/// Building a [`Schema`](crate::Schema) failed.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaError {
    /// A definition did not parse.
    Parse(ParseError),
    /// Two definitions share a constructor ID.
    DuplicateId { id: u32, existing: String, new: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "invalid definition: {e}"),
            Self::DuplicateId { id, existing, new } => {
                write!(f, "constructor id {id:#010x} of {new} already taken by {existing}")
            }
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::DuplicateId { .. } => None,
        }
    }
}

impl From<ParseError> for SchemaError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

/// Decoding against a schema failed.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodeError {
    /// The bytes themselves are bad.
    Wire(tlwire::Error),
    /// A known constructor where a different boxed type was declared.
    WrongType { expected: String, id: u32, found: String },
    /// A field type names neither a primitive nor a known bare constructor.
    UnresolvedType { name: String },
    /// Objects nested more than `limit` levels deep.
    TooDeep { limit: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(e) => e.fmt(f),
            Self::WrongType { expected, id, found } => {
                write!(f, "expected {expected}, got {found} ({id:#010x})")
            }
            Self::UnresolvedType { name } => write!(f, "unresolved type {name}"),
            Self::TooDeep { limit } => write!(f, "objects nested deeper than {limit} levels"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tlwire::Error> for DecodeError {
    fn from(e: tlwire::Error) -> Self {
        Self::Wire(e)
    }
}

/// An object does not match its definition.
///
/// Nothing is written to the output when encoding fails.
#[derive(Clone, Debug, PartialEq)]
pub enum EncodeError {
    /// No definition has this constructor ID.
    UnknownConstructor { id: u32 },
    /// A required field is absent.
    MissingField { constructor: String, field: String },
    /// A field holds a value of the wrong kind for its declared type.
    KindMismatch { constructor: String, field: String, expected: String, found: &'static str },
    /// A field the definition does not declare, or one listed twice.
    ExtraField { constructor: String, field: String },
    /// A field listed before one that precedes it in the definition.
    OutOfOrder { constructor: String, field: String },
    /// A `bytes` or `string` value longer than the 3-byte length can hold.
    TooLong { constructor: String, field: String, len: usize },
    /// A nested object of a constructor not belonging to the declared type.
    WrongType { expected: String, id: u32, found: String },
    /// A field type names neither a primitive nor a known bare constructor.
    UnresolvedType { name: String },
    /// Objects nested more than `limit` levels deep.
    TooDeep { limit: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownConstructor { id } => write!(f, "unknown constructor id: {id:#010x}"),
            Self::MissingField { constructor, field } => {
                write!(f, "{constructor}: missing required field {field}")
            }
            Self::KindMismatch { constructor, field, expected, found } => {
                write!(f, "{constructor}.{field}: expected {expected}, got {found}")
            }
            Self::ExtraField { constructor, field } => {
                write!(f, "{constructor}: unexpected field {field}")
            }
            Self::OutOfOrder { constructor, field } => {
                write!(f, "{constructor}: field {field} out of declared order")
            }
            Self::TooLong { constructor, field, len } => {
                write!(f, "{constructor}.{field}: {len} bytes exceeds the TL length limit")
            }
            Self::WrongType { expected, id, found } => {
                write!(f, "expected {expected}, got {found} ({id:#010x})")
            }
            Self::UnresolvedType { name } => write!(f, "unresolved type {name}"),
            Self::TooDeep { limit } => write!(f, "objects nested deeper than {limit} levels"),
        }
    }
}

impl std::error::Error for EncodeError {}
