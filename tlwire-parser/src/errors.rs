use std::fmt;
use std::num::ParseIntError;

/// Errors produced while parsing a single `name:type` token.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamParseError {
    /// A name or type was empty.
    Empty,
    /// The token was a `{X:Type}` generic declaration rather than a parameter.
    TypeDef {
        /// The declared generic name, `X` in `{X:Type}`.
        name: String,
    },
    /// A `{…}` block that does not declare a generic, or a reference to an
    /// undeclared generic or flags field.
    MissingDef,
    /// A `name.N?Type` flag expression was malformed.
    InvalidFlag,
    /// A `<…>` generic argument was not closed.
    InvalidGeneric,
    /// A token with no `:type` part.
    NotImplemented,
}

impl fmt::Display for ParamParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty parameter name or type"),
            Self::TypeDef { name } => write!(f, "generic declaration {{{name}:Type}}"),
            Self::MissingDef => write!(f, "reference to an undeclared generic or flags field"),
            Self::InvalidFlag => write!(f, "malformed flag expression"),
            Self::InvalidGeneric => write!(f, "unclosed generic argument"),
            Self::NotImplemented => write!(f, "parameter without a type"),
        }
    }
}

impl std::error::Error for ParamParseError {}

/// Errors produced while parsing a complete definition.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The definition was blank.
    Empty,
    /// No `= Type` part.
    MissingType,
    /// The name was missing or had an empty namespace component.
    MissingName,
    /// The `#id` was not valid hexadecimal.
    InvalidId(ParseIntError),
    /// One of the parameters was invalid.
    InvalidParam(ParamParseError),
    /// Syntax this parser does not handle.
    NotImplemented,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty definition"),
            Self::MissingType => write!(f, "missing `= Type`"),
            Self::MissingName => write!(f, "missing or malformed name"),
            Self::InvalidId(e) => write!(f, "invalid constructor id: {e}"),
            Self::InvalidParam(e) => write!(f, "invalid parameter: {e}"),
            Self::NotImplemented => write!(f, "unsupported TL syntax"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidId(e) => Some(e),
            Self::InvalidParam(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParamParseError> for ParseError {
    fn from(e: ParamParseError) -> Self {
        match e {
            ParamParseError::NotImplemented => Self::NotImplemented,
            other => Self::InvalidParam(other),
        }
    }
}
