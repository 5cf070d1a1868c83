use std::fmt;
use std::str::FromStr;

use crate::crc::derived_id;
use crate::errors::{ParamParseError, ParseError};
use crate::tl::{Category, Parameter, ParameterType, Type};

/// A constructor or function definition.
///
/// ```text
/// auth.sentCodeTypeEmailCode#f450f59b flags:# apple_signin_allowed:flags.0?true
///     email_pattern:string length:int = auth.SentCodeType;
/// ```
/// has namespace `["auth"]`, name `sentCodeTypeEmailCode`, ID `0xf450f59b`,
/// four parameters and type `auth.SentCodeType`.
#[derive(Clone, Debug, PartialEq)]
pub struct Definition {
    /// Namespace parts; empty for the global namespace.
    pub namespace: Vec<String>,
    /// The unqualified constructor or method name.
    pub name: String,
    /// Constructor ID, explicit `#id` or CRC32-derived.
    pub id: u32,
    /// Parameters in wire order.
    pub params: Vec<Parameter>,
    /// The boxed type this constructor builds, or the function's result type.
    pub ty: Type,
    /// Constructor or function.
    pub category: Category,
}

impl Definition {
    /// `namespace.name`.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            return self.name.clone();
        }
        format!("{}.{}", self.namespace.join("."), self.name)
    }

    /// Whether any parameter is a `#` flags word.
    pub fn has_flags(&self) -> bool {
        self.params.iter().any(|p| p.ty == ParameterType::Flags)
    }

    /// The parameters guarded by the flags word named `flags_name`.
    pub fn flagged_by<'a>(&'a self, flags_name: &'a str) -> impl Iterator<Item = &'a Parameter> + 'a {
        self.params
            .iter()
            .filter(move |p| p.flag().is_some_and(|fl| fl.name == flags_name))
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{:08x}", self.full_name(), self.id)?;

        let mut generics = Vec::new();
        for p in &self.params {
            if let ParameterType::Normal { ty, .. } = &p.ty {
                ty.push_generic_refs(&mut generics);
            }
        }
        generics.sort_unstable();
        generics.dedup();
        for g in generics {
            write!(f, " {{{g}:Type}}")?;
        }

        for p in &self.params {
            write!(f, " {p}")?;
        }
        // `!` marks generic parameters only; the result is written bare.
        if self.ty.generic_ref {
            write!(f, " = {}", self.ty.name)
        } else {
            write!(f, " = {}", self.ty)
        }
    }
}

impl FromStr for Definition {
    type Err = ParseError;

    /// Parses one definition, with or without its trailing `;`.
    ///
    /// The category is always [`Category::Types`]; the schema reader sets
    /// the real one from the surrounding section marker.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim().trim_end_matches(';').trim_end();
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }

        let (lhs, rhs) = raw.split_once('=').ok_or(ParseError::MissingType)?;
        let rhs = rhs.trim();
        if rhs.is_empty() {
            return Err(ParseError::MissingType);
        }
        let mut ty: Type = rhs.parse().map_err(|_| ParseError::MissingType)?;

        let mut tokens = lhs.split_whitespace();
        let head = tokens.next().ok_or(ParseError::MissingName)?;
        let (qualified, explicit_id) = match head.split_once('#') {
            Some((name, id)) => (name, Some(id)),
            None => (head, None),
        };

        let mut namespace: Vec<String> = qualified.split('.').map(str::to_owned).collect();
        let name = namespace.pop().unwrap_or_default();
        if name.is_empty() || namespace.iter().any(String::is_empty) {
            return Err(ParseError::MissingName);
        }

        let id = match explicit_id {
            Some(hex) => u32::from_str_radix(hex, 16).map_err(ParseError::InvalidId)?,
            None => derived_id(raw),
        };

        let mut generics: Vec<String> = Vec::new();
        let mut flag_words: Vec<String> = Vec::new();
        let mut params = Vec::new();

        for token in tokens {
            let param = match token.parse::<Parameter>() {
                Ok(p) => p,
                Err(ParamParseError::TypeDef { name }) => {
                    generics.push(name);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match &param.ty {
                ParameterType::Flags => flag_words.push(param.name.clone()),
                ParameterType::Normal { ty, flag } => {
                    if ty.generic_ref && !generics.contains(&ty.name) {
                        return Err(ParseError::InvalidParam(ParamParseError::MissingDef));
                    }
                    if let Some(fl) = flag {
                        if !flag_words.contains(&fl.name) {
                            return Err(ParseError::InvalidParam(ParamParseError::MissingDef));
                        }
                    }
                }
            }
            params.push(param);
        }

        if generics.contains(&ty.name) {
            ty.generic_ref = true;
        }

        Ok(Self {
            namespace,
            name,
            id,
            params,
            ty,
            category: Category::Types,
        })
    }
}
