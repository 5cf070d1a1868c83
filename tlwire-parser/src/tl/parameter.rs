use std::fmt;
use std::str::FromStr;

use crate::errors::ParamParseError;
use crate::tl::{Flag, Type};

/// One `name:type` parameter of a definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// What the parameter holds.
    pub ty: ParameterType,
}

/// The kind of a parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParameterType {
    /// `name:#`, a flags word. Never stored; computed from the optional
    /// parameters that reference it.
    Flags,
    /// A typed value, present only when `flag` is set if it has one.
    Normal {
        /// The value type.
        ty: Type,
        /// The guarding bit for `flags.N?Type` parameters.
        flag: Option<Flag>,
    },
}

impl Parameter {
    /// The guarding flag, if this parameter is optional.
    pub fn flag(&self) -> Option<&Flag> {
        match &self.ty {
            ParameterType::Normal { flag, .. } => flag.as_ref(),
            ParameterType::Flags => None,
        }
    }

    /// `flags.N?true`: carried by its bit alone, nothing on the wire.
    pub fn is_presence_flag(&self) -> bool {
        matches!(
            &self.ty,
            ParameterType::Normal { ty, flag: Some(_) } if ty.name == "true"
        )
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        match &self.ty {
            ParameterType::Flags => f.write_str("#"),
            ParameterType::Normal { ty, flag: Some(fl) } => write!(f, "{}.{}?{ty}", fl.name, fl.index),
            ParameterType::Normal { ty, flag: None } => write!(f, "{ty}"),
        }
    }
}

impl FromStr for Parameter {
    type Err = ParamParseError;

    /// Parses `flags:#`, `id:long` or `until_date:flags.16?int`.
    ///
    /// `{X:Type}` is reported as [`ParamParseError::TypeDef`] so that the
    /// caller can record the generic instead of failing.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Some(inner) = token.strip_prefix('{') {
            return Err(match inner.strip_suffix(":Type}") {
                Some(name) => ParamParseError::TypeDef { name: name.to_owned() },
                None => ParamParseError::MissingDef,
            });
        }

        let (name, ty) = token.split_once(':').ok_or(ParamParseError::NotImplemented)?;
        if name.is_empty() || ty.is_empty() {
            return Err(ParamParseError::Empty);
        }

        let ty = if ty == "#" {
            ParameterType::Flags
        } else if let Some((cond, inner)) = ty.split_once('?') {
            let (flag_name, index) = cond.split_once('.').ok_or(ParamParseError::InvalidFlag)?;
            let index: u32 = index.parse().map_err(|_| ParamParseError::InvalidFlag)?;
            if flag_name.is_empty() || index >= 32 {
                return Err(ParamParseError::InvalidFlag);
            }
            ParameterType::Normal {
                ty: inner.parse()?,
                flag: Some(Flag { name: flag_name.to_owned(), index }),
            }
        } else {
            ParameterType::Normal { ty: ty.parse()?, flag: None }
        };

        Ok(Self { name: name.to_owned(), ty })
    }
}
