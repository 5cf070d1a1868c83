use std::fmt;
use std::str::FromStr;

use crate::errors::ParamParseError;

/// A type expression such as `Chat`, `auth.SentCodeType` or `Vector<long>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Type {
    /// Namespace parts, `["auth"]` for `auth.SentCodeType`.
    pub namespace: Vec<String>,
    /// The unqualified name.
    pub name: String,
    /// Lowercase first letter: a bare type (written without constructor ID).
    pub bare: bool,
    /// `!X`: a reference to a declared generic.
    pub generic_ref: bool,
    /// The argument of `Vector<…>`.
    pub generic_arg: Option<Box<Type>>,
}

impl Type {
    /// `namespace.name`, without generic arguments.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            return self.name.clone();
        }
        format!("{}.{}", self.namespace.join("."), self.name)
    }

    /// `Vector<T>` (boxed) or `vector<T>` (bare).
    pub fn is_vector(&self) -> bool {
        self.namespace.is_empty() && self.name.eq_ignore_ascii_case("vector")
    }

    pub(crate) fn push_generic_refs<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.generic_ref {
            out.push(&self.name);
        }
        if let Some(arg) = &self.generic_arg {
            arg.push_generic_refs(out);
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generic_ref {
            f.write_str("!")?;
        }
        f.write_str(&self.full_name())?;
        match &self.generic_arg {
            Some(arg) => write!(f, "<{arg}>"),
            None => Ok(()),
        }
    }
}

impl FromStr for Type {
    type Err = ParamParseError;

    /// Parses a type expression.
    ///
    /// ```
    /// use tlwire_parser::tl::Type;
    /// let ty: Type = "Vector<auth.SentCodeType>".parse().unwrap();
    /// assert!(ty.is_vector());
    /// assert_eq!(ty.generic_arg.unwrap().full_name(), "auth.SentCodeType");
    /// ```
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (raw, generic_ref) = match raw.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (raw, false),
        };

        let (path, generic_arg) = match raw.split_once('<') {
            None => (raw, None),
            Some((path, rest)) => {
                let arg = rest.strip_suffix('>').ok_or(ParamParseError::InvalidGeneric)?;
                (path, Some(Box::new(arg.parse::<Type>()?)))
            }
        };

        let mut parts: Vec<&str> = path.split('.').collect();
        let name = parts.pop().unwrap_or_default();
        if name.is_empty() || parts.iter().any(|p| p.is_empty()) {
            return Err(ParamParseError::Empty);
        }

        Ok(Self {
            namespace: parts.into_iter().map(str::to_owned).collect(),
            name: name.to_owned(),
            bare: name.starts_with(|c: char| c.is_ascii_lowercase()),
            generic_ref,
            generic_arg,
        })
    }
}
