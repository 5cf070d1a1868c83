/// A decoded field value.
///
/// One variant per kind of TL value. Which variant a field holds is decided
/// by its declared type in the schema.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `int`
    Int(i32),
    /// `long`
    Long(i64),
    /// `int128`, as the raw little-endian bytes.
    Int128([u8; 16]),
    /// `int256`, as the raw little-endian bytes.
    Int256([u8; 32]),
    /// Boxed `Bool`.
    Bool(bool),
    /// `flags.N?true`: present, carried by the flag bit alone.
    True,
    /// `bytes`
    Bytes(Vec<u8>),
    /// `string`
    String(String),
    /// `double`
    Double(f64),
    /// A nested constructor, boxed or bare depending on the field type.
    Object(Box<Object>),
    /// `Vector<T>` or `vector<T>`.
    Vector(Vec<Value>),
}

impl Value {
    /// Short name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Int128(_) => "int128",
            Self::Int256(_) => "int256",
            Self::Bool(_) => "Bool",
            Self::True => "true",
            Self::Bytes(_) => "bytes",
            Self::String(_) => "string",
            Self::Double(_) => "double",
            Self::Object(_) => "object",
            Self::Vector(_) => "vector",
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

macro_rules! value_from {
    ($( $t:ty => $variant:ident ),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self { Self::$variant(v.into()) }
            }
        )*
    };
}

value_from! {
    i32 => Int,
    i64 => Long,
    bool => Bool,
    f64 => Double,
    String => String,
    &str => String,
    Vec<u8> => Bytes,
    Vec<Value> => Vector,
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(Box::new(o))
    }
}

/// A constructor instance: its ID and the fields present, in schema order.
///
/// Flags words are not listed; they are derived from which optional fields
/// are present. An absent optional field is simply not in `fields`.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub id: u32,
    pub fields: Vec<(String, Value)>,
}

impl Object {
    /// An object with no fields yet.
    pub fn new(id: u32) -> Self {
        Self { id, fields: Vec::new() }
    }

    /// Appends a field.
    ///
    /// ```
    /// use tlwire_dynamic::{Object, Value};
    ///
    /// let chat = Object::new(0x29562865).with("id", 7i64);
    /// assert_eq!(chat.get("id"), Some(&Value::Long(7)));
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// The value of field `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}
