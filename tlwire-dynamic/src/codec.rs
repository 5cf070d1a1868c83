//! Encoding and decoding [`Object`]s by walking their definitions.
//!
//! Parameters are processed in declared order. A `#` parameter is a flags
//! word: written as the OR of the bits of the optional parameters present,
//! and read before the parameters it guards.

use tlwire::serialize::MAX_BYTES_LEN;
use tlwire::vector::VECTOR_ID;
use tlwire::{Cursor, Deserializable, Serializable};
use tlwire_parser::tl::{Category, Definition, Flag, ParameterType, Type};

use crate::error::{DecodeError, EncodeError};
use crate::schema::Schema;
use crate::value::{Object, Value};

/// Deepest nesting of objects inside objects accepted when encoding or
/// decoding.
pub const MAX_DEPTH: usize = 64;

/// What a declared field type means on the wire.
enum Kind<'a> {
    Int,
    Long,
    Int128,
    Int256,
    Double,
    Bytes,
    String,
    Bool,
    True,
    Vector { boxed: bool, item: &'a Type },
    /// `!X`: any boxed object.
    Any,
    /// A constructor written without its ID.
    Bare(&'a Definition),
    /// A boxed type: ID, then the body of a constructor of that type.
    Boxed,
}

impl Schema {
    fn resolve<'a>(&'a self, ty: &'a Type) -> Option<Kind<'a>> {
        if ty.generic_ref {
            return Some(Kind::Any);
        }
        if ty.is_vector() {
            let item = ty.generic_arg.as_deref()?;
            return Some(Kind::Vector { boxed: !ty.bare, item });
        }
        if ty.namespace.is_empty() {
            let primitive = match ty.name.as_str() {
                "int" => Some(Kind::Int),
                "long" => Some(Kind::Long),
                "int128" => Some(Kind::Int128),
                "int256" => Some(Kind::Int256),
                "double" => Some(Kind::Double),
                "bytes" => Some(Kind::Bytes),
                "string" => Some(Kind::String),
                "Bool" => Some(Kind::Bool),
                "true" => Some(Kind::True),
                _ => None,
            };
            if primitive.is_some() {
                return primitive;
            }
        }
        if ty.bare {
            let id = self.id_of(&ty.full_name())?;
            return self.definition(id).map(Kind::Bare);
        }
        Some(Kind::Boxed)
    }

    fn lookup(&self, id: u32, buf: &Cursor<'_>) -> tlwire::deserialize::Result<&Definition> {
        self.definition(id).ok_or_else(|| {
            log::warn!("[schema] unknown constructor {id:#010x} at offset {}", buf.pos() - 4);
            tlwire::Error::UnknownConstructor { id }
        })
    }

    // ─── Decoding ────────────────────────────────────────────────────────────

    /// Decodes one boxed object, dispatching on its leading constructor ID.
    ///
    /// An unknown ID fails having consumed exactly the four ID bytes.
    /// Objects nested deeper than [`MAX_DEPTH`] fail with
    /// [`DecodeError::TooDeep`].
    pub fn read(&self, buf: &mut Cursor<'_>) -> Result<Object, DecodeError> {
        self.read_boxed(buf, 0)
    }

    /// Decodes one boxed object from the start of `bytes`.
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<Object, DecodeError> {
        self.read(&mut Cursor::from_slice(bytes))
    }

    fn read_boxed(&self, buf: &mut Cursor<'_>, depth: usize) -> Result<Object, DecodeError> {
        let id = u32::deserialize(buf)?;
        let def = self.lookup(id, buf)?;
        log::trace!("[schema] decoding {}", def.full_name());
        self.read_body(def, buf, depth)
    }

    fn read_body(&self, def: &Definition, buf: &mut Cursor<'_>, depth: usize) -> Result<Object, DecodeError> {
        if depth > MAX_DEPTH {
            return Err(DecodeError::TooDeep { limit: MAX_DEPTH });
        }

        let mut words: Vec<(&str, u32)> = Vec::new();
        let mut fields = Vec::with_capacity(def.params.len());

        for param in &def.params {
            match &param.ty {
                ParameterType::Flags => words.push((param.name.as_str(), u32::deserialize(buf)?)),
                ParameterType::Normal { ty, flag } => {
                    if let Some(fl) = flag {
                        let word = words.iter().find(|(n, _)| *n == fl.name).map_or(0, |(_, w)| *w);
                        if word & fl.mask() == 0 {
                            continue;
                        }
                    }
                    fields.push((param.name.clone(), self.read_value(ty, buf, depth)?));
                }
            }
        }
        Ok(Object { id: def.id, fields })
    }

    fn read_value(&self, ty: &Type, buf: &mut Cursor<'_>, depth: usize) -> Result<Value, DecodeError> {
        let kind = self
            .resolve(ty)
            .ok_or_else(|| DecodeError::UnresolvedType { name: ty.to_string() })?;

        Ok(match kind {
            Kind::Int => Value::Int(i32::deserialize(buf)?),
            Kind::Long => Value::Long(i64::deserialize(buf)?),
            Kind::Int128 => Value::Int128(<[u8; 16]>::deserialize(buf)?),
            Kind::Int256 => Value::Int256(<[u8; 32]>::deserialize(buf)?),
            Kind::Double => Value::Double(f64::deserialize(buf)?),
            Kind::Bytes => Value::Bytes(Vec::<u8>::deserialize(buf)?),
            Kind::String => Value::String(String::deserialize(buf)?),
            Kind::Bool => Value::Bool(bool::deserialize(buf)?),
            Kind::True => Value::True,
            Kind::Vector { boxed, item } => Value::Vector(self.read_vector(boxed, item, buf, depth)?),
            Kind::Any => Value::from(self.read_boxed(buf, depth + 1)?),
            Kind::Bare(def) => Value::from(self.read_body(def, buf, depth + 1)?),
            Kind::Boxed => {
                let id = u32::deserialize(buf)?;
                let def = self.lookup(id, buf)?;
                if !belongs_to(def, ty) {
                    return Err(DecodeError::WrongType {
                        expected: ty.full_name(),
                        id,
                        found: def.full_name(),
                    });
                }
                Value::from(self.read_body(def, buf, depth + 1)?)
            }
        })
    }

    /// Same contract as [`tlwire::vector::read_with`], over schema values.
    fn read_vector(
        &self,
        boxed: bool,
        item: &Type,
        buf: &mut Cursor<'_>,
        depth: usize,
    ) -> Result<Vec<Value>, DecodeError> {
        if boxed {
            let id = u32::deserialize(buf)?;
            if id != VECTOR_ID {
                return Err(tlwire::Error::UnknownConstructor { id }.into());
            }
        }
        let declared = u32::deserialize(buf)?;

        let mut items = Vec::with_capacity((declared as usize).min(buf.remaining()));
        for decoded in 0..declared as usize {
            match self.read_value(item, buf, depth) {
                Ok(v) => items.push(v),
                Err(DecodeError::Wire(tlwire::Error::Truncated { .. })) => {
                    return Err(tlwire::Error::VectorCountMismatch { declared, decoded }.into());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(items)
    }

    // ─── Encoding ────────────────────────────────────────────────────────────

    /// Encodes `obj` boxed: its constructor ID, then its fields.
    ///
    /// The object is checked against its definition first; on error nothing
    /// is written to `buf`. Fields must be listed in declared order, as
    /// decoding produces them.
    pub fn write(&self, obj: &Object, buf: &mut impl Extend<u8>) -> Result<(), EncodeError> {
        buf.extend(self.to_bytes(obj)?);
        Ok(())
    }

    /// Allocates and returns the boxed encoding of `obj`.
    pub fn to_bytes(&self, obj: &Object) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        self.write_boxed(obj, &mut out, 0)?;
        Ok(out)
    }

    fn write_boxed(&self, obj: &Object, out: &mut Vec<u8>, depth: usize) -> Result<(), EncodeError> {
        let def = self
            .definition(obj.id)
            .ok_or(EncodeError::UnknownConstructor { id: obj.id })?;
        obj.id.serialize(out);
        self.write_body(def, obj, out, depth)
    }

    fn write_body(&self, def: &Definition, obj: &Object, out: &mut Vec<u8>, depth: usize) -> Result<(), EncodeError> {
        if depth > MAX_DEPTH {
            return Err(EncodeError::TooDeep { limit: MAX_DEPTH });
        }
        check_field_order(def, obj)?;

        for param in &def.params {
            match &param.ty {
                ParameterType::Flags => {
                    let word = def
                        .flagged_by(&param.name)
                        .filter(|p| obj.get(&p.name).is_some())
                        .filter_map(|p| p.flag().map(Flag::mask))
                        .fold(0u32, |w, bit| w | bit);
                    word.serialize(out);
                }
                ParameterType::Normal { ty, flag } => match obj.get(&param.name) {
                    Some(value) => self.write_value(def, &param.name, ty, value, out, depth)?,
                    None if flag.is_some() => {}
                    None => {
                        return Err(EncodeError::MissingField {
                            constructor: def.full_name(),
                            field: param.name.clone(),
                        });
                    }
                },
            }
        }
        Ok(())
    }

    fn write_value(
        &self,
        def: &Definition,
        field: &str,
        ty: &Type,
        value: &Value,
        out: &mut Vec<u8>,
        depth: usize,
    ) -> Result<(), EncodeError> {
        let kind = self
            .resolve(ty)
            .ok_or_else(|| EncodeError::UnresolvedType { name: ty.to_string() })?;
        let too_long = |len: usize| EncodeError::TooLong {
            constructor: def.full_name(),
            field: field.to_owned(),
            len,
        };

        match (kind, value) {
            (Kind::Int, Value::Int(v)) => v.serialize(out),
            (Kind::Long, Value::Long(v)) => v.serialize(out),
            (Kind::Int128, Value::Int128(v)) => v.serialize(out),
            (Kind::Int256, Value::Int256(v)) => v.serialize(out),
            (Kind::Double, Value::Double(v)) => v.serialize(out),
            (Kind::Bytes, Value::Bytes(v)) if v.len() > MAX_BYTES_LEN => return Err(too_long(v.len())),
            (Kind::Bytes, Value::Bytes(v)) => v.serialize(out),
            (Kind::String, Value::String(v)) if v.len() > MAX_BYTES_LEN => return Err(too_long(v.len())),
            (Kind::String, Value::String(v)) => v.serialize(out),
            (Kind::Bool, Value::Bool(v)) => v.serialize(out),
            (Kind::True, Value::True) => {}
            (Kind::Vector { boxed, item }, Value::Vector(items)) => {
                if boxed {
                    VECTOR_ID.serialize(out);
                }
                (items.len() as u32).serialize(out);
                for v in items {
                    self.write_value(def, field, item, v, out, depth)?;
                }
            }
            (Kind::Any, Value::Object(o)) => self.write_boxed(o, out, depth + 1)?,
            (Kind::Bare(inner), Value::Object(o)) => {
                if o.id != inner.id {
                    return Err(EncodeError::WrongType {
                        expected: inner.full_name(),
                        id: o.id,
                        found: self.definition(o.id).map_or_else(|| "unknown".to_owned(), Definition::full_name),
                    });
                }
                self.write_body(inner, o, out, depth + 1)?;
            }
            (Kind::Boxed, Value::Object(o)) => {
                let inner = self
                    .definition(o.id)
                    .ok_or(EncodeError::UnknownConstructor { id: o.id })?;
                if !belongs_to(inner, ty) {
                    return Err(EncodeError::WrongType {
                        expected: ty.full_name(),
                        id: o.id,
                        found: inner.full_name(),
                    });
                }
                o.id.serialize(out);
                self.write_body(inner, o, out, depth + 1)?;
            }
            (_, value) => {
                return Err(EncodeError::KindMismatch {
                    constructor: def.full_name(),
                    field: field.to_owned(),
                    expected: ty.to_string(),
                    found: value.kind(),
                });
            }
        }
        Ok(())
    }
}

/// Every field must be declared, listed once, and in declared order.
fn check_field_order(def: &Definition, obj: &Object) -> Result<(), EncodeError> {
    let mut last: Option<usize> = None;
    for (name, _) in &obj.fields {
        let position = def
            .params
            .iter()
            .position(|p| p.ty != ParameterType::Flags && p.name == *name);
        let Some(position) = position else {
            return Err(EncodeError::ExtraField { constructor: def.full_name(), field: name.clone() });
        };
        match last {
            Some(prev) if prev == position => {
                return Err(EncodeError::ExtraField { constructor: def.full_name(), field: name.clone() });
            }
            Some(prev) if prev > position => {
                return Err(EncodeError::OutOfOrder { constructor: def.full_name(), field: name.clone() });
            }
            _ => last = Some(position),
        }
    }
    Ok(())
}

/// Whether constructor `def` builds the boxed type `ty`.
fn belongs_to(def: &Definition, ty: &Type) -> bool {
    def.category == Category::Types && def.ty.full_name() == ty.full_name()
}
