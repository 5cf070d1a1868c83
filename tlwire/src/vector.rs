//! Vector encodings with caller-supplied element codecs.
//!
//! Boxed `Vector<T>` is `[0x1cb5c415][count: u32][items…]`; bare `vector<T>`
//! omits the marker. The element codec is passed explicitly, so the same
//! functions serve typed fields (`Vec<T>` impls) and schema-driven values.

use crate::deserialize::{Cursor, Error, Result};
use crate::serialize::Serializable;

/// Constructor ID of the boxed `Vector t`.
pub const VECTOR_ID: u32 = 0x1cb5c415;

/// Writes a boxed vector, encoding each item with `write`.
pub fn write_with<T, B, F>(items: &[T], buf: &mut B, write: F)
where
    B: Extend<u8>,
    F: FnMut(&T, &mut B),
{
    VECTOR_ID.serialize(buf);
    write_bare_with(items, buf, write);
}

/// Writes a bare vector: count then items.
pub fn write_bare_with<T, B, F>(items: &[T], buf: &mut B, mut write: F)
where
    B: Extend<u8>,
    F: FnMut(&T, &mut B),
{
    (items.len() as u32).serialize(buf);
    for item in items {
        write(item, buf);
    }
}

/// Reads a boxed vector, decoding each element with `read`.
///
/// A marker other than [`VECTOR_ID`] is an [`Error::UnknownConstructor`].
pub fn read_with<'b, T, F>(buf: &mut Cursor<'b>, read: F) -> Result<Vec<T>>
where
    F: FnMut(&mut Cursor<'b>) -> Result<T>,
{
    let id: [u8; 4] = buf.read_array()?;
    let id = u32::from_le_bytes(id);
    if id != VECTOR_ID {
        return Err(Error::UnknownConstructor { id });
    }
    read_bare_with(buf, read)
}

/// Reads a bare vector.
///
/// Running out of input before `count` elements were decoded is reported
/// as [`Error::VectorCountMismatch`] rather than a plain truncation.
pub fn read_bare_with<'b, T, F>(buf: &mut Cursor<'b>, mut read: F) -> Result<Vec<T>>
where
    F: FnMut(&mut Cursor<'b>) -> Result<T>,
{
    let declared = u32::from_le_bytes(buf.read_array()?);

    // Every element takes at least one byte; do not trust the count further.
    let mut items = Vec::with_capacity((declared as usize).min(buf.remaining()));
    for decoded in 0..declared as usize {
        match read(buf) {
            Ok(item) => items.push(item),
            Err(Error::Truncated { .. }) => {
                return Err(Error::VectorCountMismatch { declared, decoded });
            }
            Err(e) => return Err(e),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deserializable;

    #[test]
    fn explicit_element_codec() {
        // Elements as single bytes, which no typed impl would do.
        let mut buf = Vec::new();
        write_with(&[1u8, 2, 3], &mut buf, |b, out| out.push(*b));
        assert_eq!(buf.len(), 8 + 3);

        let mut cur = Cursor::from_slice(&buf);
        let items = read_with(&mut cur, |c| c.read_byte()).unwrap();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn huge_count_does_not_preallocate() {
        let mut buf = Vec::new();
        VECTOR_ID.serialize(&mut buf);
        u32::MAX.serialize(&mut buf);
        7i32.serialize(&mut buf);

        assert_eq!(
            Vec::<i32>::from_bytes(&buf),
            Err(Error::VectorCountMismatch { declared: u32::MAX, decoded: 1 })
        );
    }
}
