//! [`Deserializable`], the [`Cursor`] it reads from, and decoding errors.

use std::fmt;

use crate::bool_ids;
use crate::serialize::{LONG_LENGTH_MARKER, bytes_overhead};

// ─── Error ───────────────────────────────────────────────────────────────────

/// Everything that can go wrong while decoding.
///
/// None of these are recoverable inside the codec: the caller decides
/// whether to drop the message or the connection.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Fewer bytes remained than a fixed-width field or payload needs.
    Truncated { needed: usize, remaining: usize },
    /// The first byte of a `bytes`/`string` length is not a valid marker.
    MalformedLengthPrefix { marker: u8 },
    /// The input ran out before a vector's declared element count.
    VectorCountMismatch { declared: u32, decoded: usize },
    /// A constructor ID absent from the dispatch table or the expected type.
    UnknownConstructor { id: u32 },
    /// A `string` whose payload is not UTF-8.
    InvalidUtf8,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { needed, remaining } => {
                write!(f, "truncated stream: needed {needed} bytes, {remaining} remaining")
            }
            Self::MalformedLengthPrefix { marker } => {
                write!(f, "malformed length prefix: {marker:#04x}")
            }
            Self::VectorCountMismatch { declared, decoded } => {
                write!(f, "vector declared {declared} elements, only {decoded} available")
            }
            Self::UnknownConstructor { id } => write!(f, "unknown constructor id: {id:#010x}"),
            Self::InvalidUtf8 => write!(f, "string is not valid UTF-8"),
        }
    }
}

impl std::error::Error for Error {}

/// Specialized `Result` for deserialization.
pub type Result<T> = std::result::Result<T, Error>;

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// A zero-copy read cursor over an in-memory byte slice.
///
/// A failed read leaves the position where it was.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf`.
    pub fn from_slice(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize { self.pos }

    /// Remaining bytes.
    pub fn remaining(&self) -> usize { self.buf.len() - self.pos }

    /// Borrow the next `n` bytes and advance past them.
    pub fn read_slice(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(Error::Truncated { needed: n, remaining });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_slice(1)?[0])
    }

    /// Fill `out` completely.
    pub fn read_exact(&mut self, out: &mut [u8]) -> Result<()> {
        out.copy_from_slice(self.read_slice(out.len())?);
        Ok(())
    }

    /// Read a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        self.read_exact(&mut out)?;
        Ok(out)
    }
}

/// Argument type of [`Deserializable::deserialize`].
pub type Buffer<'a, 'b> = &'a mut Cursor<'b>;

// ─── Deserializable ──────────────────────────────────────────────────────────

/// Decode a value from TL binary format.
pub trait Deserializable: Sized {
    /// Read `Self` from `buf`, advancing its position.
    fn deserialize(buf: Buffer) -> Result<Self>;

    /// Decode from a byte slice; trailing bytes are ignored.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::from_slice(bytes);
        Self::deserialize(&mut cursor)
    }
}

impl<T: Deserializable> Deserializable for Box<T> {
    fn deserialize(buf: Buffer) -> Result<Self> {
        T::deserialize(buf).map(Box::new)
    }
}

// ─── Primitives ──────────────────────────────────────────────────────────────

impl Deserializable for bool {
    fn deserialize(buf: Buffer) -> Result<Self> {
        match u32::deserialize(buf)? {
            bool_ids::TRUE => Ok(true),
            bool_ids::FALSE => Ok(false),
            id => Err(Error::UnknownConstructor { id }),
        }
    }
}

macro_rules! from_le_bytes {
    ($($t:ty),*) => {$(
        impl Deserializable for $t {
            fn deserialize(buf: Buffer) -> Result<Self> {
                Ok(<$t>::from_le_bytes(buf.read_array()?))
            }
        }
    )*};
}

from_le_bytes!(i32, u32, i64, i128, f64);

impl<const N: usize> Deserializable for [u8; N] {
    fn deserialize(buf: Buffer) -> Result<Self> {
        buf.read_array()
    }
}

// ─── Bytes / String ──────────────────────────────────────────────────────────

impl Deserializable for Vec<u8> {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let start = buf.pos;
        let result = read_bytes(buf);
        if result.is_err() {
            buf.pos = start;
        }
        result.map(<[u8]>::to_vec)
    }
}

fn read_bytes<'a>(buf: &mut Cursor<'a>) -> Result<&'a [u8]> {
    let len = match buf.read_byte()? {
        LONG_LENGTH_MARKER => {
            let [a, b, c] = buf.read_array()?;
            u32::from_le_bytes([a, b, c, 0]) as usize
        }
        0xff => return Err(Error::MalformedLengthPrefix { marker: 0xff }),
        short => short as usize,
    };
    let data = buf.read_slice(len)?;
    let (_, padding) = bytes_overhead(len);
    buf.read_slice(padding)?;
    Ok(data)
}

impl Deserializable for String {
    fn deserialize(buf: Buffer) -> Result<Self> {
        String::from_utf8(Vec::<u8>::deserialize(buf)?).map_err(|_| Error::InvalidUtf8)
    }
}

// ─── Vectors ─────────────────────────────────────────────────────────────────

impl<T: Deserializable> Deserializable for Vec<T> {
    fn deserialize(buf: Buffer) -> Result<Self> {
        crate::vector::read_with(buf, T::deserialize)
    }
}

impl<T: Deserializable> Deserializable for crate::RawVec<T> {
    fn deserialize(buf: Buffer) -> Result<Self> {
        crate::vector::read_bare_with(buf, T::deserialize).map(crate::RawVec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_read_keeps_position() {
        let mut cur = Cursor::from_slice(&[1, 2, 3]);
        assert_eq!(cur.read_byte(), Ok(1));
        assert_eq!(
            cur.read_array::<4>(),
            Err(Error::Truncated { needed: 4, remaining: 2 })
        );
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn bytes_rewind_on_short_payload() {
        // Declares 5 bytes of payload, only 2 present.
        let mut cur = Cursor::from_slice(&[5, 0xaa, 0xbb]);
        assert_eq!(
            Vec::<u8>::deserialize(&mut cur),
            Err(Error::Truncated { needed: 5, remaining: 2 })
        );
        assert_eq!(cur.pos(), 0);
    }
}
