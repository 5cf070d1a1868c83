//! [`Serializable`] and the primitive TL encodings.
//!
//! See [MTProto Binary Serialization].
//!
//! [MTProto Binary Serialization]: https://core.telegram.org/mtproto/serialize

use crate::bool_ids;

/// Encode `self` in TL binary format.
pub trait Serializable {
    /// Appends the encoding of `self` to `buf`.
    fn serialize(&self, buf: &mut impl Extend<u8>);

    /// Allocates a fresh `Vec<u8>` and serializes into it.
    fn to_bytes(&self) -> Vec<u8> {
        let mut v = Vec::new();
        self.serialize(&mut v);
        v
    }
}

impl<T: Serializable + ?Sized> Serializable for &T {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        (**self).serialize(buf);
    }
}

impl<T: Serializable + ?Sized> Serializable for Box<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        (**self).serialize(buf);
    }
}

// ─── bool ────────────────────────────────────────────────────────────────────

impl Serializable for bool {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let id = if *self { bool_ids::TRUE } else { bool_ids::FALSE };
        id.serialize(buf);
    }
}

// ─── fixed width ─────────────────────────────────────────────────────────────

macro_rules! le_bytes {
    ($($t:ty),*) => {$(
        impl Serializable for $t {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                buf.extend(self.to_le_bytes());
            }
        }
    )*};
}

// int, #, long, int128, double
le_bytes!(i32, u32, i64, i128, f64);

/// `int128` / `int256` kept as raw little-endian bytes (nonces, hashes).
impl<const N: usize> Serializable for [u8; N] {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        buf.extend(self.iter().copied());
    }
}

// ─── bytes / string ──────────────────────────────────────────────────────────

/// Largest payload the 3-byte long-form length can describe.
pub const MAX_BYTES_LEN: usize = (1 << 24) - 1;

/// Marker byte introducing the long-form length.
pub const LONG_LENGTH_MARKER: u8 = 0xfe;

/// Length of the prefix plus zero padding that follows `len` payload bytes.
pub(crate) fn bytes_overhead(len: usize) -> (usize, usize) {
    let prefix = if len < LONG_LENGTH_MARKER as usize { 1 } else { 4 };
    (prefix, (4 - (prefix + len) % 4) % 4)
}

/// Length-prefixed, 4-byte aligned byte string.
///
/// * `len < 254`: `[len][data][padding]`
/// * otherwise:  `[0xfe][len: 3 bytes LE][data][padding]`
impl Serializable for [u8] {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let len = self.len();
        debug_assert!(len <= MAX_BYTES_LEN, "TL bytes cannot exceed 2^24 - 1 bytes");

        let (prefix, padding) = bytes_overhead(len);
        if prefix == 1 {
            buf.extend([len as u8]);
        } else {
            let [a, b, c, _] = (len as u32).to_le_bytes();
            buf.extend([LONG_LENGTH_MARKER, a, b, c]);
        }
        buf.extend(self.iter().copied());
        buf.extend(std::iter::repeat_n(0u8, padding));
    }
}

impl Serializable for str {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.as_bytes().serialize(buf);
    }
}

impl Serializable for String {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.as_bytes().serialize(buf);
    }
}

// ─── vectors ─────────────────────────────────────────────────────────────────

/// `Vec<u8>` is the TL `bytes` type, not a vector of bytes.
impl Serializable for Vec<u8> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.as_slice().serialize(buf);
    }
}

/// Boxed `Vector<T>`.
impl<T: Serializable> Serializable for Vec<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        crate::vector::write_with(self, buf, |item, buf| item.serialize(buf));
    }
}

/// Bare `vector<T>`.
impl<T: Serializable> Serializable for crate::RawVec<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        crate::vector::write_bare_with(&self.0, buf, |item, buf| item.serialize(buf));
    }
}

// ─── Option ──────────────────────────────────────────────────────────────────

/// Optional fields are announced by the flags word; `None` writes nothing.
impl<T: Serializable> Serializable for Option<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        if let Some(v) = self { v.serialize(buf); }
    }
}
