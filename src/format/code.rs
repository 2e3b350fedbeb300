//! Catalog of field type codes.

use core::fmt;

use zerocopy::{
    FromBytes,
    byteorder::little_endian::{F32, I16, I32, I64, U16, U32, U64},
};

/// Storage of a field, keyed by its type code.
///
/// This is the single catalog of registered codes: both the size of a field
/// and the way its bytes are decoded follow from its kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `b`
    I8,
    /// `B`, `M`
    #[default]
    U8,
    /// `h`, `c`
    I16,
    /// `H`, `C`
    U16,
    /// `i`, `L`, `e`
    I32,
    /// `I`, `E`
    U32,
    /// `f`
    F32,
    /// `q`
    I64,
    /// `Q`
    U64,
    /// `n` (4), `N` (16), `Z` (64)
    Chars(usize),
}

impl FieldKind {
    /// Look up the kind registered for a type code.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            b'b' => Self::I8,
            b'B' | b'M' => Self::U8,
            b'h' | b'c' => Self::I16,
            b'H' | b'C' => Self::U16,
            b'i' | b'L' | b'e' => Self::I32,
            b'I' | b'E' => Self::U32,
            b'f' => Self::F32,
            b'q' => Self::I64,
            b'Q' => Self::U64,
            b'n' => Self::Chars(4),
            b'N' => Self::Chars(16),
            b'Z' => Self::Chars(64),
            _ => return None,
        })
    }

    /// Look up the kind registered for a type code given as a character.
    pub fn from_char(code: char) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_code)
    }

    /// Number of bytes a field of this kind occupies.
    pub const fn size(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 => 8,
            Self::Chars(n) => n,
        }
    }

    /// Decode the bytes of a field of this kind.
    ///
    /// Returns `None` if `r` is not exactly [`Self::size`] bytes long.
    pub fn decode(self, r: &[u8]) -> Option<Value<'_>> {
        Some(match self {
            Self::I8 => Value::I8(i8::read_from_bytes(r).ok()?),
            Self::U8 => Value::U8(u8::read_from_bytes(r).ok()?),
            Self::I16 => Value::I16(I16::read_from_bytes(r).ok()?.get()),
            Self::U16 => Value::U16(U16::read_from_bytes(r).ok()?.get()),
            Self::I32 => Value::I32(I32::read_from_bytes(r).ok()?.get()),
            Self::U32 => Value::U32(U32::read_from_bytes(r).ok()?.get()),
            Self::F32 => Value::F32(F32::read_from_bytes(r).ok()?.get()),
            Self::I64 => Value::I64(I64::read_from_bytes(r).ok()?.get()),
            Self::U64 => Value::U64(U64::read_from_bytes(r).ok()?.get()),
            Self::Chars(n) if r.len() == n => Value::Chars(r),
            Self::Chars(_) => return None,
        })
    }
}

/// Size in bytes registered for a type code, or 0 if it is unregistered.
pub const fn size_for(code: u8) -> usize {
    match FieldKind::from_code(code) {
        Some(kind) => kind.size(),
        None => 0,
    }
}

/// A field value in its native representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    F32(f32),
    I64(i64),
    U64(u64),
    /// Raw characters, including any trailing null padding.
    Chars(&'a [u8]),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I8(x) => write!(f, "{x}"),
            Self::U8(x) => write!(f, "{x}"),
            Self::I16(x) => write!(f, "{x}"),
            Self::U16(x) => write!(f, "{x}"),
            Self::I32(x) => write!(f, "{x}"),
            Self::U32(x) => write!(f, "{x}"),
            Self::F32(x) => write!(f, "{x}"),
            Self::I64(x) => write!(f, "{x}"),
            Self::U64(x) => write!(f, "{x}"),
            Self::Chars(c) => {
                let end = c.iter().position(|&b| b == 0).unwrap_or(c.len());
                write!(f, "{}", c[..end].escape_ascii())
            }
        }
    }
}
