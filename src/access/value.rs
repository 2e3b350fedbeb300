//! Numeric and vector retrieval.
//!
//! # Conversion
//!
//! Values are converted from their stored kind to the requested type with
//! Rust's `as` casts:
//!
//! - Integer to narrower integer keeps the low bits (`300` read as `u8` is
//!   `44`, and `-1` read as `u16` is `65535`).
//! - Integer to wider integer sign-extends signed sources and zero-extends
//!   unsigned ones.
//! - Float to integer rounds toward zero and saturates at the target's bounds;
//!   `NaN` becomes `0`.
//! - Integer to float rounds to the nearest representable value.

use alloc::string::String;

use log::trace;

use crate::format::{FieldIndex, FieldKind, Value};

use super::Error;

/// A numeric type a stored value can be converted to.
pub trait Primitive: Copy {
    /// Convert a stored value, or `None` if it holds characters.
    fn from_value(value: Value<'_>) -> Option<Self>;
}

/// A type retrievable from a record by label.
pub trait FieldValue: Sized {
    /// Retrieve the value labelled `label`, or `None` if the format lacks it.
    fn extract(index: &FieldIndex, record: &[u8], label: &str) -> Result<Option<Self>, Error>;
}

macro_rules! primitive {
    ($($t:ty),*) => {$(
        impl Primitive for $t {
            fn from_value(value: Value<'_>) -> Option<Self> {
                Some(match value {
                    Value::I8(x) => x as $t,
                    Value::U8(x) => x as $t,
                    Value::I16(x) => x as $t,
                    Value::U16(x) => x as $t,
                    Value::I32(x) => x as $t,
                    Value::U32(x) => x as $t,
                    Value::F32(x) => x as $t,
                    Value::I64(x) => x as $t,
                    Value::U64(x) => x as $t,
                    Value::Chars(_) => return None,
                })
            }
        }

        impl FieldValue for $t {
            fn extract(index: &FieldIndex, record: &[u8], label: &str) -> Result<Option<Self>, Error> {
                match index.value(record, label)? {
                    Some(value) => Self::from_value(value)
                        .map(Some)
                        .ok_or_else(|| Error::NotNumeric { label: label.into() }),
                    None => Ok(None),
                }
            }
        }
    )*};
}

primitive!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl FieldIndex {
    /// Retrieve a field, converted to `T`.
    ///
    /// Returns `Ok(None)` if the format has no field with this label, or the
    /// field is marked absent. Retrieving a [`Vector3`](super::Vector3) reads
    /// the three fields `<label>X`, `<label>Y` and `<label>Z`, and is `None` if
    /// any one of them is missing.
    pub fn get<T: FieldValue>(&self, record: &[u8], label: &str) -> Result<Option<T>, Error> {
        T::extract(self, record, label)
    }

    /// Retrieve a field that must be present, converted to `T`.
    pub fn require<T: FieldValue>(&self, record: &[u8], label: &str) -> Result<T, Error> {
        self.get(record, label)?.ok_or_else(|| Error::MissingField {
            label: String::from(label),
        })
    }

    /// Retrieve a field in its stored representation.
    pub fn value<'r>(&self, record: &'r [u8], label: &str) -> Result<Option<Value<'r>>, Error> {
        let Some(field) = self.field(label).filter(|f| f.is_present()) else {
            trace!("Format {} has no field {label}.", self.name());
            return Ok(None);
        };

        read_at(record, field.kind(), field.offset(), field.length()).map(Some)
    }
}

/// Decode a value of type `code` stored at `offset` in a record.
///
/// This bypasses the field index, for callers holding only a raw type code.
pub fn decode_code(record: &[u8], code: char, offset: usize) -> Result<Value<'_>, Error> {
    let kind = FieldKind::from_char(code).ok_or(Error::UnhandledType(code))?;
    read_at(record, kind, offset, kind.size())
}

/// Read a value of `kind` from the `length` bytes declared at `offset`.
///
/// Character fields take their whole declared span; numbers take the size of
/// their kind, which must fit within it.
fn read_at(record: &[u8], kind: FieldKind, offset: usize, length: usize) -> Result<Value<'_>, Error> {
    let size = match kind {
        FieldKind::Chars(_) => length,
        _ => kind.size(),
    };

    let limit = record.len().min(offset.saturating_add(length));
    let end = offset.checked_add(size);
    let truncated = || Error::Truncated {
        start: offset,
        end: end.unwrap_or(usize::MAX),
        limit,
    };

    let end = end.filter(|&end| end <= limit).ok_or_else(truncated)?;
    let bytes = record.get(offset..end).ok_or_else(truncated)?;

    match kind {
        FieldKind::Chars(_) => Ok(Value::Chars(bytes)),
        _ => kind.decode(bytes).ok_or_else(truncated),
    }
}
