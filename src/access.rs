//! Retrieval of field values from raw records.
//!
//! The accessors in this module are inherent methods of
//! [`FieldIndex`](crate::format::FieldIndex), grouped by what they return:
//!
//! - [`value`]: numbers and vectors through [`FieldIndex::get`] and
//!   [`FieldIndex::require`].
//! - [`text`]: fixed-length character fields.
//! - [`composite`]: positions, velocities and attitudes assembled from three
//!   fields each.
//!
//! A plain lookup reports a missing field as `Ok(None)`. Only the `require`
//! family turns absence into an [`Error`], leaving the caller to decide whether
//! to abort or skip the record.

pub mod composite;
pub mod text;
pub mod value;

use alloc::string::String;

use thiserror::Error;

use crate::format::FieldIndex;

pub use composite::{GroundVelocity, Location, Vector3};
pub use value::{FieldValue, Primitive, decode_code};

/// Errors occurring while retrieving a field from a record.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field is not part of the record's format.
    #[error("Required field {label} not found.")]
    MissingField { label: String },
    /// The record, or the field's declared span, ends before the value does.
    #[error("Value spans bytes {start}..{end}, past the limit at byte {limit}.")]
    Truncated {
        start: usize,
        end: usize,
        limit: usize,
    },
    /// A number was requested from a character field.
    #[error("Field {label} holds characters, not a number.")]
    NotNumeric { label: String },
    /// Characters were requested from a numeric field.
    #[error("Field {label} holds a number, not characters.")]
    NotText { label: String },
    /// A character field is not valid UTF-8.
    #[error("Field {label} is not valid UTF-8.")]
    NotUtf8 { label: String },
    /// A type code with no registered decoder.
    #[error("Unhandled format type ({0:?}).")]
    UnhandledType(char),
}

/// Derive [`FromRecord`] for a struct gathering fields of one format.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Add the `field("Label")` attribute to each struct field to be read. Fields
/// of type `Option<T>` are filled with [`FieldIndex::get`], any other type is
/// read with [`FieldIndex::require`], failing the whole record if the label is
/// missing. Struct fields without the attribute are left at their default.
///
/// ```
/// #[derive(Debug, FromRecord)]
/// struct Gps {
///     #[field("TimeMS")]
///     time_ms: u32,
///     #[field("Lat")]
///     lat: i32,
///     #[field("Lng")]
///     lng: i32,
///     #[field("NSats")]
///     satellites: Option<u8>,
/// }
/// ```
///
/// Any type implementing [`FieldValue`] may be used, including
/// [`Vector3`] (read from `<Label>X`, `<Label>Y` and `<Label>Z`) and byte
/// arrays (null-terminated copies of character fields).
#[cfg(feature = "derive")]
pub use aileron_derive::FromRecord;

/// Build a value from the fields of a single record.
///
/// See the [`FromRecord`](macro@FromRecord) derive macro for an automatic
/// implementation of this trait.
pub trait FromRecord: Sized {
    /// Read the value from a record laid out according to `index`.
    fn from_record(index: &FieldIndex, record: &[u8]) -> Result<Self, Error>;
}
