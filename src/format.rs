//! Format descriptors and the field index built from them.
//!
//! # Layout
//!
//! A record begins with a fixed preamble (two sync bytes and the message id,
//! [`PREAMBLE_LEN`] bytes in total) followed by its fields, packed in declared
//! order with no padding. A field's offset is therefore the preamble length
//! plus the lengths of every field declared before it.
//!
//! # Type Codes
//!
//! Each field is declared by a single character. The registered codes, and
//! the storage each maps to, are listed on [`FieldKind`]. All multi-byte values
//! are little-endian. Codes conventionally implying a scale (`c`, `C`, `e`,
//! `E`, `L`) are decoded as raw integers; applying the scale is left to the
//! consumer.

pub mod code;
pub mod descriptor;
pub mod index;

pub use code::{FieldKind, Value, size_for};
pub use descriptor::FormatDescriptor;
pub use index::{FieldEntry, FieldIndex, FormatError, IndexConfig, MAX_FIELDS, PREAMBLE_LEN};
