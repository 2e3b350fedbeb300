#![no_std]

//! A field-indexed decoder for self-describing flight recorder log records.
//!
//! Every record type in a flight recorder log is declared at runtime by a
//! format descriptor: a name, one type code per field, the byte length of each
//! field, and a comma-separated list of labels. Aileron turns such a
//! descriptor into a [`FieldIndex`](format::FieldIndex) once, then retrieves
//! fields by label from any number of raw records of that format, converting
//! each value to whatever representation the caller asks for.
//!
//! Most users should begin with [`FieldIndex::get`](format::FieldIndex::get)
//! and [`FieldIndex::require`](format::FieldIndex::require), or derive
//! [`FromRecord`](macro@access::FromRecord) for a struct describing the fields
//! of a known message. The [`format`] module documents the type code catalog
//! and the packed record layout.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `std`: enable extractors needing floating point trigonometry (default).

extern crate alloc;

pub mod access;
pub mod format;
