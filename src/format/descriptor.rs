//! Format descriptors, as declared by a log's format records.

use alloc::vec::Vec;

use super::code::size_for;

/// Declaration of a record type.
///
/// A descriptor is only borrowed while its [`FieldIndex`](super::FieldIndex)
/// is built; the index keeps copies of everything it needs.
#[derive(Debug, Clone, Copy)]
pub struct FormatDescriptor<'a> {
    /// Name of the record type (for example `GPS`).
    pub name: &'a str,
    /// One type code per field, in declared order.
    pub type_codes: &'a str,
    /// Byte length of each field, in declared order.
    pub field_lengths: &'a [u8],
    /// Comma-separated field labels, in declared order.
    pub labels: &'a str,
}

impl<'a> FormatDescriptor<'a> {
    pub fn new(
        name: &'a str,
        type_codes: &'a str,
        field_lengths: &'a [u8],
        labels: &'a str,
    ) -> Self {
        Self {
            name,
            type_codes,
            field_lengths,
            labels,
        }
    }

    /// Number of labels in the label list.
    ///
    /// An empty list declares no labels for a format without type codes, and
    /// a single empty label otherwise. Empty labels are kept as declared.
    pub fn label_count(&self) -> usize {
        if self.labels.is_empty() && self.type_codes.is_empty() {
            0
        } else {
            self.labels.split(',').count()
        }
    }
}

/// Registered field lengths for a string of type codes.
///
/// Unregistered codes are given a length of 0; a descriptor built from the
/// result still fails on the unknown code.
pub fn lengths_for(type_codes: &str) -> Vec<u8> {
    type_codes
        .chars()
        .map(|c| u8::try_from(c).map_or(0, |c| size_for(c) as u8))
        .collect()
}
