//! Per-format field index.

use alloc::string::String;
use core::fmt;

use log::debug;
use thiserror::Error;
use tinyvec::ArrayVec;

use super::{code::FieldKind, descriptor::FormatDescriptor};

/// Maximum number of fields a single format may declare.
pub const MAX_FIELDS: usize = 30;

/// Length of the record preamble: two sync bytes and the message id.
pub const PREAMBLE_LEN: usize = 3;

/// An error building a field index from a format descriptor.
#[derive(Debug, Error)]
pub enum FormatError {
    /// More fields declared than an index can hold.
    #[error("Format {name} declares {count} fields (at most 30 are supported).")]
    TooManyFields { name: String, count: usize },
    /// A type code with no registered kind.
    #[error("Format {name} uses an unregistered type code ({code:?}).")]
    UnknownType { name: String, code: char },
    /// Type codes, lengths and labels do not pair up.
    #[error("Format {name} declares {codes} type codes, {lengths} lengths and {labels} labels.")]
    CountMismatch {
        name: String,
        codes: usize,
        lengths: usize,
        labels: usize,
    },
}

/// Options for laying out a field index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Bytes preceding the first field of a record.
    pub preamble_len: usize,
    /// Treat a field laid out at offset 0 as not present.
    ///
    /// Older readers used offset 0 to mean "absent". With a non-empty preamble
    /// no real field lands there, so this only matters for preamble-less
    /// layouts.
    pub legacy_zero_offset: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            preamble_len: PREAMBLE_LEN,
            legacy_zero_offset: true,
        }
    }
}

/// Location and storage of a single field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    label: String,
    code: char,
    kind: FieldKind,
    offset: usize,
    length: usize,
    present: bool,
}

impl FieldEntry {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Type code the field was declared with.
    pub fn code(&self) -> char {
        self.code
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Byte offset of the field from the start of the record.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether the field can be read. Absent fields behave like unknown labels.
    pub fn is_present(&self) -> bool {
        self.present
    }
}

/// Lookup table from field label to field location, for one format.
///
/// An index is immutable once built, and may be shared freely between threads.
#[derive(Debug, Clone)]
pub struct FieldIndex {
    name: String,
    fields: ArrayVec<[FieldEntry; MAX_FIELDS]>,
    record_len: usize,
}

impl FieldIndex {
    /// Build an index for a descriptor using the default layout.
    pub fn new(descriptor: &FormatDescriptor) -> Result<Self, FormatError> {
        Self::with_config(descriptor, IndexConfig::default())
    }

    /// Build an index for a descriptor.
    ///
    /// Fields are laid out packed, in declared order, starting directly after
    /// the preamble. Each field occupies its declared length, which need not
    /// match the size of its type code: a character field is read over its
    /// whole span, and a number too wide for its span fails to read.
    pub fn with_config(d: &FormatDescriptor, config: IndexConfig) -> Result<Self, FormatError> {
        let codes = d.type_codes.chars().count();
        let lengths = d.field_lengths.len();
        let labels = d.label_count();

        let count = codes.max(lengths).max(labels);
        if count > MAX_FIELDS {
            Err(FormatError::TooManyFields {
                name: d.name.into(),
                count,
            })?;
        }

        if codes != lengths || lengths != labels {
            Err(FormatError::CountMismatch {
                name: d.name.into(),
                codes,
                lengths,
                labels,
            })?;
        }

        let mut fields = ArrayVec::new();
        let mut offset = config.preamble_len;

        let declared = d.type_codes.chars().zip(d.field_lengths).zip(d.labels.split(','));

        for ((code, &length), label) in declared {
            let kind = FieldKind::from_char(code).ok_or_else(|| FormatError::UnknownType {
                name: d.name.into(),
                code,
            })?;

            let length = length as usize;

            fields.push(FieldEntry {
                label: label.into(),
                code,
                kind,
                offset,
                length,
                present: !(config.legacy_zero_offset && offset == 0),
            });

            offset = offset.saturating_add(length);
        }

        debug!(
            "Indexed format {} ({} fields, {} bytes).",
            d.name,
            fields.len(),
            offset
        );

        Ok(Self {
            name: d.name.into(),
            fields,
            record_len: offset,
        })
    }

    /// Name of the format this index was built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields, in declared order.
    pub fn fields(&self) -> &[FieldEntry] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Length of a complete record, preamble included.
    pub fn record_len(&self) -> usize {
        self.record_len
    }

    /// Find a field by its exact label.
    pub fn field(&self, label: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|f| f.label == label)
    }

    /// Field labels, in declared order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.label.as_str())
    }

    /// Write the comma-separated label list into a buffer.
    ///
    /// The list is truncated to fit, and always followed by a null byte.
    /// Returns the number of bytes written before the null byte.
    pub fn write_labels(&self, buffer: &mut [u8]) -> usize {
        let Some(room) = buffer.len().checked_sub(1) else {
            return 0;
        };

        let mut n = 0;
        for (i, label) in self.labels().enumerate() {
            let separator = if i == 0 { &[][..] } else { &b","[..] };
            for &b in separator.iter().chain(label.as_bytes()) {
                if n == room {
                    buffer[n] = 0;
                    return n;
                }
                buffer[n] = b;
                n += 1;
            }
        }

        buffer[n] = 0;
        n
    }
}

impl fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}
