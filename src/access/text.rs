//! Fixed-length character fields.

use crate::format::{FieldIndex, Value};

use super::{Error, FieldValue};

impl FieldIndex {
    /// Copy a character field into a buffer.
    ///
    /// At most `buffer.len() - 1` bytes are copied, and the remainder of the
    /// buffer is zeroed, so the copy is always null-terminated even when the
    /// field fills its declared length. An empty buffer is left untouched.
    ///
    /// Returns `Ok(false)` if the format has no field with this label.
    pub fn copy_chars(&self, record: &[u8], label: &str, buffer: &mut [u8]) -> Result<bool, Error> {
        let Some(chars) = self.chars(record, label)? else {
            return Ok(false);
        };

        if let Some(room) = buffer.len().checked_sub(1) {
            let n = chars.len().min(room);
            let (head, tail) = buffer.split_at_mut(n);
            head.copy_from_slice(&chars[..n]);
            tail.fill(0);
        }

        Ok(true)
    }

    /// Borrow a character field as a string, up to its first null byte.
    pub fn get_str<'r>(&self, record: &'r [u8], label: &str) -> Result<Option<&'r str>, Error> {
        let Some(chars) = self.chars(record, label)? else {
            return Ok(None);
        };

        let end = chars.iter().position(|&c| c == 0).unwrap_or(chars.len());

        core::str::from_utf8(&chars[..end])
            .map(Some)
            .map_err(|_| Error::NotUtf8 {
                label: label.into(),
            })
    }

    fn chars<'r>(&self, record: &'r [u8], label: &str) -> Result<Option<&'r [u8]>, Error> {
        match self.value(record, label)? {
            Some(Value::Chars(chars)) => Ok(Some(chars)),
            Some(_) => Err(Error::NotText {
                label: label.into(),
            }),
            None => Ok(None),
        }
    }
}

impl<const N: usize> FieldValue for [u8; N] {
    fn extract(index: &FieldIndex, record: &[u8], label: &str) -> Result<Option<Self>, Error> {
        let mut buffer = [0; N];
        Ok(index
            .copy_chars(record, label, &mut buffer)?
            .then_some(buffer))
    }
}
