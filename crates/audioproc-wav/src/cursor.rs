//! Bounded forward reader over a borrowed byte slice.

/// A record with a fixed on-disk size that can be decoded from exactly
/// `SIZE` bytes.
///
/// Implementations decode field by field with an explicit byte order rather
/// than overlaying memory, so the result is the same on every host.
pub trait FixedRecord: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Decodes the record from a slice of exactly `Self::SIZE` bytes.
    fn decode(bytes: &[u8]) -> Self;
}

/// Read-only cursor over a caller-owned buffer.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current offset from the start of the buffer.
    ///
    /// May exceed the buffer length after an [`advance`](Self::advance) past
    /// the end.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Decodes a `T` at the current offset and advances past it.
    ///
    /// Returns `None` and leaves the offset untouched if fewer than `T::SIZE`
    /// bytes remain.
    pub fn read_fixed<T: FixedRecord>(&mut self) -> Option<T> {
        self.read_bytes(T::SIZE).map(T::decode)
    }

    /// Borrows the next `len` bytes and advances past them.
    pub fn read_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.remaining() < len {
            return None;
        }
        let start = self.offset;
        self.offset += len;
        Some(&self.data[start..start + len])
    }

    /// Moves the offset forward by `len` bytes without reading.
    pub fn advance(&mut self, len: usize) {
        self.offset = self.offset.saturating_add(len);
    }

    /// Returns a cursor over the first `len` bytes from the current offset,
    /// positioned at the same offset as `self`.
    pub(crate) fn limited(&self, len: usize) -> ByteCursor<'a> {
        let end = self.offset.saturating_add(len).min(self.data.len());
        ByteCursor {
            data: &self.data[..end],
            offset: self.offset,
        }
    }
}
