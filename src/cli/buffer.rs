//! Line buffer backing the tokenizer.
//!
//! A bounds-checked write cursor over a caller-supplied byte slice. Every
//! append is a checked operation that reports success or failure; the cursor
//! can never leave the slice. The storage is reused line after line, it is
//! never reallocated.

/// Fixed-capacity byte arena with an explicit write position.
///
/// Owned exclusively by one `CommandInterface`. Content past the cursor is
/// stale and will be overwritten before it is ever read back.
#[derive(Debug)]
pub(crate) struct LineBuffer<'a> {
    bytes: &'a mut [u8],
    head: usize,
}

impl<'a> LineBuffer<'a> {
    pub(crate) fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, head: 0 }
    }

    /// Append one byte at the cursor.
    ///
    /// Returns `true` and advances the cursor on success, `false` with no
    /// state change when the buffer is full. Callers decide whether a failed
    /// record truncates or is an error.
    pub(crate) fn record(&mut self, byte: u8) -> bool {
        match self.bytes.get_mut(self.head) {
            Some(slot) => {
                *slot = byte;
                self.head += 1;
                true
            }
            None => false,
        }
    }

    /// Write the token terminator at the cursor without advancing it.
    ///
    /// When the buffer is exactly full there is no room left, so the final
    /// data byte is overwritten instead and `true` is returned; the caller
    /// shortens the token that lost the byte.
    pub(crate) fn terminate(&mut self) -> bool {
        if self.head == self.bytes.len() {
            if let Some(last) = self.bytes.last_mut() {
                *last = 0;
            }
            true
        } else {
            if let Some(slot) = self.bytes.get_mut(self.head) {
                *slot = 0;
            }
            false
        }
    }

    /// Move the cursor back to the start. The storage is left untouched.
    pub(crate) fn rewind(&mut self) {
        self.head = 0;
    }

    /// Current write position.
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    /// Total capacity of the underlying storage.
    pub(crate) fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// The bytes behind a finalized token.
    ///
    /// Out-of-range spans yield an empty slice rather than a panic.
    pub(crate) fn token(&self, start: usize, len: usize) -> &[u8] {
        self.bytes.get(start..start + len).unwrap_or(&[])
    }
}
