//! The refill buffer backing a parse.
//!
//! All event payloads the parser hands to a handler are sub-slices of this
//! buffer. The buffer is filled with one `read` per refill; the unconsumed
//! suffix is preserved by copying it to the buffer start first, so a scanner
//! that could not find its terminator can retry over a longer view after a
//! single refill.

use std::io::{self, ErrorKind, Read};

/// Minimum window the driver keeps available before parsing the next
/// production. Productions shorter than this never straddle a refill.
pub(crate) const BLOCK_SIZE: usize = 4096;

/// Total buffer capacity. The last `BLOCK_SIZE` bytes are reserved headroom
/// that is never written, so a refill always reads in whole-block multiples.
pub(crate) const BUFFER_SIZE: usize = 16 * 16 * BLOCK_SIZE;

/// Fixed-capacity byte storage with a window over the unconsumed suffix.
///
/// `start..end` is the unconsumed window; `end` never exceeds
/// `BUFFER_SIZE - BLOCK_SIZE`.
pub(crate) struct RefillBuffer {
    buf: Box<[u8]>,
    start: usize,
    end: usize,
}

impl RefillBuffer {
    pub(crate) fn new() -> Self {
        Self {
            buf: vec![0; BUFFER_SIZE].into_boxed_slice(),
            start: 0,
            end: 0,
        }
    }

    /// The unconsumed view. Slices taken from it are invalidated by the next
    /// [`refill`](Self::refill).
    #[inline]
    pub(crate) fn view(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    /// Narrows the view from the front by `n` bytes.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.end - self.start);
        self.start += n;
    }

    /// Absolute offset of the view start. Together with [`slice`](Self::slice)
    /// this lets the driver re-derive a name slice after consuming past it,
    /// as long as no refill happened in between.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.start
    }

    /// A slice by absolute offsets, valid until the next refill.
    #[inline]
    pub(crate) fn slice(&self, start: usize, len: usize) -> &[u8] {
        &self.buf[start..start + len]
    }

    pub(crate) fn reset(&mut self) {
        self.start = 0;
        self.end = 0;
    }

    /// Copies the unconsumed suffix to the buffer start and performs one
    /// `read` into the remaining window. Returns the number of bytes read;
    /// 0 means end-of-input (or a window already full, in which case the
    /// caller's retry fails with its unterminated-production error).
    pub(crate) fn refill<R: Read>(&mut self, reader: &mut R) -> io::Result<usize> {
        self.buf.copy_within(self.start..self.end, 0);
        self.end -= self.start;
        self.start = 0;

        let limit = self.buf.len() - BLOCK_SIZE;
        let read = loop {
            match reader.read(&mut self.buf[self.end..limit]) {
                Ok(n) => break n,
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        self.end += read;
        Ok(read)
    }
}
