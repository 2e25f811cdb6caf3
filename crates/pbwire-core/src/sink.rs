//! Bounded byte accumulator for assembling encoded messages.
//!
//! A [`ByteSink`] is the scratch buffer a serializer appends encoded
//! fields into, one primitive at a time, before reading the finished
//! message out in one piece. It is append-only apart from an explicit
//! [`clear`](ByteSink::clear), enforces a hard capacity bound chosen at
//! construction, and is owned by exactly one serializer at a time — there
//! is no sharing and no interior mutability.
//!
//! ## Range convention
//!
//! [`slice`](ByteSink::slice) takes 1-based inclusive bounds, so
//! `slice(1, sink.len())` returns the full contents. The convention is
//! inherited from the wire layer's original host environment and kept for
//! drop-in compatibility; `begin == 0` is rejected as out of range.

use crate::error::{Error, Result};
use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

/// Capacity bound used by [`ByteSink::default`], matching the reference
/// wire layer's fixed 64 KiB scratch buffer
pub const DEFAULT_CAPACITY: usize = 65535;

/// A bounded, append-only byte accumulator.
///
/// # Example
///
/// ```
/// use pbwire_core::{varint::encode_varint, ByteSink};
///
/// let mut sink = ByteSink::new(64);
/// sink.append(&encode_varint(300))?;
/// sink.append(&encode_varint(0))?;
/// assert_eq!(sink.as_bytes(), &[0xAC, 0x02, 0x00]);
/// # Ok::<(), pbwire_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ByteSink {
    buf: BytesMut,
    capacity: usize,
}

impl Default for ByteSink {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ByteSink {
    /// Creates an empty sink that will hold at most `capacity` bytes.
    ///
    /// Storage is not reserved up front; the bound is enforced on append.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: BytesMut::new(),
            capacity,
        }
    }

    /// Appends `bytes` to the end of the sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the append would push the
    /// length past the capacity bound. The sink's contents are untouched
    /// on failure.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        if self.buf.len() + bytes.len() > self.capacity {
            debug!(
                len = self.buf.len(),
                additional = bytes.len(),
                capacity = self.capacity,
                "sink append rejected"
            );
            return Err(Error::capacity_exceeded(
                self.buf.len(),
                bytes.len(),
                self.capacity,
            ));
        }
        self.buf.extend_from_slice(bytes);
        trace!(len = self.buf.len(), appended = bytes.len(), "sink append");
        Ok(())
    }

    /// Current length in bytes
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the sink holds no bytes
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The capacity bound this sink was constructed with
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The accumulated contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the sub-range `begin..=end` of the contents, 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `begin` is zero, `begin > end`, or
    /// `end` exceeds the current length.
    pub fn slice(&self, begin: usize, end: usize) -> Result<&[u8]> {
        if begin == 0 || begin > end || end > self.buf.len() {
            return Err(Error::out_of_range(begin, end, self.buf.len()));
        }
        Ok(&self.buf[begin - 1..end])
    }

    /// Resets the length to zero without releasing storage.
    pub fn clear(&mut self) {
        self.buf.clear();
        trace!("sink cleared");
    }

    /// Consumes the sink and freezes its contents as the final message
    /// bytes.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}
