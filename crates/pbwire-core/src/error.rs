//! Error types for the pbwire-core library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! detailed error variants for each failure mode the wire codec can report.

use thiserror::Error;

/// Result type alias for pbwire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all pbwire-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Varint continuation-bit scan ran past the buffer end or past the
    /// 10-byte maximum for a 64-bit value
    #[error("malformed varint at offset {offset}: no terminating byte within bounds")]
    MalformedVarint {
        /// Byte offset where the varint token starts
        offset: usize,
    },

    /// A sink append would push the length past the configured capacity
    #[error("sink capacity exceeded: length {len} + {additional} bytes > capacity {capacity}")]
    CapacityExceeded {
        /// Current sink length in bytes
        len: usize,
        /// Number of bytes the rejected append carried
        additional: usize,
        /// Configured capacity bound
        capacity: usize,
    },

    /// Slice bounds fall outside the sink's current contents
    #[error("slice range {begin}..={end} out of range for sink of length {len}")]
    OutOfRange {
        /// Requested 1-based start position
        begin: usize,
        /// Requested 1-based end position (inclusive)
        end: usize,
        /// Current sink length in bytes
        len: usize,
    },

    /// Unrecognized fixed-width format tag
    #[error("unsupported fixed-width kind tag: {}", format_tag(.tag))]
    UnsupportedKind {
        /// The raw tag byte that failed to parse
        tag: u8,
    },
}

impl Error {
    /// Creates a new malformed varint error
    pub fn malformed_varint(offset: usize) -> Self {
        Self::MalformedVarint { offset }
    }

    /// Creates a new capacity exceeded error
    pub fn capacity_exceeded(len: usize, additional: usize, capacity: usize) -> Self {
        Self::CapacityExceeded {
            len,
            additional,
            capacity,
        }
    }

    /// Creates a new out of range error
    pub fn out_of_range(begin: usize, end: usize, len: usize) -> Self {
        Self::OutOfRange { begin, end, len }
    }

    /// Creates a new unsupported kind error
    pub fn unsupported_kind(tag: u8) -> Self {
        Self::UnsupportedKind { tag }
    }
}

/// Render a format tag byte for display, falling back to hex for
/// non-printable bytes
fn format_tag(tag: &u8) -> String {
    if tag.is_ascii_graphic() {
        format!("'{}'", *tag as char)
    } else {
        format!("0x{tag:02X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_contains_offsets() {
        let err = Error::malformed_varint(42);
        assert!(err.to_string().contains("offset 42"));

        let err = Error::capacity_exceeded(10, 5, 12);
        assert!(err.to_string().contains("capacity 12"));
    }

    #[test]
    fn test_unsupported_kind_display() {
        assert!(Error::unsupported_kind(b'x').to_string().contains("'x'"));
        assert!(Error::unsupported_kind(0x01).to_string().contains("0x01"));
    }
}
