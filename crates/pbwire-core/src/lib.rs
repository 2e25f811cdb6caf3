//! # pbwire-core
//!
//! Low-level primitives for the Protocol Buffers wire format.
//!
//! This crate provides the bit-exact codecs a message serializer is built
//! on top of:
//!
//! - [`varint`]: base-128 variable-length integer encoding and decoding
//! - [`zigzag`]: the signed-to-unsigned bijection behind `sint32`/`sint64`
//! - [`fixed`]: little-endian packing of 32/64-bit integers and IEEE-754
//!   floats, correct on both little- and big-endian hosts
//! - [`sink`]: a bounded, append-only byte accumulator for assembling a
//!   message body
//!
//! Schema interpretation, field dispatch, and I/O are deliberately out of
//! scope; a higher-level serializer calls into this crate once per
//! primitive field. Every decode operation is stateless given a buffer
//! and an offset — the caller owns the cursor.
//!
//! ## Example
//!
//! ```
//! use pbwire_core::{varint, zigzag, ByteSink};
//!
//! // Encode field 1 (wire type 0) with the sint64 value -2.
//! let mut sink = ByteSink::default();
//! sink.append(&varint::encode_varint(1 << 3))?;
//! sink.append(&varint::encode_varint(zigzag::zigzag_encode64(-2)))?;
//!
//! let message = sink.into_bytes();
//! assert_eq!(&message[..], &[0x08, 0x03]);
//!
//! // The decode direction advances an explicit offset.
//! let (tag, offset) = varint::decode_varint(&message, 0)?;
//! let (raw, _) = varint::decode_varint(&message, offset)?;
//! assert_eq!(tag >> 3, 1);
//! assert_eq!(zigzag::zigzag_decode64(raw), -2);
//! # Ok::<(), pbwire_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod error;
pub mod fixed;
pub mod sink;
pub mod varint;
pub mod zigzag;

// Re-export primary types for convenience
pub use error::{Error, Result};
pub use fixed::{FixedKind, Scalar};
pub use sink::ByteSink;
pub use varint::MAX_VARINT_LEN;

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
