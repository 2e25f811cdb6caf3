//! Fixed-width little-endian packing and unpacking.
//!
//! Protobuf's `fixed32`/`fixed64` wire types carry 32- and 64-bit integers
//! and IEEE-754 floats as raw little-endian byte spans, whatever the host
//! byte order. All byte-order handling funnels through
//! `to_le_bytes`/`from_le_bytes`, so a big-endian host swaps in exactly one
//! place on each path and a little-endian host copies straight through.
//!
//! Floats are reinterpreted bit-for-bit, never numerically converted, so
//! `-0.0`, subnormals, and NaN payloads survive a round trip.
//!
//! ## Truncated input
//!
//! [`unpack`] never fails on short input: missing high-order bytes are
//! zero-padded and a best-effort value is returned. Callers that probe an
//! incomplete buffer get a value instead of a fault; callers that need
//! strict framing validate lengths before calling.

use crate::error::{Error, Result};

/// The six fixed-width representations the codec understands.
///
/// Each kind carries the single-byte format tag used by the wire layer
/// (`'i'`, `'I'`, `'f'`, `'q'`, `'Q'`, `'d'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FixedKind {
    /// Signed 32-bit integer (`sfixed32`)
    Int32 = b'i',
    /// Unsigned 32-bit integer (`fixed32`)
    Uint32 = b'I',
    /// IEEE-754 single-precision float (`float`)
    Float = b'f',
    /// Signed 64-bit integer (`sfixed64`)
    Int64 = b'q',
    /// Unsigned 64-bit integer (`fixed64`)
    Uint64 = b'Q',
    /// IEEE-754 double-precision float (`double`)
    Double = b'd',
}

impl TryFrom<u8> for FixedKind {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            b'i' => Ok(FixedKind::Int32),
            b'I' => Ok(FixedKind::Uint32),
            b'f' => Ok(FixedKind::Float),
            b'q' => Ok(FixedKind::Int64),
            b'Q' => Ok(FixedKind::Uint64),
            b'd' => Ok(FixedKind::Double),
            _ => Err(Error::unsupported_kind(tag)),
        }
    }
}

impl FixedKind {
    /// The wire width of this kind in bytes (4 or 8)
    pub fn width(&self) -> usize {
        match self {
            FixedKind::Int32 | FixedKind::Uint32 | FixedKind::Float => 4,
            FixedKind::Int64 | FixedKind::Uint64 | FixedKind::Double => 8,
        }
    }

    /// The single-byte format tag for this kind
    pub fn tag(&self) -> u8 {
        *self as u8
    }
}

/// A scalar value of one of the six fixed-width representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// Signed 32-bit integer
    I32(i32),
    /// Unsigned 32-bit integer
    U32(u32),
    /// Single-precision float
    F32(f32),
    /// Signed 64-bit integer
    I64(i64),
    /// Unsigned 64-bit integer
    U64(u64),
    /// Double-precision float
    F64(f64),
}

impl Scalar {
    /// Numeric value as `i32` (saturating/truncating cast across widths)
    pub fn as_i32(self) -> i32 {
        match self {
            Scalar::I32(v) => v,
            Scalar::U32(v) => v as i32,
            Scalar::F32(v) => v as i32,
            Scalar::I64(v) => v as i32,
            Scalar::U64(v) => v as i32,
            Scalar::F64(v) => v as i32,
        }
    }

    /// Numeric value as `u32`
    pub fn as_u32(self) -> u32 {
        match self {
            Scalar::I32(v) => v as u32,
            Scalar::U32(v) => v,
            Scalar::F32(v) => v as u32,
            Scalar::I64(v) => v as u32,
            Scalar::U64(v) => v as u32,
            Scalar::F64(v) => v as u32,
        }
    }

    /// Numeric value as `f32`
    pub fn as_f32(self) -> f32 {
        match self {
            Scalar::I32(v) => v as f32,
            Scalar::U32(v) => v as f32,
            Scalar::F32(v) => v,
            Scalar::I64(v) => v as f32,
            Scalar::U64(v) => v as f32,
            Scalar::F64(v) => v as f32,
        }
    }

    /// Numeric value as `i64`
    pub fn as_i64(self) -> i64 {
        match self {
            Scalar::I32(v) => v as i64,
            Scalar::U32(v) => v as i64,
            Scalar::F32(v) => v as i64,
            Scalar::I64(v) => v,
            Scalar::U64(v) => v as i64,
            Scalar::F64(v) => v as i64,
        }
    }

    /// Numeric value as `u64`
    pub fn as_u64(self) -> u64 {
        match self {
            Scalar::I32(v) => v as u64,
            Scalar::U32(v) => v as u64,
            Scalar::F32(v) => v as u64,
            Scalar::I64(v) => v as u64,
            Scalar::U64(v) => v,
            Scalar::F64(v) => v as u64,
        }
    }

    /// Numeric value as `f64`
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::I32(v) => v as f64,
            Scalar::U32(v) => v as f64,
            Scalar::F32(v) => v as f64,
            Scalar::I64(v) => v as f64,
            Scalar::U64(v) => v as f64,
            Scalar::F64(v) => v,
        }
    }
}

/// Pack `value` into the little-endian wire form of `kind`.
///
/// The value is first cast to the kind's representation (so packing a
/// `Scalar::F64` as [`FixedKind::Int32`] truncates numerically), then its
/// bytes are emitted least-significant first. 4 bytes for the 32-bit
/// kinds, 8 for the 64-bit kinds.
///
/// # Example
///
/// ```
/// use pbwire_core::fixed::{pack, FixedKind, Scalar};
///
/// assert_eq!(pack(FixedKind::Uint32, Scalar::U32(1)), vec![1, 0, 0, 0]);
/// ```
pub fn pack(kind: FixedKind, value: Scalar) -> Vec<u8> {
    match kind {
        FixedKind::Int32 => value.as_i32().to_le_bytes().to_vec(),
        FixedKind::Uint32 => value.as_u32().to_le_bytes().to_vec(),
        FixedKind::Float => value.as_f32().to_le_bytes().to_vec(),
        FixedKind::Int64 => value.as_i64().to_le_bytes().to_vec(),
        FixedKind::Uint64 => value.as_u64().to_le_bytes().to_vec(),
        FixedKind::Double => value.as_f64().to_le_bytes().to_vec(),
    }
}

/// Unpack the value of `kind` from the little-endian bytes at `offset`.
///
/// Reads up to `kind.width()` bytes. If fewer remain, the missing
/// high-order bytes are treated as zero and a best-effort value is
/// returned; truncation is deliberately not an error here (see the module
/// docs). Floats are rebuilt from the raw bit pattern.
pub fn unpack(kind: FixedKind, buffer: &[u8], offset: usize) -> Scalar {
    match kind {
        FixedKind::Int32 => Scalar::I32(i32::from_le_bytes(read_span(buffer, offset))),
        FixedKind::Uint32 => Scalar::U32(u32::from_le_bytes(read_span(buffer, offset))),
        FixedKind::Float => Scalar::F32(f32::from_le_bytes(read_span(buffer, offset))),
        FixedKind::Int64 => Scalar::I64(i64::from_le_bytes(read_span(buffer, offset))),
        FixedKind::Uint64 => Scalar::U64(u64::from_le_bytes(read_span(buffer, offset))),
        FixedKind::Double => Scalar::F64(f64::from_le_bytes(read_span(buffer, offset))),
    }
}

/// Copy up to `N` bytes from `buffer[offset..]`, zero-padding the tail.
fn read_span<const N: usize>(buffer: &[u8], offset: usize) -> [u8; N] {
    let mut span = [0u8; N];
    let remaining = buffer.get(offset..).unwrap_or(&[]);
    let take = remaining.len().min(N);
    span[..take].copy_from_slice(&remaining[..take]);
    span
}
