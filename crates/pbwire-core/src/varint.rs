//! Base-128 varint encoding and decoding.
//!
//! Varints are the workhorse of the protobuf wire format: every field tag,
//! every length prefix, and every varint-typed scalar travels as one.
//!
//! ## Encoding
//!
//! An unsigned 64-bit value is split into 7-bit groups, least significant
//! group first. Each group occupies the low 7 bits of an output byte; the
//! high bit is set on every byte except the last ("continuation bit").
//! A value therefore occupies between 1 and [`MAX_VARINT_LEN`] bytes.
//!
//! The encoder always emits the minimal form. The decoder accepts any
//! token of at most [`MAX_VARINT_LEN`] bytes that satisfies the
//! continuation-bit rule, minimal or not.
//!
//! ## Signed values
//!
//! [`encode_signed_varint`] carries protobuf's `int32`/`int64` semantics:
//! a negative value is reinterpreted as its two's-complement bit pattern
//! and encoded as an unsigned value (always 10 bytes on the wire). This is
//! distinct from `sint32`/`sint64`, which zigzag-map first; see the
//! [`zigzag`](crate::zigzag) module.

use crate::error::{Error, Result};
use tracing::trace;

/// Maximum byte length of a varint encoding a 64-bit value
pub const MAX_VARINT_LEN: usize = 10;

/// Encode an unsigned 64-bit value as a varint.
///
/// Infallible; every `u64` has exactly one minimal encoding of 1 to 10
/// bytes.
///
/// # Example
///
/// ```
/// use pbwire_core::varint::encode_varint;
///
/// assert_eq!(encode_varint(0), vec![0x00]);
/// assert_eq!(encode_varint(300), vec![0xAC, 0x02]);
/// ```
pub fn encode_varint(mut value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VARINT_LEN);
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
    out
}

/// Encode a signed 64-bit value as a varint using the raw two's-complement
/// bit pattern (protobuf `int32`/`int64` semantics).
///
/// Negative values always occupy the full 10 bytes. For a compact signed
/// encoding, zigzag-map the value first and use [`encode_varint`].
pub fn encode_signed_varint(value: i64) -> Vec<u8> {
    encode_varint(value as u64)
}

/// Return the byte length of the varint token starting at `offset`,
/// terminating byte included.
///
/// # Errors
///
/// Returns [`Error::MalformedVarint`] if `offset` is at or past the end of
/// `buffer`, if every remaining byte has the continuation bit set, or if
/// the token would exceed [`MAX_VARINT_LEN`] bytes.
pub fn decoded_length(buffer: &[u8], offset: usize) -> Result<usize> {
    let remaining = buffer.get(offset..).unwrap_or(&[]);
    for (i, &byte) in remaining.iter().enumerate() {
        if i >= MAX_VARINT_LEN {
            trace!(offset, "varint scan exceeded {} bytes", MAX_VARINT_LEN);
            return Err(Error::malformed_varint(offset));
        }
        if byte & 0x80 == 0 {
            return Ok(i + 1);
        }
    }
    trace!(offset, "varint scan ran past buffer end");
    Err(Error::malformed_varint(offset))
}

/// Decode the varint at `offset`, returning the value and the offset
/// immediately past the token.
///
/// # Errors
///
/// Returns [`Error::MalformedVarint`] under the same conditions as
/// [`decoded_length`].
///
/// # Example
///
/// ```
/// use pbwire_core::varint::decode_varint;
///
/// let buffer = [0xAC, 0x02, 0x7F];
/// assert_eq!(decode_varint(&buffer, 0)?, (300, 2));
/// assert_eq!(decode_varint(&buffer, 2)?, (127, 3));
/// # Ok::<(), pbwire_core::Error>(())
/// ```
pub fn decode_varint(buffer: &[u8], offset: usize) -> Result<(u64, usize)> {
    let len = decoded_length(buffer, offset)?;
    let mut value: u64 = 0;
    let mut shift = 0;
    for &byte in &buffer[offset..offset + len] {
        value |= ((byte & 0x7F) as u64) << shift;
        shift += 7;
    }
    Ok((value, offset + len))
}

/// Decode the varint at `offset`, reinterpreting the 64-bit pattern as
/// signed (protobuf `int32`/`int64` semantics).
///
/// # Errors
///
/// Returns [`Error::MalformedVarint`] under the same conditions as
/// [`decoded_length`].
pub fn decode_signed_varint(buffer: &[u8], offset: usize) -> Result<(i64, usize)> {
    let (value, next) = decode_varint(buffer, offset)?;
    Ok((value as i64, next))
}

/// Return the raw undecoded byte span of the varint at `offset` and the
/// offset immediately past it.
///
/// Useful when a token (typically a field tag or length prefix) only needs
/// to be skipped or copied verbatim rather than interpreted.
///
/// # Errors
///
/// Returns [`Error::MalformedVarint`] under the same conditions as
/// [`decoded_length`].
pub fn read_raw_varint_token(buffer: &[u8], offset: usize) -> Result<(&[u8], usize)> {
    let len = decoded_length(buffer, offset)?;
    Ok((&buffer[offset..offset + len], offset + len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_encode_boundary_values() {
        assert_eq!(encode_varint(0), vec![0x00]);
        assert_eq!(encode_varint(127), vec![0x7F]);
        assert_eq!(encode_varint(128), vec![0x80, 0x01]);
        assert_eq!(encode_varint(300), vec![0xAC, 0x02]);
    }

    #[test]
    fn test_encode_max_value() {
        let bytes = encode_varint(u64::MAX);
        assert_eq!(
            bytes,
            vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]
        );
        assert_eq!(bytes.len(), MAX_VARINT_LEN);
    }

    #[test]
    fn test_encode_is_minimal() {
        // One byte per 7 significant bits, with zero taking one byte.
        for shift in 0..64 {
            let value = 1u64 << shift;
            assert_eq!(encode_varint(value).len(), shift / 7 + 1);
        }
    }

    #[test]
    fn test_decode_at_offset() {
        let buffer = [0x00, 0x96, 0x01, 0x08];
        assert_eq!(decode_varint(&buffer, 0).unwrap(), (0, 1));
        assert_eq!(decode_varint(&buffer, 1).unwrap(), (150, 3));
        assert_eq!(decode_varint(&buffer, 3).unwrap(), (8, 4));
    }

    #[test]
    fn test_decode_accepts_non_minimal_form() {
        // 1 encoded with a redundant continuation byte still decodes.
        let buffer = [0x81, 0x00];
        assert_eq!(decode_varint(&buffer, 0).unwrap(), (1, 2));
    }

    #[test]
    fn test_decoded_length_errors() {
        assert_eq!(decoded_length(&[], 0), Err(Error::malformed_varint(0)));
        assert_eq!(decoded_length(&[0x00], 1), Err(Error::malformed_varint(1)));
        assert_eq!(decoded_length(&[0x00], 5), Err(Error::malformed_varint(5)));

        // All continuation bits, no terminator.
        let truncated = [0x80, 0x80, 0x80];
        assert_eq!(
            decoded_length(&truncated, 0),
            Err(Error::malformed_varint(0))
        );

        // Terminator present but past the 10-byte maximum.
        let overlong = [0x80u8; 11];
        let mut with_terminator = overlong.to_vec();
        with_terminator.push(0x00);
        assert_eq!(
            decoded_length(&with_terminator, 0),
            Err(Error::malformed_varint(0))
        );
    }

    #[test]
    fn test_decoded_length_at_exact_maximum() {
        let buffer = encode_varint(u64::MAX);
        assert_eq!(decoded_length(&buffer, 0).unwrap(), MAX_VARINT_LEN);
    }

    #[test]
    fn test_signed_negative_takes_ten_bytes() {
        let bytes = encode_signed_varint(-1);
        assert_eq!(bytes.len(), MAX_VARINT_LEN);
        assert_eq!(decode_signed_varint(&bytes, 0).unwrap(), (-1, 10));
    }

    #[test]
    fn test_signed_non_negative_passthrough() {
        assert_eq!(encode_signed_varint(300), encode_varint(300));
        assert_eq!(encode_signed_varint(0), vec![0x00]);
    }

    #[test]
    fn test_read_raw_varint_token() {
        let buffer = [0x08, 0xAC, 0x02, 0x00];
        let (token, next) = read_raw_varint_token(&buffer, 1).unwrap();
        assert_eq!(token, &[0xAC, 0x02]);
        assert_eq!(next, 3);
    }

    proptest! {
        #[test]
        fn prop_varint_roundtrip(value in any::<u64>()) {
            let bytes = encode_varint(value);
            prop_assert!(bytes.len() <= MAX_VARINT_LEN);
            prop_assert_eq!(decode_varint(&bytes, 0).unwrap(), (value, bytes.len()));
        }

        #[test]
        fn prop_signed_varint_roundtrip(value in any::<i64>()) {
            let bytes = encode_signed_varint(value);
            prop_assert_eq!(
                decode_signed_varint(&bytes, 0).unwrap(),
                (value, bytes.len())
            );
        }

        #[test]
        fn prop_roundtrip_with_leading_garbage(value in any::<u64>(), prefix in proptest::collection::vec(any::<u8>(), 0..16)) {
            let mut buffer = prefix.clone();
            buffer.extend_from_slice(&encode_varint(value));
            let (decoded, next) = decode_varint(&buffer, prefix.len()).unwrap();
            prop_assert_eq!(decoded, value);
            prop_assert_eq!(next, buffer.len());
        }

        #[test]
        fn prop_raw_token_matches_encoding(value in any::<u64>()) {
            let bytes = encode_varint(value);
            let (token, next) = read_raw_varint_token(&bytes, 0).unwrap();
            prop_assert_eq!(token, &bytes[..]);
            prop_assert_eq!(next, bytes.len());
        }
    }
}
