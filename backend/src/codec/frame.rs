//! Field framing shared by every wire codec.

use bytes::{Buf, BufMut, BytesMut};

use super::{DecodeError, EncodeError};

/// Size of the big-endian `i32` length prefix preceding each field.
pub const LENGTH_PREFIX_BYTES: usize = 4;

/// Compute the length prefix for `value`.
pub(super) fn length_prefix(field: &'static str, value: &str) -> Result<i32, EncodeError> {
    i32::try_from(value.len()).map_err(|_| EncodeError::FieldTooLong {
        field,
        len: value.len(),
    })
}

/// Append `[len][bytes]` for `value`.
pub(super) fn put_str(
    buf: &mut BytesMut,
    field: &'static str,
    value: &str,
) -> Result<(), EncodeError> {
    let len = length_prefix(field, value)?;
    buf.reserve(LENGTH_PREFIX_BYTES + value.len());
    buf.put_i32(len);
    buf.put_slice(value.as_bytes());
    Ok(())
}

/// Read one `[len][bytes]` field starting at `offset`.
///
/// Returns the field text and the offset just past it.
pub(super) fn read_str<'a>(
    bytes: &'a [u8],
    offset: usize,
    field: &'static str,
) -> Result<(&'a str, usize), DecodeError> {
    let mut cursor = bytes
        .get(offset..)
        .ok_or(DecodeError::Truncated { field, offset })?;
    if cursor.remaining() < LENGTH_PREFIX_BYTES {
        return Err(DecodeError::Truncated { field, offset });
    }

    let raw_len = cursor.get_i32();
    let len = usize::try_from(raw_len).map_err(|_| DecodeError::NegativeLength {
        field,
        offset,
        len: raw_len,
    })?;
    let body = cursor.get(..len).ok_or(DecodeError::LengthOutOfBounds {
        field,
        len,
        remaining: cursor.len(),
    })?;
    let text = std::str::from_utf8(body).map_err(|_| DecodeError::InvalidUtf8 { field })?;

    Ok((text, offset + LENGTH_PREFIX_BYTES + len))
}
