//! Length-prefixed binary wire codec for passing domain values between
//! worker units.
//!
//! # Format
//!
//! Each field is written as `[length: i32 big-endian][UTF-8 bytes]` with no
//! separator. Field order is fixed per type and is part of the format:
//!
//! - `Uuid`: the hyphenated string form.
//! - `Item`: `id` (hyphenated string) then `name`.
//!
//! Lengths count UTF-8 bytes, not characters. Decoding is a pure function of
//! `(bytes, offset)`: codecs hold no state, so one instance can decode any
//! number of buffers at any position. Malformed prefixes surface as
//! [`DecodeError`] and never read past the end of the buffer.

mod frame;

use bytes::{Bytes, BytesMut};
use uuid::Uuid;

use crate::domain::Item;

pub use frame::LENGTH_PREFIX_BYTES;

/// Faults raised while encoding a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// A field does not fit in a signed 32-bit length prefix.
    #[error("field `{field}` is {len} bytes, longer than an i32 length prefix allows")]
    FieldTooLong { field: &'static str, len: usize },
}

/// Protocol violations detected while decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Fewer than four bytes remain where a length prefix is expected.
    #[error("truncated length prefix for `{field}` at offset {offset}")]
    Truncated { field: &'static str, offset: usize },
    /// The length prefix is negative.
    #[error("negative length {len} for `{field}` at offset {offset}")]
    NegativeLength {
        field: &'static str,
        offset: usize,
        len: i32,
    },
    /// The length prefix points past the end of the buffer.
    #[error("length {len} for `{field}` exceeds the {remaining} bytes remaining")]
    LengthOutOfBounds {
        field: &'static str,
        len: usize,
        remaining: usize,
    },
    /// The field bytes are not valid UTF-8.
    #[error("field `{field}` is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },
    /// The identifier field does not hold a UUID.
    #[error("field `{field}` is not a UUID: {value}")]
    InvalidUuid { field: &'static str, value: String },
    /// A whole-message decode left unread bytes behind.
    #[error("message decoded after {consumed} of {total} bytes")]
    TrailingBytes { consumed: usize, total: usize },
}

/// Symmetric encoder/decoder for one wire type.
///
/// # Examples
/// ```
/// use item_service::codec::{ItemCodec, WireCodec};
/// use item_service::domain::Item;
///
/// let item = Item::from_name("widget").expect("valid name");
/// let bytes = ItemCodec.encode_to_bytes(&item).expect("encodes");
/// assert_eq!(ItemCodec.decode_exact(&bytes).expect("decodes"), item);
/// ```
pub trait WireCodec<T> {
    /// Append the encoding of `value` to `buf`.
    ///
    /// # Errors
    /// Returns [`EncodeError::FieldTooLong`] when a field cannot be framed.
    fn encode(&self, value: &T, buf: &mut BytesMut) -> Result<(), EncodeError>;

    /// Decode one value starting at `offset`.
    ///
    /// Returns the value and the offset of the first byte after it.
    ///
    /// # Errors
    /// Returns a [`DecodeError`] describing the first protocol violation.
    fn decode(&self, bytes: &[u8], offset: usize) -> Result<(T, usize), DecodeError>;

    /// Encode `value` into a standalone message.
    ///
    /// # Errors
    /// See [`WireCodec::encode`].
    fn encode_to_bytes(&self, value: &T) -> Result<Bytes, EncodeError> {
        let mut buf = BytesMut::new();
        self.encode(value, &mut buf)?;
        Ok(buf.freeze())
    }

    /// Decode a standalone message, rejecting leading offsets and trailing
    /// bytes.
    ///
    /// # Errors
    /// Returns [`DecodeError::TrailingBytes`] when the message is followed by
    /// unread data, or any error from [`WireCodec::decode`].
    fn decode_exact(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        let (value, consumed) = self.decode(bytes, 0)?;
        if consumed != bytes.len() {
            return Err(DecodeError::TrailingBytes {
                consumed,
                total: bytes.len(),
            });
        }
        Ok(value)
    }
}

/// Codec for a bare [`Uuid`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidCodec;

/// Codec for an [`Item`] record.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemCodec;

const ID_FIELD: &str = "id";
const NAME_FIELD: &str = "name";

fn decode_uuid(bytes: &[u8], offset: usize) -> Result<(Uuid, usize), DecodeError> {
    let (raw, next) = frame::read_str(bytes, offset, ID_FIELD)?;
    let id = Uuid::parse_str(raw).map_err(|_| DecodeError::InvalidUuid {
        field: ID_FIELD,
        value: raw.to_owned(),
    })?;
    Ok((id, next))
}

impl WireCodec<Uuid> for UuidCodec {
    fn encode(&self, value: &Uuid, buf: &mut BytesMut) -> Result<(), EncodeError> {
        frame::put_str(buf, ID_FIELD, &value.hyphenated().to_string())
    }

    fn decode(&self, bytes: &[u8], offset: usize) -> Result<(Uuid, usize), DecodeError> {
        decode_uuid(bytes, offset)
    }
}

impl WireCodec<Item> for ItemCodec {
    fn encode(&self, value: &Item, buf: &mut BytesMut) -> Result<(), EncodeError> {
        // Validate before writing so a failed encode leaves `buf` untouched.
        frame::length_prefix(NAME_FIELD, value.name())?;
        frame::put_str(buf, ID_FIELD, &value.id().hyphenated().to_string())?;
        frame::put_str(buf, NAME_FIELD, value.name())
    }

    fn decode(&self, bytes: &[u8], offset: usize) -> Result<(Item, usize), DecodeError> {
        let (id, name_offset) = decode_uuid(bytes, offset)?;
        let (name, next) = frame::read_str(bytes, name_offset, NAME_FIELD)?;
        Ok((Item::new(id, name), next))
    }
}
