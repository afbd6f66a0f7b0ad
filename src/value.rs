//! XCB values and their wire encodings.
//!
//! XCB is MessagePack with two deviations:
//!
//! ```text
//! ┌──────────────┬──────────────────────────────────────────────┐
//! │ 0xBD         │ tagged string: raw UTF-8, no length, no NUL  │
//! │ 0xD3         │ int64: always 8 big-endian bytes             │
//! │ 0x90 | n     │ fixarray, only for n < 15                    │
//! │ 0xDC / 0xDD  │ array16 / array32 with big-endian count      │
//! │ anything else│ canonical MessagePack                        │
//! └──────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use xcb_pack::{PackerConfig, XcbValue};
//!
//! let value = XcbValue::Sequence(vec![XcbValue::tagged("A"), XcbValue::FixedInt64(1)]);
//! let bytes = value.encode(&PackerConfig::default()).unwrap();
//! assert_eq!(
//!     bytes,
//!     vec![0x92, 0xBD, 0x41, 0xD3, 0, 0, 0, 0, 0, 0, 0, 1]
//! );
//! ```

use bytes::BufMut;
use rmpv::Value;
use serde::Serialize;

use crate::codec::{put_integer, BigEndian};
use crate::config::{PackerConfig, StringMode};
use crate::error::Result;

/// Marker for a tagged string.
pub const TAGGED_STRING_MARKER: u8 = 0xBD;

/// Marker for a full-width signed 64-bit integer.
pub const FIXED_INT64_MARKER: u8 = 0xD3;

/// Fixed-array family prefix; the count lives in the low 4 bits.
pub const FIXARRAY_PREFIX: u8 = 0x90;

/// Array with a 2-byte count.
pub const ARRAY16_MARKER: u8 = 0xDC;

/// Array with a 4-byte count.
pub const ARRAY32_MARKER: u8 = 0xDD;

/// Sequences shorter than this use the fixed-array family.
///
/// MessagePack allows counts up to 15 in a fixarray, but XCB peers
/// expect 15 elements to already use array16.
pub const FIXARRAY_LIMIT: usize = 15;

/// A value that can be written to the XCB wire.
#[derive(Debug, Clone, PartialEq)]
pub enum XcbValue {
    /// Any MessagePack value, written canonically.
    ///
    /// Strings stay canonical unless the packer runs with
    /// [`StringMode::Tagged`].
    Raw(Value),
    /// `0xBD` followed by the UTF-8 bytes, verbatim.
    TaggedString(String),
    /// `0xD3` followed by 8 big-endian bytes, whatever the magnitude.
    FixedInt64(i64),
    /// Native integer, written with the smallest MessagePack int family.
    MachineInt(isize),
    /// Array prefix followed by each element in order.
    Sequence(Vec<XcbValue>),
}

/// Ordered values that make up one outbound message.
pub type XcbResponse = Vec<XcbValue>;

impl XcbValue {
    /// Tagged protocol string.
    pub fn tagged(value: impl Into<String>) -> Self {
        Self::TaggedString(value.into())
    }

    /// Raw value built from any serde-serializable type.
    ///
    /// Structs are written as maps keyed by field name, never as
    /// positional arrays.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be represented as MessagePack.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        // to_vec_named, NOT to_vec: peers expect struct-as-map.
        let bytes = rmp_serde::to_vec_named(value)?;
        let raw = rmpv::decode::read_value(&mut bytes.as_slice())?;
        Ok(Self::Raw(raw))
    }

    /// Short variant name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Raw(_) => "raw",
            Self::TaggedString(_) => "tagged_string",
            Self::FixedInt64(_) => "fixed_int64",
            Self::MachineInt(_) => "machine_int",
            Self::Sequence(_) => "sequence",
        }
    }

    /// Encode into a fresh buffer.
    ///
    /// # Errors
    ///
    /// Returns error if the canonical MessagePack writer fails.
    ///
    /// # Panics
    ///
    /// Panics if a sequence holds more than `u32::MAX` elements.
    pub fn encode(&self, config: &PackerConfig) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode_into(&mut out, config)?;
        Ok(out)
    }

    /// Append the encoding to `buf`.
    ///
    /// # Errors
    ///
    /// Returns error if the canonical MessagePack writer fails.
    ///
    /// # Panics
    ///
    /// Panics if a sequence holds more than `u32::MAX` elements.
    pub fn encode_into<B: BufMut>(&self, buf: &mut B, config: &PackerConfig) -> Result<()> {
        match self {
            Self::Raw(value) => encode_raw(buf, value, config),
            Self::TaggedString(value) => {
                put_tagged_str(buf, value);
                Ok(())
            }
            Self::FixedInt64(value) => {
                buf.put_u8(FIXED_INT64_MARKER);
                buf.put_slice(&value.to_be_vec());
                Ok(())
            }
            Self::MachineInt(value) => encode_raw(buf, &Value::from(*value as i64), config),
            Self::Sequence(items) => {
                put_array_prefix(buf, items.len());
                for item in items {
                    item.encode_into(buf, config)?;
                }
                Ok(())
            }
        }
    }
}

fn encode_raw<B: BufMut>(buf: &mut B, value: &Value, config: &PackerConfig) -> Result<()> {
    if config.string_mode == StringMode::Tagged {
        if let Value::String(s) = value {
            if let Some(text) = s.as_str() {
                put_tagged_str(buf, text);
                return Ok(());
            }
        }
    }
    let mut writer = (&mut *buf).writer();
    rmpv::encode::write_value(&mut writer, value)?;
    Ok(())
}

fn put_tagged_str<B: BufMut>(buf: &mut B, value: &str) {
    buf.put_u8(TAGGED_STRING_MARKER);
    buf.put_slice(value.as_bytes());
}

pub(crate) fn put_array_prefix<B: BufMut>(buf: &mut B, count: usize) {
    assert!(
        u32::try_from(count).is_ok(),
        "sequence of {count} elements exceeds the 32-bit array count"
    );
    if count < FIXARRAY_LIMIT {
        buf.put_u8(FIXARRAY_PREFIX | count as u8);
    } else if count <= 0xFFFF {
        buf.put_u8(ARRAY16_MARKER);
        put_integer(buf, count as u64, 2);
    } else {
        buf.put_u8(ARRAY32_MARKER);
        put_integer(buf, count as u64, 4);
    }
}

impl From<Value> for XcbValue {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl From<i64> for XcbValue {
    fn from(value: i64) -> Self {
        Self::FixedInt64(value)
    }
}

impl From<isize> for XcbValue {
    fn from(value: isize) -> Self {
        Self::MachineInt(value)
    }
}

impl From<Vec<XcbValue>> for XcbValue {
    fn from(items: Vec<XcbValue>) -> Self {
        Self::Sequence(items)
    }
}

impl FromIterator<XcbValue> for XcbValue {
    fn from_iter<I: IntoIterator<Item = XcbValue>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}
