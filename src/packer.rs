//! Packer facade - single entry point for turning values into wire bytes.
//!
//! The packer holds no mutable state, so one instance can be shared
//! across threads and called concurrently.
//!
//! # Example
//!
//! ```
//! use xcb_pack::{pack, XcbValue};
//!
//! let bytes = pack(&XcbValue::FixedInt64(-1)).unwrap();
//! assert_eq!(&bytes[..], &[0xD3, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
//! ```

use bytes::{Bytes, BytesMut};

use crate::config::PackerConfig;
use crate::diag::Hex;
use crate::error::Result;
use crate::value::XcbValue;

/// Encodes [`XcbValue`]s with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct XcbPacker {
    config: PackerConfig,
}

impl XcbPacker {
    /// Packer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Packer with the given configuration.
    pub fn with_config(config: PackerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// Serialize `value` to its wire bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the canonical MessagePack writer fails.
    ///
    /// # Panics
    ///
    /// Panics if a sequence holds more than `u32::MAX` elements.
    pub fn pack(&self, value: &XcbValue) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        value.encode_into(&mut buf, &self.config)?;
        let bytes = buf.freeze();
        tracing::trace!(
            kind = value.kind(),
            len = bytes.len(),
            bytes = %Hex(&bytes),
            "Packed XCB value"
        );
        Ok(bytes)
    }
}

/// Serialize `value` with the default configuration.
///
/// # Errors
///
/// Returns error if the canonical MessagePack writer fails.
pub fn pack(value: &XcbValue) -> Result<Bytes> {
    XcbPacker::new().pack(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StringMode;
    use rmpv::Value;

    #[test]
    fn test_pack_matches_encode() {
        let value = XcbValue::Sequence(vec![
            XcbValue::tagged("build"),
            XcbValue::FixedInt64(7),
            XcbValue::Raw(Value::from(false)),
        ]);
        let expected = value.encode(&PackerConfig::default()).unwrap();
        assert_eq!(pack(&value).unwrap(), expected);
    }

    #[test]
    fn test_packer_uses_its_config() {
        let value = XcbValue::Raw(Value::from("A"));

        let packer = XcbPacker::new();
        assert_eq!(packer.config().string_mode, StringMode::Generic);
        assert_eq!(packer.pack(&value).unwrap(), vec![0xA1, 0x41]);

        let packer =
            XcbPacker::with_config(PackerConfig::new().with_string_mode(StringMode::Tagged));
        assert_eq!(packer.pack(&value).unwrap(), vec![0xBD, 0x41]);
    }

    #[test]
    fn test_pack_is_deterministic() {
        let value: XcbValue = (0..20i64).map(XcbValue::from).collect();
        let first = pack(&value).unwrap();
        let second = pack(&value).unwrap();
        assert_eq!(first, second);
    }
}
