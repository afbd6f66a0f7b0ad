//! Packer configuration.
//!
//! The only knob is how a string that reaches the packer as a raw
//! MessagePack value is written. Strings built with
//! [`XcbValue::tagged`](crate::XcbValue::tagged) always carry the `0xBD`
//! tag; raw strings stay canonical MessagePack unless
//! [`StringMode::Tagged`] is selected.
//!
//! # Example
//!
//! ```
//! use xcb_pack::{PackerConfig, StringMode};
//!
//! let config = PackerConfig::from_json(r#"{"string_mode":"tagged"}"#).unwrap();
//! assert_eq!(config.string_mode, StringMode::Tagged);
//! assert_eq!(PackerConfig::default().string_mode, StringMode::Generic);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XcbError};

/// Environment variable read by [`PackerConfig::from_env`].
pub const STRING_MODE_ENV: &str = "XCB_STRING_MODE";

/// Encoding used for raw MessagePack strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringMode {
    /// Canonical MessagePack str family (fixstr/str8/str16/str32).
    #[default]
    Generic,
    /// `0xBD` tag followed by the unprefixed UTF-8 bytes.
    Tagged,
}

impl FromStr for StringMode {
    type Err = XcbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "tagged" => Ok(Self::Tagged),
            other => Err(XcbError::Config(format!("unknown string mode: {other:?}"))),
        }
    }
}

/// Configuration for [`XcbPacker`](crate::XcbPacker).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackerConfig {
    /// How raw MessagePack strings are encoded.
    pub string_mode: StringMode,
}

impl PackerConfig {
    /// Create the default configuration (generic strings).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the string mode.
    pub fn with_string_mode(mut self, mode: StringMode) -> Self {
        self.string_mode = mode;
        self
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(string_mode = ?config.string_mode, "Loaded packer config from JSON");
        Ok(config)
    }

    /// Build configuration from `XCB_STRING_MODE`.
    ///
    /// Unset or unrecognised values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(STRING_MODE_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let string_mode = match value {
            None => StringMode::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {}", STRING_MODE_ENV, e);
                StringMode::default()
            }),
        };
        tracing::debug!(?string_mode, "Loaded packer config from environment");
        Self { string_mode }
    }
}
