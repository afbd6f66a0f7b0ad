//! # xcb-pack
//!
//! Encoder for the XCB build-service wire protocol.
//!
//! XCB is MessagePack-derived but not spec-compliant: strings sent as
//! protocol strings carry a `0xBD` tag with no length prefix, and 64-bit
//! integers are always written as `0xD3` plus 8 big-endian bytes. All other
//! values are plain MessagePack.
//!
//! ## Architecture
//!
//! - **Codec**: big-endian integer conversion and length packing
//! - **Value**: [`XcbValue`], one variant per wire shape
//! - **Packer**: [`pack`] / [`XcbPacker`], the single entry point
//!
//! Encoding only; there is no decoder.
//!
//! ## Example
//!
//! ```
//! use xcb_pack::{pack, XcbValue};
//!
//! let message = XcbValue::Sequence(vec![
//!     XcbValue::tagged("CREATE_SESSION"),
//!     XcbValue::MachineInt(5),
//!     XcbValue::FixedInt64(5),
//! ]);
//! let bytes = pack(&message).unwrap();
//! assert_eq!(bytes[0], 0x93);
//! ```

pub mod codec;
pub mod config;
pub mod diag;
pub mod error;

mod packer;
mod value;

pub use config::{PackerConfig, StringMode};
pub use error::{Result, XcbError};
pub use packer::{pack, XcbPacker};
pub use value::{
    XcbResponse, XcbValue, ARRAY16_MARKER, ARRAY32_MARKER, FIXARRAY_LIMIT, FIXARRAY_PREFIX,
    FIXED_INT64_MARKER, TAGGED_STRING_MARKER,
};

/// Re-export of the MessagePack value type wrapped by [`XcbValue::Raw`].
pub use rmpv::Value as MsgPackValue;
