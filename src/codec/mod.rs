//! Codec module - integer primitives shared by the value encoders.
//!
//! - [`BigEndian`] - fixed-width integers to/from network byte order
//! - [`pack_integer`] - an unsigned value truncated to N big-endian bytes
//!
//! # Example
//!
//! ```
//! use xcb_pack::codec::{pack_integer, BigEndian};
//!
//! assert_eq!(0x0102_u16.to_be_vec(), vec![0x01, 0x02]);
//! assert_eq!(i32::from_be_slice(&[0xFF, 0xFF, 0xFF, 0xFE]), -2);
//! assert_eq!(pack_integer(70_000, 4), vec![0x00, 0x01, 0x11, 0x70]);
//! ```

mod int;
mod pack_integer;

pub use int::BigEndian;
pub use pack_integer::{pack_integer, put_integer};
