//! Big-endian conversion for fixed-width integers.
//!
//! Conversion is done with shifts and masks so the byte order never
//! depends on the host.

use crate::error::{Result, XcbError};

/// A fixed-width integer that converts to and from exactly `WIDTH`
/// big-endian bytes.
pub trait BigEndian: Sized + Copy {
    /// Width of the integer in bytes.
    const WIDTH: usize;

    /// Most-significant byte first, always `WIDTH` bytes long.
    fn to_be_vec(self) -> Vec<u8>;

    /// Rebuild the integer from exactly `WIDTH` big-endian bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != WIDTH`.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Like [`from_be_slice`](Self::from_be_slice) but reports a
    /// mis-sized buffer instead of panicking.
    fn try_from_be_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::WIDTH {
            return Err(XcbError::LengthMismatch {
                expected: Self::WIDTH,
                actual: bytes.len(),
            });
        }
        Ok(Self::from_be_slice(bytes))
    }
}

macro_rules! impl_big_endian {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl BigEndian for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();

            #[inline]
            fn to_be_vec(self) -> Vec<u8> {
                let bits = self as $u;
                (0..Self::WIDTH)
                    .rev()
                    .map(|i| (bits >> (8 * i)) as u8)
                    .collect()
            }

            #[inline]
            fn from_be_slice(bytes: &[u8]) -> Self {
                assert_eq!(
                    bytes.len(),
                    Self::WIDTH,
                    "{} needs exactly {} bytes",
                    stringify!($t),
                    Self::WIDTH
                );
                bytes
                    .iter()
                    .fold(0 as $u, |acc, &b| acc.checked_shl(8).unwrap_or(0) | <$u>::from(b))
                    as $t
            }
        }
    )*};
}

impl_big_endian! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}
