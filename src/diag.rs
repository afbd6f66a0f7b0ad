//! Byte renderings for logs.
//!
//! Not part of the wire format and never parsed back.
//! [`ascii_code_points`] lists the ASCII characters of a string.
//!
//! # Example
//!
//! ```
//! use xcb_pack::diag::{ascii_bytes, hex_bytes};
//!
//! assert_eq!(hex_bytes(&[0xBD, 0x41]), "\\xbd\\x41");
//! assert_eq!(ascii_bytes(&[0xBD, 0x41]), "\\xbdA");
//! ```

use std::fmt;

/// Every byte as `\xNN` (lowercase hex).
pub fn hex_bytes(bytes: &[u8]) -> String {
    Hex(bytes).to_string()
}

/// Bytes in `1..128` as characters, everything else as `\xNN`.
pub fn ascii_bytes(bytes: &[u8]) -> String {
    Ascii(bytes).to_string()
}

/// Code points of the ASCII characters in `text`; others are skipped.
///
/// ```
/// use xcb_pack::diag::ascii_code_points;
///
/// assert_eq!(ascii_code_points("Hé!"), vec![0x48, 0x21]);
/// ```
pub fn ascii_code_points(text: &str) -> Vec<u32> {
    text.chars()
        .filter(char::is_ascii)
        .map(u32::from)
        .collect()
}

/// Lazy [`hex_bytes`] rendering, for log fields.
#[derive(Debug, Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "\\x{b:02x}")?;
        }
        Ok(())
    }
}

/// Lazy [`ascii_bytes`] rendering, for log fields.
#[derive(Debug, Clone, Copy)]
pub struct Ascii<'a>(pub &'a [u8]);

impl fmt::Display for Ascii<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0 {
            if b > 0 && b < 128 {
                write!(f, "{}", char::from(b))?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}
