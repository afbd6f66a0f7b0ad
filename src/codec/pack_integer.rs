//! Packs an unsigned value into a caller-chosen number of big-endian bytes.
//!
//! Used for the 2- and 4-byte array length prefixes. Bits above the
//! requested width are dropped.

use bytes::BufMut;

/// Pack `value` into exactly `parts` big-endian bytes.
///
/// # Panics
///
/// Panics if `parts` is 0.
///
/// # Example
///
/// ```
/// use xcb_pack::codec::pack_integer;
///
/// assert_eq!(pack_integer(0x0102, 2), vec![0x01, 0x02]);
/// // Truncated to the low 16 bits.
/// assert_eq!(pack_integer(0x0001_0002, 2), vec![0x00, 0x02]);
/// ```
pub fn pack_integer(value: u64, parts: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(parts);
    put_integer(&mut out, value, parts);
    out
}

/// Append `value` as `parts` big-endian bytes to `buf`.
///
/// # Panics
///
/// Panics if `parts` is 0.
pub fn put_integer<B: BufMut>(buf: &mut B, value: u64, parts: usize) {
    assert!(parts > 0, "pack_integer needs at least one part");
    for i in (0..parts).rev() {
        // Shifts past the top of a u64 read as zero.
        let shift = u32::try_from(i.saturating_mul(8)).unwrap_or(u32::MAX);
        buf.put_u8(value.checked_shr(shift).unwrap_or(0) as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_byte_prefix() {
        assert_eq!(pack_integer(15, 2), vec![0x00, 0x0F]);
        assert_eq!(pack_integer(0xFFFF, 2), vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_four_byte_prefix() {
        assert_eq!(pack_integer(70_000, 4), vec![0x00, 0x01, 0x11, 0x70]);
        assert_eq!(pack_integer(0xFFFF_FFFF, 4), vec![0xFF; 4]);
    }

    #[test]
    fn test_truncates_to_low_bytes() {
        assert_eq!(pack_integer(0x0102_0304, 2), vec![0x03, 0x04]);
        assert_eq!(pack_integer(0x1FF, 1), vec![0xFF]);
    }

    #[test]
    fn test_full_width_matches_big_endian() {
        let v = 0x0123_4567_89AB_CDEF_u64;
        assert_eq!(pack_integer(v, 8), v.to_be_bytes().to_vec());
    }

    #[test]
    fn test_wider_than_u64_pads_with_zeros() {
        let packed = pack_integer(0xAABB, 10);
        assert_eq!(packed.len(), 10);
        assert_eq!(&packed[..8], &[0u8; 8]);
        assert_eq!(&packed[8..], &[0xAA, 0xBB]);
    }

    #[test]
    fn test_put_integer_appends() {
        let mut buf = vec![0xDC];
        put_integer(&mut buf, 20, 2);
        assert_eq!(buf, vec![0xDC, 0x00, 0x14]);
    }

    #[test]
    #[should_panic(expected = "at least one part")]
    fn test_zero_parts_panics() {
        let _ = pack_integer(1, 0);
    }
}
