//! Bit Buffer Utilities
//!
//! Conversions between packed bytes and unpacked bit buffers (one bit value
//! per `u8`, MSB first within each byte), plus the small bit-level edits the
//! packet pipeline needs: inversion, pattern search, and fitting a finished
//! message to an exact bit length.
//!
//! ## Example
//!
//! ```rust
//! use tpms_core::bits::{bytes_to_bits, bits_to_bytes, invert_bits};
//!
//! let bits = bytes_to_bits(&[0x55]);
//! assert_eq!(bits, vec![0, 1, 0, 1, 0, 1, 0, 1]);
//! assert_eq!(bits_to_bytes(&invert_bits(&bits)), vec![0xAA]);
//! ```

/// Unpack bytes to individual bits (MSB first).
pub fn bytes_to_bits(data: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(data.len() * 8);
    for byte in data {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1);
        }
    }
    bits
}

/// Pack individual bits into bytes (MSB first).
///
/// A trailing partial group is packed MSB-aligned with zero fill.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | ((bit & 1) << (7 - i)))
        })
        .collect()
}

/// Invert every bit in a buffer: 0 becomes 1 and 1 becomes 0.
pub fn invert_bits(bits: &[u8]) -> Vec<u8> {
    bits.iter().map(|&b| (b & 1) ^ 1).collect()
}

/// Search for a bit pattern, returning the index of the first match at or
/// after `start`.
pub fn find_pattern(haystack: &[u8], pattern: &[u8], start: usize) -> Option<usize> {
    if pattern.is_empty() || start >= haystack.len() {
        return None;
    }
    haystack[start..]
        .windows(pattern.len())
        .position(|w| w == pattern)
        .map(|pos| start + pos)
}

/// Fit an already-built message to an exact bit length: longer inputs are
/// truncated, shorter ones zero-padded at the tail.
///
/// This targets a raw bit count for duration-matched transmissions, unlike
/// the byte-aligned extended frames built by the packet codec.
pub fn fit_to_bit_length(bits: &[u8], target_bits: usize) -> Vec<u8> {
    let mut out = bits.to_vec();
    if out.len() > target_bits {
        out.truncate(target_bits);
    } else {
        out.resize(target_bits, 0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_bits_msb_first() {
        assert_eq!(bytes_to_bits(&[0x80]), vec![1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(bytes_to_bits(&[0x01]), vec![0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(
            bytes_to_bits(&[0x55, 0x3C]),
            vec![0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0]
        );
    }

    #[test]
    fn test_bits_to_bytes_roundtrip() {
        let data = [0xD9, 0x25, 0x37, 0x56, 0x34, 0x12, 0x19, 0xBC];
        assert_eq!(bits_to_bytes(&bytes_to_bits(&data)), data.to_vec());
    }

    #[test]
    fn test_bits_to_bytes_partial_group() {
        // 4 trailing bits pack MSB-aligned
        assert_eq!(bits_to_bytes(&[1, 0, 1, 1]), vec![0xB0]);
    }

    #[test]
    fn test_invert_bits() {
        assert_eq!(invert_bits(&[0, 1, 1, 0]), vec![1, 0, 0, 1]);
        let bits = bytes_to_bits(&[0x55]);
        assert_eq!(bits_to_bytes(&invert_bits(&bits)), vec![0xAA]);
    }

    #[test]
    fn test_find_pattern() {
        let haystack = [0, 0, 1, 0, 1, 1, 0];
        assert_eq!(find_pattern(&haystack, &[1, 0, 1], 0), Some(2));
        assert_eq!(find_pattern(&haystack, &[1, 0, 1], 3), None);
        assert_eq!(find_pattern(&haystack, &[1, 1], 0), Some(4));
        assert_eq!(find_pattern(&haystack, &[], 0), None);
    }

    #[test]
    fn test_fit_truncates() {
        assert_eq!(fit_to_bit_length(&[1, 1, 1, 1], 2), vec![1, 1]);
    }

    #[test]
    fn test_fit_pads_with_zeros() {
        assert_eq!(fit_to_bit_length(&[1, 1], 5), vec![1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_fit_exact_is_identity() {
        let bits = vec![1, 0, 1];
        assert_eq!(fit_to_bit_length(&bits, 3), bits);
    }
}
