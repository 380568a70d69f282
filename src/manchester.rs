//! Manchester Line Coding
//!
//! Bit-level transcoders for the two line codes used by 433 MHz TPMS
//! sensors:
//!
//! - **Manchester**: each data bit becomes a two-bit transition pair,
//!   `0 → 10` and `1 → 01`. The receiver recovers the clock from the
//!   guaranteed mid-pair transition.
//! - **Differential Manchester**: the bit value is carried by the presence
//!   or absence of a mid-symbol transition; every symbol boundary carries a
//!   transition for clocking, so the code survives signal inversion.
//!
//! Encoding is strict: a non-binary input value is an error. Decoding is
//! lenient: a pair that cannot be decoded means the receiver lost symbol
//! sync, which is an ordinary operating condition on noisy captures, so the
//! decoders stop and return the partial output together with the input
//! offset reached. Resynchronization policy is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use tpms_core::manchester::{manchester_encode, manchester_decode};
//!
//! let encoded = manchester_encode(&[1, 0, 1, 1]).unwrap();
//! assert_eq!(encoded, vec![0, 1, 1, 0, 0, 1, 0, 1]);
//!
//! let (decoded, pos) = manchester_decode(&encoded, 0, None);
//! assert_eq!(decoded, vec![1, 0, 1, 1]);
//! assert_eq!(pos, 8);
//! ```

use crate::types::{TpmsError, TpmsResult};

/// Manchester-encode a bit buffer: `0 → [1, 0]`, `1 → [0, 1]`.
///
/// Returns `InvalidSymbol` for any input value other than 0 or 1.
pub fn manchester_encode(bits: &[u8]) -> TpmsResult<Vec<u8>> {
    let mut encoded = Vec::with_capacity(bits.len() * 2);
    for &bit in bits {
        match bit {
            0 => encoded.extend_from_slice(&[1, 0]),
            1 => encoded.extend_from_slice(&[0, 1]),
            other => return Err(TpmsError::InvalidSymbol(other)),
        }
    }
    Ok(encoded)
}

/// Decode a Manchester-encoded bit buffer starting at `start`.
///
/// Consumes pairs; the decoded bit is the pair's second half. A pair with
/// two equal bits means loss of symbol sync: decoding stops immediately and
/// the partial output is returned along with the input offset reached (the
/// offset includes the pair that failed). `max_bits` caps the number of
/// output bits attempted.
pub fn manchester_decode(bits: &[u8], start: usize, max_bits: Option<usize>) -> (Vec<u8>, usize) {
    let mut limit = bits.len();
    if let Some(max) = max_bits {
        limit = limit.min(start + max * 2);
    }

    let mut decoded = Vec::new();
    let mut pos = start;
    while pos + 2 <= limit {
        let first = bits[pos];
        let second = bits[pos + 1];
        pos += 2;
        if first == second {
            break;
        }
        decoded.push(second & 1);
    }
    (decoded, pos)
}

/// Stateful differential Manchester encoder.
///
/// The line level starts high. Every symbol begins with a boundary
/// transition; a `1` adds a mid-symbol transition back to the previous
/// level (level preserved), a `0` holds for the full symbol (level
/// inverted).
#[derive(Debug, Clone)]
pub struct DifferentialManchester {
    level: u8,
}

impl DifferentialManchester {
    /// Create an encoder with the line level at its idle (high) state.
    pub fn new() -> Self {
        Self { level: 1 }
    }

    /// Encode one bit, returning its two-bit symbol.
    pub fn encode_bit(&mut self, bit: u8) -> TpmsResult<[u8; 2]> {
        match bit {
            1 => Ok([self.level ^ 1, self.level]),
            0 => {
                self.level ^= 1;
                Ok([self.level, self.level])
            }
            other => Err(TpmsError::InvalidSymbol(other)),
        }
    }

    /// Encode a bit buffer, two output bits per input bit.
    pub fn encode(&mut self, bits: &[u8]) -> TpmsResult<Vec<u8>> {
        let mut encoded = Vec::with_capacity(bits.len() * 2);
        for &bit in bits {
            encoded.extend_from_slice(&self.encode_bit(bit)?);
        }
        Ok(encoded)
    }

    /// Reset the line level to idle.
    pub fn reset(&mut self) {
        self.level = 1;
    }
}

impl Default for DifferentialManchester {
    fn default() -> Self {
        Self::new()
    }
}

/// Differential-Manchester-encode a bit buffer with the line level starting
/// high.
pub fn differential_manchester_encode(bits: &[u8]) -> TpmsResult<Vec<u8>> {
    DifferentialManchester::new().encode(bits)
}

/// Decode a differential-Manchester-encoded bit buffer starting at `start`.
///
/// Phase-locks on the boundary transition from the idle-high level, then
/// emits 1 for each pair whose bits differ and 0 for each pair whose bits
/// match. A missing boundary transition means loss of sync: decoding stops
/// and the accumulated output is returned with the offset reached.
pub fn differential_manchester_decode(bits: &[u8], start: usize) -> (Vec<u8>, usize) {
    let mut decoded = Vec::new();
    let mut level = 1u8;
    let mut pos = start;

    while pos + 2 <= bits.len() {
        let first = bits[pos] & 1;
        let second = bits[pos + 1] & 1;
        if first == level {
            break;
        }
        pos += 2;
        decoded.push(if first != second { 1 } else { 0 });
        level = second;
    }
    (decoded, pos)
}
