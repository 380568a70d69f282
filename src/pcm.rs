//! Pulse (Run-Length) Encoding
//!
//! Translates a line-coded bit buffer into the (pulse, gap) timing pairs the
//! FSK synthesizer consumes: a maximal run of 1s becomes the pulse width, the
//! following maximal run of 0s becomes the gap width, both in symbol units.
//!
//! Any zero run *preceding the first observed 1* is skipped, not encoded —
//! leading idle time carries no symbol information and is elided. The
//! consequence is that `pulse_decode(pulse_encode(b)) == b` holds for every
//! buffer that does not begin with a zero run.
//!
//! ## Example
//!
//! ```rust
//! use tpms_core::pcm::{pulse_encode, pulse_decode};
//!
//! let bits = [1, 1, 0, 0, 0, 1, 0];
//! let pulses = pulse_encode(&bits);
//! assert_eq!(pulses, vec![(2, 3), (1, 1)]);
//! assert_eq!(pulse_decode(&pulses), bits);
//! ```

use crate::types::PulseSequence;

/// Encode a bit buffer into (pulse, gap) run-length pairs.
///
/// Scans greedily: each pair is a maximal run of 1s followed by the maximal
/// run of 0s after it. A trailing run of 1s yields a pair with a zero-width
/// gap. Non-binary values terminate a run and are skipped like idle time.
pub fn pulse_encode(bits: &[u8]) -> PulseSequence {
    let mut pairs = Vec::new();
    let mut i = 0;
    let n = bits.len();

    while i < n {
        let mut ones = 0;
        while i < n && bits[i] == 1 {
            ones += 1;
            i += 1;
        }
        if ones == 0 {
            // idle before the first pulse; skip
            i += 1;
            continue;
        }

        let mut zeros = 0;
        while i < n && bits[i] == 0 {
            zeros += 1;
            i += 1;
        }

        pairs.push((ones, zeros));
    }
    pairs
}

/// Decode (pulse, gap) pairs back into a bit buffer.
///
/// The structural inverse of [`pulse_encode`]: `pulse` ones then `gap`
/// zeros per pair, concatenated in order.
pub fn pulse_decode(pairs: &[(usize, usize)]) -> Vec<u8> {
    let total: usize = pairs.iter().map(|&(p, g)| p + g).sum();
    let mut bits = Vec::with_capacity(total);
    for &(pulse, gap) in pairs {
        bits.extend(std::iter::repeat(1).take(pulse));
        bits.extend(std::iter::repeat(0).take(gap));
    }
    bits
}
