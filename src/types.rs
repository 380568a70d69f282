//! Core types for TPMS waveform synthesis
//!
//! This module defines the fundamental types used throughout the crate,
//! particularly for representing complex I/Q (In-phase/Quadrature) samples.
//!
//! ## Understanding I/Q Samples
//!
//! In Software Defined Radio (SDR), signals are represented as complex numbers
//! where:
//! - **I (In-phase)**: The real component, representing the signal aligned with
//!   a reference carrier
//! - **Q (Quadrature)**: The imaginary component, representing the signal 90°
//!   out of phase with the carrier
//!
//! This representation captures both amplitude AND phase information, which is
//! what lets a two-tone FSK burst be described at baseband and shifted onto the
//! 433 MHz carrier by the transmit hardware.
//!
//! ```text
//!            Q (Imaginary)
//!            ^
//!            |     * (I=0.7, Q=0.7)
//!            |    /
//!            |   / magnitude = 1.0
//!            |  /  phase = 45°
//!            | /
//!   ---------+---------> I (Real)
//!            |
//! ```

use num_complex::Complex64;
use std::f64::consts::PI;

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// A single I/Q sample point
pub type IQSample = Complex64;

/// A buffer of I/Q samples
pub type IQBuffer = Vec<IQSample>;

/// Raw bits, one value (0 or 1) per element
pub type BitStream = Vec<u8>;

/// A run-length pulse train: ordered (pulse_width, gap_width) pairs in
/// symbol-duration units
pub type PulseSequence = Vec<(usize, usize)>;

/// Result type for encoding operations
pub type TpmsResult<T> = Result<T, TpmsError>;

/// Errors that can occur while building a TPMS message.
///
/// Decode-side desynchronization is *not* an error: noisy captures are
/// expected to lose sync, so the line-code decoders return partial output
/// plus the offset reached instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TpmsError {
    #[error("invalid line-code symbol: {0} (bits must be 0 or 1)")]
    InvalidSymbol(u8),

    #[error("extended frame too short: {actual} bytes, minimum {min}")]
    FrameTooShort { min: usize, actual: usize },
}

/// Helper functions for working with complex samples
pub mod complex_ops {
    use super::*;

    /// Create a complex number from magnitude and phase
    #[inline]
    pub fn from_polar(magnitude: f64, phase: f64) -> Complex {
        Complex::new(magnitude * phase.cos(), magnitude * phase.sin())
    }

    /// Generate a complex exponential (cisoid) at given frequency
    ///
    /// This is the fundamental building block for digital signal generation.
    /// Returns e^(j*2*π*f*t) where t = sample_idx / sample_rate
    #[inline]
    pub fn cis(frequency: f64, sample_idx: usize, sample_rate: f64) -> Complex {
        let t = sample_idx as f64 / sample_rate;
        from_polar(1.0, 2.0 * PI * frequency * t)
    }

    /// Compute the average power of a signal
    pub fn average_power(samples: &[IQSample]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().map(|s| s.norm_sqr()).sum::<f64>() / samples.len() as f64
    }
}
