//! FSK IQ Synthesis
//!
//! Converts a (pulse, gap) run-length train into complex baseband samples:
//! pulse widths ride the mark tone, gap widths the space tone. Tones are
//! unit-amplitude complex exponentials, so the waveform keeps a constant
//! envelope until the raised-cosine shaping pass band-limits the hard tone
//! transitions. A stretch of zero samples is appended so the shaped burst
//! decays cleanly instead of cutting off mid-filter.
//!
//! ## Mathematical Definition
//!
//! ```text
//! s(t) = e^(j·2π·f·t),   f ∈ {mark_hz, space_hz}
//! ```
//!
//! Each tone segment spans `width · samples_per_symbol` samples, where
//! `samples_per_symbol = sample_rate · symbol_duration_us · 1e-6`.
//!
//! ## Example
//!
//! ```rust
//! use tpms_core::fsk::FskModulator;
//!
//! let fsk = FskModulator::default();
//! let iq = fsk.generate_iq(&[(1, 1)], 0.0);
//! assert_eq!(iq.len(), 26); // 2 symbols × 13 samples at 250 kHz / 52 µs
//! ```

use crate::pulse_shaping::RaisedCosineFilter;
use crate::types::{complex_ops, IQSample};
use serde::{Deserialize, Serialize};

/// Roll-off factor of the shaping filter.
const SHAPING_ROLLOFF: f64 = 0.35;

/// Length of the shaping filter in taps.
const SHAPING_TAPS: usize = 101;

/// Two-tone FSK modulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FskModulator {
    /// Mark (pulse) tone frequency in Hz, relative to baseband
    pub mark_hz: f64,
    /// Space (gap) tone frequency in Hz, relative to baseband
    pub space_hz: f64,
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Symbol duration in microseconds
    pub symbol_duration_us: f64,
}

impl Default for FskModulator {
    fn default() -> Self {
        Self {
            mark_hz: 35_000.0,
            space_hz: -35_000.0,
            sample_rate: 250_000.0,
            symbol_duration_us: 52.0,
        }
    }
}

impl FskModulator {
    /// Create a modulator with explicit tone and timing parameters.
    pub fn new(mark_hz: f64, space_hz: f64, sample_rate: f64, symbol_duration_us: f64) -> Self {
        Self {
            mark_hz,
            space_hz,
            sample_rate,
            symbol_duration_us,
        }
    }

    /// Samples spanned by one symbol period (fractional).
    pub fn samples_per_symbol(&self) -> f64 {
        self.sample_rate * self.symbol_duration_us * 1e-6
    }

    /// Frequency separation between the two tones in Hz.
    pub fn tone_separation(&self) -> f64 {
        (self.mark_hz - self.space_hz).abs()
    }

    /// Synthesize the IQ buffer for a pulse train.
    ///
    /// For each (pulse, gap) pair, emits `round(pulse · sps)` samples of the
    /// mark tone followed by `round(gap · sps)` samples of the space tone,
    /// each segment's phase ramp starting at zero. The concatenated signal
    /// is convolved with the raised-cosine shaping filter in same-length
    /// mode, then `padding_s` seconds of silence are appended.
    pub fn generate_iq(&self, pulses: &[(usize, usize)], padding_s: f64) -> Vec<IQSample> {
        let sps = self.samples_per_symbol();

        let mut signal = Vec::new();
        for &(pulse, gap) in pulses {
            self.append_tone(&mut signal, self.mark_hz, pulse as f64 * sps);
            self.append_tone(&mut signal, self.space_hz, gap as f64 * sps);
        }

        let shaper = RaisedCosineFilter::new(SHAPING_ROLLOFF, SHAPING_TAPS);
        let mut shaped = shaper.filter_same(&signal);

        let tail = (padding_s * self.sample_rate) as usize;
        shaped.extend(std::iter::repeat(IQSample::new(0.0, 0.0)).take(tail));
        shaped
    }

    /// Append one tone segment of `span` samples (rounded) at `freq`.
    fn append_tone(&self, signal: &mut Vec<IQSample>, freq: f64, span: f64) {
        let count = span.round() as usize;
        signal.reserve(count);
        for n in 0..count {
            signal.push(complex_ops::cis(freq, n, self.sample_rate));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::complex_ops::average_power;
    use approx::assert_relative_eq;

    fn raw_tone_samples(fsk: &FskModulator, pulses: &[(usize, usize)]) -> Vec<IQSample> {
        let sps = fsk.samples_per_symbol();
        let mut signal = Vec::new();
        for &(pulse, gap) in pulses {
            fsk.append_tone(&mut signal, fsk.mark_hz, pulse as f64 * sps);
            fsk.append_tone(&mut signal, fsk.space_hz, gap as f64 * sps);
        }
        signal
    }

    #[test]
    fn test_sample_count_single_pair() {
        let fsk = FskModulator::new(35_000.0, -35_000.0, 250_000.0, 52.0);
        let iq = fsk.generate_iq(&[(1, 1)], 0.0);
        let expected = 2 * (250_000.0_f64 * 52e-6).round() as usize;
        assert_eq!(iq.len(), expected);
        assert_eq!(iq.len(), 26);
    }

    #[test]
    fn test_padding_appends_zeros() {
        let fsk = FskModulator::default();
        let padded = fsk.generate_iq(&[(1, 1)], 0.5);
        let unpadded = fsk.generate_iq(&[(1, 1)], 0.0);
        let tail = (0.5 * fsk.sample_rate) as usize;
        assert_eq!(padded.len(), unpadded.len() + tail);
        for s in &padded[unpadded.len()..] {
            assert_eq!(s.norm_sqr(), 0.0);
        }
    }

    #[test]
    fn test_unit_modulus_before_shaping() {
        let fsk = FskModulator::default();
        let raw = raw_tone_samples(&fsk, &[(3, 2), (1, 4)]);
        for s in &raw {
            assert_relative_eq!(s.norm(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(average_power(&raw), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_widths_scale_sample_count() {
        let fsk = FskModulator::default();
        let narrow = fsk.generate_iq(&[(1, 1)], 0.0);
        let wide = fsk.generate_iq(&[(2, 1)], 0.0);
        let sps = fsk.samples_per_symbol().round() as usize;
        assert_eq!(wide.len() - narrow.len(), sps);
    }

    #[test]
    fn test_empty_pulse_train() {
        let fsk = FskModulator::default();
        assert!(fsk.generate_iq(&[], 0.0).is_empty());
        // padding still applies without an active burst
        assert_eq!(fsk.generate_iq(&[], 0.1).len(), 25_000);
    }

    #[test]
    fn test_segment_phase_starts_at_zero() {
        let fsk = FskModulator::default();
        let raw = raw_tone_samples(&fsk, &[(1, 1)]);
        // first sample of each segment is e^(j·0) = 1
        assert_relative_eq!(raw[0].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(raw[0].im, 0.0, epsilon = 1e-12);
        let sps = fsk.samples_per_symbol().round() as usize;
        assert_relative_eq!(raw[sps].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(raw[sps].im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tone_separation() {
        let fsk = FskModulator::default();
        assert_relative_eq!(fsk.tone_separation(), 70_000.0);
    }
}
