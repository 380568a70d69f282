//! TPMS Protocol Codecs
//!
//! This module provides the common seam for per-manufacturer TPMS packet
//! codecs: each codec packs a [`SensorReading`] into its fixed-layout byte
//! frame, seals it with the protocol's checksum, line-codes the frame, and
//! prepends the synchronization preamble verbatim.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     TpmsProtocol Trait                          │
//! │ ┌──────────────┐ ┌───────────────┐ ┌──────────────────────┐     │
//! │ │create_packet │ │encode_message │ │pulse_encode_message  │     │
//! │ └──────────────┘ └───────────────┘ └──────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!        ┌─────────────────────┼─────────────────────┐
//!        ▼                     ▼                     ▼
//! ┌─────────────┐       ┌─────────────┐       ┌─────────────┐
//! │   Renault   │       │    Mazda    │       │   Toyota    │
//! │ (Manchester │       │ (Manchester │       │ (diff. Man- │
//! │  inverted)  │       │  inverted)  │       │  chester)   │
//! └─────────────┘       └─────────────┘       └─────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tpms_core::protocol::{ProtocolFactory, SensorReading};
//!
//! let codec = ProtocolFactory::create("renault").unwrap();
//! let reading = SensorReading::new(0x123456, 220.0, 25);
//! let bits = codec.encode_message(&reading).unwrap();
//! assert_eq!(bits.len(), 176);
//! ```

pub mod mazda;
pub mod renault;
pub mod toyota;

pub use mazda::MazdaProtocol;
pub use renault::RenaultProtocol;
pub use toyota::ToyotaProtocol;

use crate::pcm::pulse_encode;
use crate::types::{BitStream, PulseSequence, TpmsResult};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One semantic sensor broadcast: the values a real TPMS sensor would
/// report, before any packing.
///
/// Consumed immutably; one reading per encode call. Out-of-range values are
/// not rejected — field packing wraps modulo field width, which is what lets
/// fuzz campaigns probe the packing edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Sensor identifier (24-bit for little-endian protocols, up to 32-bit
    /// for big-endian ones)
    pub sensor_id: u32,
    /// Tire pressure in kPa
    pub pressure_kpa: f64,
    /// Temperature in degrees Celsius
    pub temperature_c: i32,
    /// Protocol-specific flags byte; `None` selects the protocol default
    pub flags: Option<u8>,
    /// Protocol-specific extra field; `None` selects the protocol default
    pub extra: Option<u16>,
}

impl SensorReading {
    /// Create a reading with default flags and extra field.
    pub fn new(sensor_id: u32, pressure_kpa: f64, temperature_c: i32) -> Self {
        Self {
            sensor_id,
            pressure_kpa,
            temperature_c,
            flags: None,
            extra: None,
        }
    }

    /// Override the protocol's default flags byte.
    pub fn with_flags(mut self, flags: u8) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Override the protocol's default extra field.
    pub fn with_extra(mut self, extra: u16) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// Padding policy for extended (arbitrary-length) frames.
///
/// A closed set, dispatched at construction time: an unsupported policy is
/// unrepresentable rather than a runtime string mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddingPolicy {
    /// Cycle the 8 original data bytes
    Repeat,
    /// Fill with 0x00
    Zero,
    /// Pseudo-random fill, seeded by the sensor id for reproducibility
    Random,
    /// Cycle a caller-supplied byte list (an empty list behaves as `[0x00]`)
    Custom(Vec<u8>),
}

/// Common interface of the per-manufacturer packet codecs.
///
/// Variants are selected by tag through [`ProtocolFactory`]; the trait
/// object carries everything the transmit layer needs (carrier, symbol
/// timing) alongside the encode operations.
pub trait TpmsProtocol: Debug + Send + Sync {
    /// Protocol name, e.g. "Renault"
    fn protocol_name(&self) -> &'static str;

    /// Default carrier frequency in Hz
    fn default_frequency_hz(&self) -> f64;

    /// Nominal over-the-air symbol duration in microseconds
    fn bit_duration_us(&self) -> f64;

    /// Synchronization preamble, as raw bits; transmitted verbatim, never
    /// line-coded
    fn preamble_bits(&self) -> &[u8];

    /// Pack a reading into the protocol's byte frame, checksum included as
    /// the final byte.
    fn create_packet(&self, reading: &SensorReading) -> Vec<u8>;

    /// Build the complete transmit bit stream: preamble plus the line-coded
    /// frame.
    fn encode_message(&self, reading: &SensorReading) -> TpmsResult<BitStream>;

    /// Run-length encode a finished bit stream for the FSK synthesizer.
    fn pulse_encode_message(&self, bits: &[u8]) -> PulseSequence {
        pulse_encode(bits)
    }
}

/// Factory for creating protocol codecs by tag.
pub struct ProtocolFactory;

impl ProtocolFactory {
    /// List all supported protocol tags.
    pub fn list() -> Vec<&'static str> {
        vec!["Renault", "Mazda", "Toyota"]
    }

    /// Create a codec by tag (case-insensitive). Returns `None` for an
    /// unknown tag.
    pub fn create(name: &str) -> Option<Box<dyn TpmsProtocol>> {
        match name.to_ascii_lowercase().as_str() {
            "renault" => Some(Box::new(RenaultProtocol::new())),
            "mazda" => Some(Box::new(MazdaProtocol::new())),
            "toyota" => Some(Box::new(ToyotaProtocol::new())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_list() {
        let tags = ProtocolFactory::list();
        assert_eq!(tags.len(), 3);
        assert!(tags.contains(&"Renault"));
        assert!(tags.contains(&"Toyota"));
    }

    #[test]
    fn test_factory_create_case_insensitive() {
        for tag in ["renault", "RENAULT", "Mazda", "toyota"] {
            let codec = ProtocolFactory::create(tag);
            assert!(codec.is_some(), "tag {tag} should resolve");
        }
        assert!(ProtocolFactory::create("citroen").is_none());
    }

    #[test]
    fn test_factory_codecs_share_symbol_timing() {
        for tag in ProtocolFactory::list() {
            let codec = ProtocolFactory::create(tag).unwrap();
            assert_eq!(codec.bit_duration_us(), 52.0);
            assert_eq!(codec.default_frequency_hz(), 433.92e6);
        }
    }

    #[test]
    fn test_reading_builder() {
        let reading = SensorReading::new(0xABCDEF, 200.0, 20)
            .with_flags(0x12)
            .with_extra(0x3456);
        assert_eq!(reading.flags, Some(0x12));
        assert_eq!(reading.extra, Some(0x3456));
    }

    #[test]
    fn test_pulse_encode_default_impl() {
        let codec = ProtocolFactory::create("mazda").unwrap();
        let pulses = codec.pulse_encode_message(&[1, 1, 0, 1]);
        assert_eq!(pulses, vec![(2, 1), (1, 0)]);
    }
}
