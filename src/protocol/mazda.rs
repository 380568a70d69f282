//! Mazda TPMS Codec
//!
//! Also matches Abarth-124 sensors. 9-byte frame with a plain XOR trailer
//! instead of a CRC, Manchester line coding with post-encode bit inversion,
//! 24-bit preamble.
//!
//! ## Frame Layout
//!
//! ```text
//! byte 0-3 sensor id, big-endian 32-bit
//! byte 4   flags
//! byte 5   round(kPa / 1.38)
//! byte 6   temperature_c + 50
//! byte 7   extra ("unknown") field
//! byte 8   XOR of bytes 0-7
//! ```

use crate::bits::{bytes_to_bits, invert_bits};
use crate::crc::xor_checksum;
use crate::manchester::manchester_encode;
use crate::protocol::{SensorReading, TpmsProtocol};
use crate::types::{BitStream, TpmsResult};

const PREAMBLE_BYTES: [u8; 3] = [0x55, 0x55, 0x56];
const DEFAULT_FLAGS: u8 = 80;
const DEFAULT_EXTRA: u16 = 1;

/// Codec for the Mazda/Abarth-124 TPMS protocol.
#[derive(Debug, Clone)]
pub struct MazdaProtocol {
    preamble: BitStream,
}

impl MazdaProtocol {
    pub fn new() -> Self {
        Self {
            preamble: bytes_to_bits(&PREAMBLE_BYTES),
        }
    }
}

impl Default for MazdaProtocol {
    fn default() -> Self {
        Self::new()
    }
}

impl TpmsProtocol for MazdaProtocol {
    fn protocol_name(&self) -> &'static str {
        "Mazda"
    }

    fn default_frequency_hz(&self) -> f64 {
        433.92e6
    }

    fn bit_duration_us(&self) -> f64 {
        52.0
    }

    fn preamble_bits(&self) -> &[u8] {
        &self.preamble
    }

    fn create_packet(&self, reading: &SensorReading) -> Vec<u8> {
        let flags = reading.flags.unwrap_or(DEFAULT_FLAGS);
        let extra = reading.extra.unwrap_or(DEFAULT_EXTRA);
        let pressure = (reading.pressure_kpa / 1.38).round() as i64;

        let mut frame = vec![
            (reading.sensor_id >> 24) as u8,
            (reading.sensor_id >> 16) as u8,
            (reading.sensor_id >> 8) as u8,
            reading.sensor_id as u8,
            flags,
            pressure as u8,
            (reading.temperature_c + 50) as u8,
            extra as u8,
        ];
        frame.push(xor_checksum(&frame));
        frame
    }

    fn encode_message(&self, reading: &SensorReading) -> TpmsResult<BitStream> {
        let frame = self.create_packet(reading);
        let encoded = manchester_encode(&bytes_to_bits(&frame))?;
        let body = invert_bits(&encoded);

        let mut message = self.preamble.clone();
        message.extend_from_slice(&body);
        tracing::debug!(
            protocol = "Mazda",
            sensor_id = reading.sensor_id,
            total_bits = message.len(),
            "encoded message"
        );
        Ok(message)
    }
}
