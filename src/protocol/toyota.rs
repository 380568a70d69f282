//! Toyota TPMS Codec
//!
//! 9-byte frame, CRC-8 trailer (poly 0x07, init 0x80), differential
//! Manchester line coding. The body is preceded by a two-bit start marker,
//! and the 16-bit preamble goes in front of both.
//!
//! ## Frame Layout
//!
//! ```text
//! byte 0-3 sensor id, big-endian 32-bit
//! byte 4   0x80 | pressure_raw[7:1]     pressure_raw = round((kPa + 7) · 4)
//! byte 5   pressure_raw[0] << 7 | temp_raw[7:1]
//! byte 6   temp_raw[0] << 7 | status    temp_raw = temperature_c + 40
//! byte 7   pressure_raw ^ 0xFF
//! byte 8   CRC-8 over bytes 0-7
//! ```
//!
//! The pressure field is carried twice: split across bytes 4-5 and inverted
//! in byte 7, which receivers use as a plausibility check.

use crate::bits::bytes_to_bits;
use crate::crc::crc8;
use crate::manchester::differential_manchester_encode;
use crate::protocol::{SensorReading, TpmsProtocol};
use crate::types::{BitStream, TpmsResult};

const PREAMBLE_BYTES: [u8; 2] = [0x55, 0x3C];
const START_MARKER: [u8; 2] = [0, 1];
const CRC_POLY: u8 = 0x07;
const CRC_INIT: u8 = 0x80;
const STATUS: u8 = 1;

/// Codec for the Toyota TPMS protocol.
#[derive(Debug, Clone)]
pub struct ToyotaProtocol {
    preamble: BitStream,
}

impl ToyotaProtocol {
    pub fn new() -> Self {
        Self {
            preamble: bytes_to_bits(&PREAMBLE_BYTES),
        }
    }
}

impl Default for ToyotaProtocol {
    fn default() -> Self {
        Self::new()
    }
}

impl TpmsProtocol for ToyotaProtocol {
    fn protocol_name(&self) -> &'static str {
        "Toyota"
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
        let pressure_raw = ((reading.pressure_kpa + 7.0) * 4.0).round() as i64;
        let temp_raw = reading.temperature_c + 40;

        let mut frame = vec![
            (reading.sensor_id >> 24) as u8,
            (reading.sensor_id >> 16) as u8,
            (reading.sensor_id >> 8) as u8,
            reading.sensor_id as u8,
            0x80 | ((pressure_raw >> 1) as u8 & 0x7F),
            (((pressure_raw & 1) as u8) << 7) | ((temp_raw >> 1) as u8 & 0x7F),
            (((temp_raw & 1) as u8) << 7) | (STATUS & 0x7F),
            (pressure_raw as u8) ^ 0xFF,
        ];
        frame.push(crc8(&frame, CRC_POLY, CRC_INIT));
        frame
    }

    fn encode_message(&self, reading: &SensorReading) -> TpmsResult<BitStream> {
        let frame = self.create_packet(reading);
        let encoded = differential_manchester_encode(&bytes_to_bits(&frame))?;

        let mut message = self.preamble.clone();
        message.extend_from_slice(&START_MARKER);
        message.extend_from_slice(&encoded);
        tracing::debug!(
            protocol = "Toyota",
            sensor_id = reading.sensor_id,
            total_bits = message.len(),
            "encoded message"
        );
        Ok(message)
    }
}
