//! Renault TPMS Codec
//!
//! 9-byte frame, CRC-8 trailer (poly 0x07, init 0x00), Manchester line
//! coding with post-encode bit inversion, 32-bit preamble. The only variant
//! with an extended mode: frames can be grown to an arbitrary byte length
//! with a choice of padding policy, re-sealed with a single trailing CRC.
//!
//! ## Frame Layout
//!
//! ```text
//! byte 0   (flags << 2) | pressure_raw[9:8]
//! byte 1   pressure_raw[7:0]          pressure_raw = round(kPa / 0.75)
//! byte 2   temperature_c + 30
//! byte 3-5 sensor id, little-endian 24-bit
//! byte 6-7 extra field, little-endian 16-bit
//! byte 8   CRC-8 over bytes 0-7
//! ```

use crate::bits::{bytes_to_bits, invert_bits};
use crate::crc::crc8;
use crate::manchester::manchester_encode;
use crate::protocol::{PaddingPolicy, SensorReading, TpmsProtocol};
use crate::types::{BitStream, TpmsError, TpmsResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PREAMBLE_BYTES: [u8; 4] = [0x55, 0x55, 0x55, 0x56];
const CRC_POLY: u8 = 0x07;
const CRC_INIT: u8 = 0x00;
const DEFAULT_FLAGS: u8 = 54;
const DEFAULT_EXTRA: u16 = 48153;
const MIN_FRAME_LEN: usize = 9;

/// Codec for the Renault TPMS protocol.
#[derive(Debug, Clone)]
pub struct RenaultProtocol {
    preamble: BitStream,
}

impl RenaultProtocol {
    pub fn new() -> Self {
        Self {
            preamble: bytes_to_bits(&PREAMBLE_BYTES),
        }
    }

    /// Pack the 8 data bytes, without the CRC trailer.
    fn data_bytes(&self, reading: &SensorReading) -> [u8; 8] {
        let flags = reading.flags.unwrap_or(DEFAULT_FLAGS);
        let extra = reading.extra.unwrap_or(DEFAULT_EXTRA);
        let pressure_raw = (reading.pressure_kpa / 0.75).round() as i64;

        [
            ((flags as u16) << 2) as u8 | ((pressure_raw >> 8) as u8 & 0x03),
            pressure_raw as u8,
            (reading.temperature_c + 30) as u8,
            reading.sensor_id as u8,
            (reading.sensor_id >> 8) as u8,
            (reading.sensor_id >> 16) as u8,
            extra as u8,
            (extra >> 8) as u8,
        ]
    }

    /// Line-code a finished frame and attach the preamble.
    fn finish_message(&self, frame: &[u8]) -> TpmsResult<BitStream> {
        let encoded = manchester_encode(&bytes_to_bits(frame))?;
        let body = invert_bits(&encoded);

        let mut message = self.preamble.clone();
        message.extend_from_slice(&body);
        Ok(message)
    }

    /// Build an extended frame of `target_length` bytes (≥ 9): the 8
    /// baseline data bytes, padding per `policy` up to `target_length - 1`,
    /// then one CRC over the full padded body.
    pub fn create_extended_packet(
        &self,
        reading: &SensorReading,
        target_length: usize,
        policy: &PaddingPolicy,
    ) -> TpmsResult<Vec<u8>> {
        if target_length < MIN_FRAME_LEN {
            return Err(TpmsError::FrameTooShort {
                min: MIN_FRAME_LEN,
                actual: target_length,
            });
        }

        let data = self.data_bytes(reading);
        let mut frame = data.to_vec();
        let needed = target_length - 1 - frame.len();

        match policy {
            PaddingPolicy::Repeat => {
                for i in 0..needed {
                    frame.push(data[i % data.len()]);
                }
            }
            PaddingPolicy::Zero => {
                frame.extend(std::iter::repeat(0u8).take(needed));
            }
            PaddingPolicy::Random => {
                let mut rng = StdRng::seed_from_u64(reading.sensor_id as u64);
                for _ in 0..needed {
                    frame.push(rng.gen());
                }
            }
            PaddingPolicy::Custom(bytes) => {
                let src: &[u8] = if bytes.is_empty() { &[0x00] } else { bytes };
                for i in 0..needed {
                    frame.push(src[i % src.len()]);
                }
            }
        }

        frame.push(crc8(&frame, CRC_POLY, CRC_INIT));
        Ok(frame)
    }

    /// Build the transmit bit stream for an extended frame.
    pub fn encode_extended_message(
        &self,
        reading: &SensorReading,
        target_length: usize,
        policy: &PaddingPolicy,
    ) -> TpmsResult<BitStream> {
        let frame = self.create_extended_packet(reading, target_length, policy)?;
        let message = self.finish_message(&frame)?;
        tracing::debug!(
            protocol = "Renault",
            frame_bytes = frame.len(),
            total_bits = message.len(),
            "encoded extended message"
        );
        Ok(message)
    }
}

impl Default for RenaultProtocol {
    fn default() -> Self {
        Self::new()
    }
}

impl TpmsProtocol for RenaultProtocol {
    fn protocol_name(&self) -> &'static str {
        "Renault"
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
        let data = self.data_bytes(reading);
        let mut frame = data.to_vec();
        frame.push(crc8(&data, CRC_POLY, CRC_INIT));
        frame
    }

    fn encode_message(&self, reading: &SensorReading) -> TpmsResult<BitStream> {
        let frame = self.create_packet(reading);
        let message = self.finish_message(&frame)?;
        tracing::debug!(
            protocol = "Renault",
            sensor_id = reading.sensor_id,
            total_bits = message.len(),
            "encoded message"
        );
        Ok(message)
    }
}
