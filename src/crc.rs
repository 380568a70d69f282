//! CRC-8 Engine
//!
//! Table-driven CRC-8 computation parametrized by polynomial and initial
//! value, matching the checksum conventions of automotive TPMS sensors
//! (and of the rtl_433 decoders for the same protocols).
//!
//! Lookup tables are memoized process-wide, keyed by polynomial: building a
//! table is idempotent and deterministic, so the cache is safe to share
//! between threads and is built at most once per polynomial.
//!
//! ## Example
//!
//! ```rust
//! use tpms_core::crc::crc8;
//!
//! assert_eq!(crc8(b"123", 0x07, 0x00), 113);
//! assert_eq!(crc8(&[0x01, 0x02, 0x03], 0x07, 0x00), 188);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// Process-wide table cache, keyed by polynomial.
static CRC8_TABLES: OnceLock<Mutex<HashMap<u8, Arc<[u8; 256]>>>> = OnceLock::new();

/// Build the 256-entry lookup table for a polynomial.
fn build_table(poly: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    for i in 0..256u16 {
        let mut crc = i as u8;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ poly;
            } else {
                crc <<= 1;
            }
        }
        table[i as usize] = crc;
    }
    table
}

/// Get the shared lookup table for a polynomial, building it on first use.
fn table_for(poly: u8) -> Arc<[u8; 256]> {
    let cache = CRC8_TABLES.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = cache.lock().unwrap_or_else(|e| e.into_inner());
    map.entry(poly)
        .or_insert_with(|| Arc::new(build_table(poly)))
        .clone()
}

/// Compute the CRC-8 of `data` in one call.
///
/// Folds left-to-right: `crc = table[crc ^ byte]`, seeded with `init`.
pub fn crc8(data: &[u8], polynomial: u8, init: u8) -> u8 {
    let table = table_for(polynomial);
    data.iter().fold(init, |crc, &byte| table[(crc ^ byte) as usize])
}

/// Byte-wise XOR fold, used where a protocol carries a plain XOR trailer
/// instead of a CRC.
pub fn xor_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0, |acc, &b| acc ^ b)
}

/// CRC-8 calculator holding a shared lookup table.
///
/// Useful when computing many checksums with the same parameters; the table
/// reference is cloned from the process-wide cache, never rebuilt.
#[derive(Debug, Clone)]
pub struct Crc8 {
    table: Arc<[u8; 256]>,
    value: u8,
    init: u8,
}

impl Crc8 {
    /// CRC-8 with the standard polynomial 0x07 and zero init.
    pub fn new() -> Self {
        Self::with_poly(0x07, 0x00)
    }

    /// CRC-8 with a custom polynomial and initial value.
    pub fn with_poly(poly: u8, init: u8) -> Self {
        Self {
            table: table_for(poly),
            value: init,
            init,
        }
    }

    /// Update the running CRC with additional data.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.value = self.table[(self.value ^ byte) as usize];
        }
    }

    /// Return the current CRC value.
    pub fn finalize(&self) -> u8 {
        self.value
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        self.value = self.init;
    }

    /// Compute the CRC of an entire buffer in one call.
    pub fn compute(&self, data: &[u8]) -> u8 {
        data.iter()
            .fold(self.init, |crc, &byte| self.table[(crc ^ byte) as usize])
    }

    /// Verify that data matches an expected CRC.
    pub fn verify(&self, data: &[u8], expected: u8) -> bool {
        self.compute(data) == expected
    }
}

impl Default for Crc8 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(crc8(b"123", 0x07, 0x00), 113);
        assert_eq!(crc8(&[0x01, 0x02, 0x03], 0x07, 0x00), 188);
    }

    #[test]
    fn test_empty_input_returns_init() {
        assert_eq!(crc8(&[], 0x07, 0x00), 0x00);
        assert_eq!(crc8(&[], 0x07, 0x80), 0x80);
    }

    #[test]
    fn test_deterministic() {
        let a = crc8(&[0xD9, 0x25, 0x37, 0x56], 0x07, 0x00);
        let b = crc8(&[0xD9, 0x25, 0x37, 0x56], 0x07, 0x00);
        assert_eq!(a, b);
    }

    #[test]
    fn test_init_changes_result() {
        assert_ne!(crc8(b"123", 0x07, 0x00), crc8(b"123", 0x07, 0x80));
    }

    #[test]
    fn test_table_cache_shared() {
        let t1 = table_for(0x07);
        let t2 = table_for(0x07);
        assert!(Arc::ptr_eq(&t1, &t2));
    }

    #[test]
    fn test_incremental_matches_oneshot() {
        let mut crc = Crc8::new();
        crc.update(b"12");
        crc.update(b"3");
        assert_eq!(crc.finalize(), 113);

        crc.reset();
        crc.update(b"123");
        assert_eq!(crc.finalize(), 113);
    }

    #[test]
    fn test_compute_and_verify() {
        let crc = Crc8::with_poly(0x07, 0x00);
        assert_eq!(crc.compute(b"123"), 113);
        assert!(crc.verify(b"123", 113));
        assert!(!crc.verify(b"123", 114));
    }

    #[test]
    fn test_xor_checksum() {
        assert_eq!(xor_checksum(&[]), 0);
        assert_eq!(xor_checksum(&[0xFF]), 0xFF);
        assert_eq!(xor_checksum(&[0x0F, 0xF0]), 0xFF);
        assert_eq!(xor_checksum(&[0xAA, 0xAA]), 0x00);
    }
}
