//! End-to-end encode pipeline demo
//!
//! Builds one broadcast per protocol from the same sensor reading and
//! prints the intermediate representations a transmit layer would consume.
//!
//! Run with: cargo run --example transmit_pipeline

use tpms_core::fsk::FskModulator;
use tpms_core::protocol::{ProtocolFactory, SensorReading};
use tpms_core::types::complex_ops::average_power;

fn main() {
    let reading = SensorReading::new(0x123456, 220.0, 25);
    let fsk = FskModulator::default();

    println!(
        "sensor 0x{:06X}: {:.1} kPa, {} °C",
        reading.sensor_id, reading.pressure_kpa, reading.temperature_c
    );

    for tag in ProtocolFactory::list() {
        let codec = ProtocolFactory::create(tag).expect("known protocol tag");
        let frame = codec.create_packet(&reading);
        let bits = codec.encode_message(&reading).expect("binary frame bits");
        let pulses = codec.pulse_encode_message(&bits);
        let iq = fsk.generate_iq(&pulses, 0.5);

        let hex: Vec<String> = frame.iter().map(|b| format!("{b:02X}")).collect();
        println!("\n{} @ {:.2} MHz", tag, codec.default_frequency_hz() / 1e6);
        println!("  frame      {}", hex.join(" "));
        println!("  bit stream {} bits", bits.len());
        println!("  pulses     {} (pulse, gap) pairs", pulses.len());
        println!(
            "  iq burst   {} samples, avg power {:.3}",
            iq.len(),
            average_power(&iq)
        );
    }
}
