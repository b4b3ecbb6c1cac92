//! Query Pressure Example
//!
//! This example demonstrates the core functionality of the 972B protocol
//! library:
//! - Listing and selecting serial ports
//! - Querying a pressure reading
//! - Querying the RS-485 turnaround delay setting
//! - Debug output for protocol analysis
//!
//! Usage:
//!   cargo run --example query_pressure                  # Interactive mode
//!   cargo run --example query_pressure -- COM3          # Specify port
//!   cargo run --example query_pressure -- /dev/ttyUSB0
//!
//! Set RUST_LOG environment variable to control logging:
//!   RUST_LOG=debug cargo run --example query_pressure
//!   RUST_LOG=info cargo run --example query_pressure

use inquire::Select;
use log::info;
use mks972b_protocol::{list_ports, Outcome, PressureTransducer, Result};
use std::time::Duration;

/// Interactive serial port selection using inquire
fn select_port() -> Result<String> {
    let ports = list_ports()?;

    if ports.is_empty() {
        eprintln!("No serial ports found!");
        std::process::exit(1);
    }

    let port_names: Vec<String> = ports
        .iter()
        .map(|p| format!("{} - {:?}", p.port_name, p.port_type))
        .collect();

    let selection = Select::new("Select a serial port:", port_names)
        .prompt()
        .map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Selection cancelled: {}", e),
            )
        })?;

    // Extract just the port name (before " - ")
    let port_name = selection.split(" - ").next().unwrap().to_string();
    Ok(port_name)
}

fn main() -> Result<()> {
    // Initialize logger with default info level if RUST_LOG is not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Get port name from command line argument or interactive selection
    let port_name = std::env::args()
        .nth(1)
        .map(Ok)
        .unwrap_or_else(select_port)?;

    info!("Connecting to 972B transducer on {}...", port_name);
    let mut port = serialport::new(&port_name, 9600)
        .timeout(Duration::from_millis(100))
        .open()?;

    let mut gauge = PressureTransducer::new(port.as_mut());

    // Enable debug printing to see protocol frames
    gauge.set_debug_print(true, true);

    info!("=== Pressure Reading ===");
    match gauge.request_pressure(None)? {
        Outcome::Payload(reading) => info!("Pressure: {} Torr", reading),
        other => gauge.print_response(&other),
    }

    info!("=== RS-485 Delay Setting ===");
    let delay = gauge.query_rs485_delay()?;
    gauge.print_response(&delay);

    info!("=== Done ===");

    Ok(())
}
