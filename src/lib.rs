//! # 972B Protocol Library
//!
//! A Rust library for talking to MKS 972B DualMag pressure transducers over
//! their addressable ASCII serial protocol. The crate implements the protocol
//! layer only: command framing, timeout-bounded response reading, NAK
//! decoding, and lock-error detection. Opening and configuring the serial
//! port stays with the caller; the engine borrows any byte stream that
//! implements [`Transport`].
//!
//! ## Features
//!
//! - Query pressure readings (`PR1`..`PR4` measurement types)
//! - Change the device baud rate
//! - Configure setpoints (value, direction, hysteresis, enable mode)
//! - Toggle and query the RS-485 bus turnaround delay
//! - Decode the device's fixed NAK error-code table
//!
//! ## Example
//!
//! ```no_run
//! use mks972b_protocol::PressureTransducer;
//! use std::time::Duration;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut port = serialport::new("/dev/ttyUSB0", 9600)
//!         .timeout(Duration::from_millis(100))
//!         .open()?;
//!     let mut gauge = PressureTransducer::new(port.as_mut());
//!     let outcome = gauge.request_pressure(None)?;
//!     if let Some(reading) = outcome.payload() {
//!         println!("Pressure: {} Torr", reading);
//!     }
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod error;
pub mod nak;
pub mod protocol;
pub mod types;

#[cfg(test)]
mod mock_serial;

pub use error::{Result, TransducerError};
pub use nak::{decode_nak, is_lock_error, nak_code_count};
pub use protocol::{list_ports, PressureTransducer, Transport};
pub use types::*;
