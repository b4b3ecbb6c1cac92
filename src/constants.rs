//! Protocol constants for 972B transducer communication.
//!
//! This module defines the constants used by the 972B ASCII serial protocol,
//! including the default device address, command tokens, frame markers, and
//! timing parameters.

/// Default device address on the RS-485 bus
pub const DEFAULT_ADDRESS: &str = "253";

/// Frame terminator for both commands and responses
pub const TERMINATOR: u8 = b'\r';

/// Default response timeout in milliseconds
pub const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 5000;

/// Default maximum accepted response length in characters
pub const DEFAULT_MAX_RESPONSE_LENGTH: usize = 256;

/// Interval between polls of the transport while waiting for data
pub const POLL_INTERVAL_MS: u64 = 2;

/// Default measurement type for pressure queries (3-digit exponential reading)
pub const DEFAULT_MEASURE_TYPE: &str = "PR3";

/// Command token to change the device baud rate
pub const BAUD_RATE_COMMAND: &str = "BR";

/// Default baud rate parameter
pub const DEFAULT_BAUD_RATE: &str = "9600";

/// Command token to set the RS-485 turnaround delay
pub const RS485_DELAY_COMMAND: &str = "RSD";

/// Command token to query the RS-485 turnaround delay setting
pub const RS485_DELAY_QUERY: &str = "RSD?";

/// Default RS-485 turnaround delay setting
pub const DEFAULT_RS485_DELAY: &str = "ON";

/// Command token to configure setpoint 1
pub const SETPOINT_COMMAND: &str = "SP1";

/// Separator between fields of the combined setpoint parameter
pub const SETPOINT_FIELD_SEPARATOR: &str = ",";

/// Marker identifying a negative-acknowledgement frame
pub const NAK_MARKER: &str = "NAK";

/// Marker the device emits when a protected (locked) setting is refused.
/// Confirm against the 972B protocol manual before targeting other firmware.
pub const LOCK_MARKER: &str = "LOCK";

/// Fallback description for NAK codes missing from the static table
pub const UNKNOWN_NAK_DESCRIPTION: &str = "Unknown NAK code";
