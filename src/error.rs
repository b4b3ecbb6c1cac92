//! Error types for 972B protocol operations.

use thiserror::Error;

/// Result type alias for 972B operations.
pub type Result<T> = std::result::Result<T, TransducerError>;

/// Error types for 972B transducer communication.
///
/// Protocol-level failures reported by the device itself (NAK frames, lock
/// refusals, timed-out exchanges) are not errors; they are surfaced as
/// [`Outcome`](crate::types::Outcome) variants so the caller can keep issuing
/// commands.
#[derive(Error, Debug)]
pub enum TransducerError {
    /// Serial port communication error
    #[error("Serial port error: {0}")]
    SerialPort(#[from] serialport::Error),

    /// General I/O error on the transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Device address failed validation at construction
    #[error("Invalid device address {0:?}: must be a non-empty string of digits")]
    InvalidAddress(String),

    /// Command token was empty after trimming
    #[error("Command token is empty")]
    EmptyCommand,

    /// A frame terminator was embedded in a command or parameter
    #[error("{field} contains a frame terminator character")]
    EmbeddedTerminator {
        /// Which part of the frame carried the terminator
        field: &'static str,
    },
}
