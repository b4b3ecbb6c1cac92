use crate::constants::*;
use crate::error::{Result, TransducerError};
use crate::nak::{decode_nak, is_lock_error};
use crate::types::Outcome;
use serialport::SerialPort;
use std::thread;
use std::time::{Duration, Instant};

/// Bidirectional byte stream the engine talks through.
///
/// The engine never opens, reconfigures, or closes the underlying link; it
/// only writes command frames and polls for response bytes. Every
/// [`serialport::SerialPort`] implements this via the blanket impl below, and
/// tests substitute a scripted in-memory transport.
pub trait Transport {
    /// Write a complete buffer to the link.
    fn write_bytes(&mut self, data: &[u8]) -> Result<()>;

    /// Number of bytes ready to read without blocking.
    fn bytes_available(&mut self) -> Result<usize>;

    /// Read a single byte. Only called after `bytes_available` reported data.
    fn read_byte(&mut self) -> Result<u8>;
}

impl<T: SerialPort + ?Sized> Transport for T {
    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.write_all(data)?;
        self.flush()?;
        Ok(())
    }

    fn bytes_available(&mut self) -> Result<usize> {
        Ok(self.bytes_to_read()? as usize)
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte)?;
        Ok(byte[0])
    }
}

/// List available serial ports.
pub fn list_ports() -> Result<Vec<serialport::SerialPortInfo>> {
    Ok(serialport::available_ports()?)
}

/// Protocol engine for one addressed 972B transducer.
///
/// Holds a borrowed transport plus two configuration knobs (response timeout
/// and maximum response length); no session state survives a single
/// command/response exchange. One engine per transport at a time: exchanges
/// are synchronous and must not overlap, so callers sharing an engine need
/// external mutual exclusion.
pub struct PressureTransducer<'a, T: Transport + ?Sized> {
    port: &'a mut T,
    device_address: String,
    response_timeout: Duration,
    max_response_length: usize,
    print_tx: bool,
    print_rx: bool,
}

impl<'a, T: Transport + ?Sized> PressureTransducer<'a, T> {
    /// Create an engine for the default device address (`253`).
    pub fn new(port: &'a mut T) -> Self {
        Self::build(port, DEFAULT_ADDRESS.to_string())
    }

    /// Create an engine for a specific bus address.
    ///
    /// The address must be a non-empty string of ASCII digits and is fixed
    /// for the lifetime of the engine.
    pub fn with_address(port: &'a mut T, address: &str) -> Result<Self> {
        let address = address.trim();
        if address.is_empty() || !address.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TransducerError::InvalidAddress(address.to_string()));
        }
        Ok(Self::build(port, address.to_string()))
    }

    fn build(port: &'a mut T, device_address: String) -> Self {
        PressureTransducer {
            port,
            device_address,
            response_timeout: Duration::from_millis(DEFAULT_RESPONSE_TIMEOUT_MS),
            max_response_length: DEFAULT_MAX_RESPONSE_LENGTH,
            print_tx: false,
            print_rx: false,
        }
    }

    /// Address this engine targets.
    pub fn device_address(&self) -> &str {
        &self.device_address
    }

    /// Set how long `read_response` waits for a complete reply.
    pub fn set_response_timeout(&mut self, timeout: Duration) {
        self.response_timeout = timeout;
    }

    /// Set the upper bound on accepted response size.
    pub fn set_max_response_length(&mut self, length: usize) {
        self.max_response_length = length;
    }

    /// Enable/disable debug printing for TX/RX frames
    pub fn set_debug_print(&mut self, tx: bool, rx: bool) {
        self.print_tx = tx;
        self.print_rx = rx;
    }

    /// Encode and send one command frame:
    /// `<address><command>[ <parameter>]<CR>`.
    ///
    /// The parameter segment (and its leading space) is omitted when the
    /// parameter is `None` or blank. Terminator characters embedded in the
    /// command or parameter are rejected; a stray `\r` would split the frame
    /// on the wire.
    pub fn send_command(&mut self, command: &str, parameter: Option<&str>) -> Result<()> {
        let command = command.trim();
        if command.is_empty() {
            return Err(TransducerError::EmptyCommand);
        }
        if contains_terminator(command) {
            return Err(TransducerError::EmbeddedTerminator { field: "command" });
        }

        let mut frame = String::with_capacity(self.device_address.len() + command.len() + 1);
        frame.push_str(&self.device_address);
        frame.push_str(command);
        if let Some(parameter) = parameter.map(str::trim).filter(|p| !p.is_empty()) {
            if contains_terminator(parameter) {
                return Err(TransducerError::EmbeddedTerminator { field: "parameter" });
            }
            frame.push(' ');
            frame.push_str(parameter);
        }
        frame.push(TERMINATOR as char);

        if self.print_tx {
            println!("Sending:  {}", frame.trim_end());
        }
        self.port.write_bytes(frame.as_bytes())
    }

    /// Read one response frame, terminator excluded.
    ///
    /// Polls the transport until a `<CR>` arrives, `max_response_length`
    /// characters have accumulated, or the response timeout elapses. The
    /// timeout is a soft boundary: whatever accumulated so far (possibly
    /// nothing) is returned rather than an error, leaving interpretation to
    /// the caller. When the length bound trips, the rest of the frame is
    /// drained so it cannot contaminate the next exchange.
    pub fn read_response(&mut self) -> Result<String> {
        let deadline = Instant::now() + self.response_timeout;
        let mut response = String::new();

        while Instant::now() < deadline {
            if self.port.bytes_available()? == 0 {
                thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
                continue;
            }
            let byte = self.port.read_byte()?;
            if byte == TERMINATOR {
                break;
            }
            response.push(byte as char);
            if response.len() >= self.max_response_length {
                self.drain_frame(deadline)?;
                break;
            }
        }

        if self.print_rx {
            println!("Received: {}", response);
        }
        Ok(response)
    }

    /// Discard bytes up to the next terminator or the deadline.
    fn drain_frame(&mut self, deadline: Instant) -> Result<()> {
        while Instant::now() < deadline {
            if self.port.bytes_available()? == 0 {
                thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
                continue;
            }
            if self.port.read_byte()? == TERMINATOR {
                break;
            }
        }
        Ok(())
    }

    /// One full exchange: send, await, classify.
    fn exchange(&mut self, command: &str, parameter: Option<&str>) -> Result<Outcome> {
        self.send_command(command, parameter)?;
        let raw = self.read_response()?;
        Ok(self.interpret(&raw))
    }

    /// Classify a raw response into a terminal [`Outcome`].
    ///
    /// The lock check runs before NAK decoding since a locked device may not
    /// answer with a well-formed NAK code. Anything that is neither empty,
    /// locked, nor a NAK frame is the successful payload; no stricter grammar
    /// is imposed at this layer.
    fn interpret(&self, raw: &str) -> Outcome {
        if raw.is_empty() {
            Outcome::Empty
        } else if is_lock_error(raw) {
            Outcome::Locked
        } else if raw.contains(NAK_MARKER) {
            Outcome::Nak(decode_nak(raw))
        } else {
            Outcome::Payload(raw.to_string())
        }
    }

    /// Query a pressure reading.
    ///
    /// The measurement type doubles as the command token (default `PR3`, the
    /// 3-digit exponential reading). The payload is returned as the raw
    /// string from the device; numeric parsing is left to the caller.
    pub fn request_pressure(&mut self, measure_type: Option<&str>) -> Result<Outcome> {
        self.exchange(measure_type.unwrap_or(DEFAULT_MEASURE_TYPE), None)
    }

    /// Tell the device to switch baud rate (default `9600`).
    ///
    /// This only commands the device; reconfiguring the local port to the
    /// matching speed is the caller's responsibility once this succeeds.
    pub fn change_baud_rate(&mut self, new_baud_rate: Option<&str>) -> Result<Outcome> {
        self.exchange(
            BAUD_RATE_COMMAND,
            Some(new_baud_rate.unwrap_or(DEFAULT_BAUD_RATE)),
        )
    }

    /// Toggle the RS-485 bus turnaround delay (default `ON`).
    pub fn set_rs485_delay(&mut self, delay_setting: Option<&str>) -> Result<Outcome> {
        self.exchange(
            RS485_DELAY_COMMAND,
            Some(delay_setting.unwrap_or(DEFAULT_RS485_DELAY)),
        )
    }

    /// Query the current RS-485 turnaround delay setting.
    pub fn query_rs485_delay(&mut self) -> Result<Outcome> {
        self.exchange(RS485_DELAY_QUERY, None)
    }

    /// Configure setpoint 1.
    ///
    /// The four fields are combined into a single comma-separated parameter
    /// in the order `setpoint,direction,hysteresis,enable_mode` and passed
    /// through unchanged; the device validates each field itself and reports
    /// a bad one through the NAK/lock mechanisms.
    pub fn setup_setpoint(
        &mut self,
        setpoint: &str,
        direction: &str,
        hysteresis: &str,
        enable_mode: &str,
    ) -> Result<Outcome> {
        let parameter =
            [setpoint, direction, hysteresis, enable_mode].join(SETPOINT_FIELD_SEPARATOR);
        self.exchange(SETPOINT_COMMAND, Some(&parameter))
    }

    /// Print an exchange outcome in human-readable form.
    pub fn print_response(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Payload(data) => println!("Response: {}", data),
            Outcome::Nak(nak) => println!("NAK: {}", nak.description),
            Outcome::Locked => println!("Device is locked"),
            Outcome::Empty => println!("No response before timeout"),
        }
    }

    /// Query a pressure reading and print it.
    pub fn print_pressure(&mut self, measure_type: Option<&str>) -> Result<()> {
        let outcome = self.request_pressure(measure_type)?;
        self.print_response(&outcome);
        Ok(())
    }
}

fn contains_terminator(text: &str) -> bool {
    text.bytes().any(|b| b == b'\r' || b == b'\n')
}
