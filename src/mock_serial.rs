//! Scripted in-memory transport for protocol tests.

use crate::error::Result;
use crate::protocol::Transport;
use std::collections::VecDeque;

/// Test double for the serial link: bytes queued with [`queue`] or
/// [`with_response`] play back as the device's reply, and everything the
/// engine writes is captured for inspection.
///
/// [`queue`]: MockTransport::queue
/// [`with_response`]: MockTransport::with_response
pub struct MockTransport {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            rx: VecDeque::new(),
            tx: Vec::new(),
        }
    }

    /// A transport that will answer the next read with `response`.
    pub fn with_response(response: &str) -> Self {
        let mut transport = Self::new();
        transport.queue(response.as_bytes());
        transport
    }

    /// Append bytes to the scripted device output.
    pub fn queue(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }

    /// Everything the engine has written, as ASCII.
    pub fn sent(&self) -> &str {
        std::str::from_utf8(&self.tx).expect("engine wrote non-ASCII bytes")
    }

    /// Scripted bytes not yet consumed by the engine.
    pub fn pending(&self) -> Vec<u8> {
        self.rx.iter().copied().collect()
    }
}

impl Transport for MockTransport {
    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.tx.extend_from_slice(data);
        Ok(())
    }

    fn bytes_available(&mut self) -> Result<usize> {
        Ok(self.rx.len())
    }

    fn read_byte(&mut self) -> Result<u8> {
        Ok(self.rx.pop_front().expect("read past end of scripted data"))
    }
}
