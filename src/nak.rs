//! Static NAK code table and response classification.
//!
//! The 972B answers a refused command with `<address>NAK<code><CR>`. The code
//! table below is fixed by the device firmware; it is compiled in, never
//! mutated, and safe to consult from any number of callers.

use crate::constants::{LOCK_MARKER, NAK_MARKER, UNKNOWN_NAK_DESCRIPTION};
use crate::types::NakResult;

/// One entry of the firmware's NAK code table.
struct NakCode {
    code: u16,
    description: &'static str,
}

static NAK_CODES: &[NakCode] = &[
    NakCode {
        code: 8,
        description: "Zero adjustment attempted at too high a pressure",
    },
    NakCode {
        code: 9,
        description: "Atmospheric adjustment attempted at too low a pressure",
    },
    NakCode {
        code: 160,
        description: "Unrecognized message",
    },
    NakCode {
        code: 169,
        description: "Invalid argument",
    },
    NakCode {
        code: 172,
        description: "Value out of range",
    },
    NakCode {
        code: 175,
        description: "Command/query character invalid",
    },
    NakCode {
        code: 180,
        description: "Protected setting (locked)",
    },
    NakCode {
        code: 195,
        description: "Control setpoint enabled (cannot change setpoint parameters)",
    },
];

/// Number of NAK codes in the static table.
pub fn nak_code_count() -> usize {
    NAK_CODES.len()
}

/// Decode a NAK response against the static code table.
///
/// Accepts either a full frame (`253NAK172`) or a bare code string (`172`):
/// everything up to and including the `NAK` marker is stripped before the
/// numeric parse. A code that does not parse as an integer or is absent from
/// the table yields `found = false` with a fallback description; this
/// function never fails.
pub fn decode_nak(response: &str) -> NakResult {
    let code_str = match response.find(NAK_MARKER) {
        Some(idx) => &response[idx + NAK_MARKER.len()..],
        None => response,
    };

    let entry = code_str
        .trim()
        .parse::<u16>()
        .ok()
        .and_then(|code| NAK_CODES.iter().find(|entry| entry.code == code));

    match entry {
        Some(entry) => NakResult {
            description: entry.description.to_string(),
            found: true,
        },
        None => NakResult {
            description: UNKNOWN_NAK_DESCRIPTION.to_string(),
            found: false,
        },
    }
}

/// Whether a raw response signals that the device is locked.
///
/// A locked device may refuse a command without a well-formed NAK code, so
/// this check runs independently of (and before) NAK decoding. Pure
/// predicate: no state is read or written besides the input.
pub fn is_lock_error(response: &str) -> bool {
    response.contains(LOCK_MARKER)
}
