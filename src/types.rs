use serde::{Deserialize, Serialize};

/// Outcome of looking up a NAK code in the static table.
///
/// `found` is `false` when the code could not be parsed as an integer or is
/// absent from the table; `description` then carries a generic fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NakResult {
    pub description: String,
    pub found: bool,
}

/// Interpreted result of one command/response exchange.
///
/// Every exchange terminates in exactly one of these variants. None of them
/// is fatal: the engine stays usable for the next command regardless of which
/// one came back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Response that is neither a NAK, a lock refusal, nor empty.
    /// Carries the raw payload; numeric parsing is the caller's business.
    Payload(String),
    /// Recognized NAK frame, decoded against the static code table
    Nak(NakResult),
    /// The device refused the command because the setting is locked
    Locked,
    /// Nothing received before the response timeout elapsed
    Empty,
}

impl Outcome {
    /// Payload string, if this outcome is a successful payload.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Outcome::Payload(data) => Some(data),
            _ => None,
        }
    }

    /// True when nothing was received before the timeout.
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nak_result_serde_round_trip() {
        let nak = NakResult {
            description: "Value out of range".to_string(),
            found: true,
        };
        let json = serde_json::to_string(&nak).unwrap();
        let back: NakResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nak);
    }

    #[test]
    fn outcome_accessors() {
        assert_eq!(
            Outcome::Payload("1.23E-3".to_string()).payload(),
            Some("1.23E-3")
        );
        assert_eq!(Outcome::Locked.payload(), None);
        assert!(Outcome::Empty.is_empty());
        assert!(!Outcome::Payload(String::new()).is_empty());
    }
}
