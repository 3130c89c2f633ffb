use thiserror::Error;

/// Everything that can go wrong between a raw sensor packet and a printed
/// summary. All variants surface to the caller immediately; nothing is
/// retried or recovered internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unknown workout type: {0:?}")]
    InvalidWorkoutType(String),

    #[error("{tag} packet carries {got} sensor values, expected {expected}")]
    ArgumentMismatch {
        tag: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("workout {quantity} is zero, refusing to divide by it")]
    DivisionByZero { quantity: &'static str },

    #[error("malformed sensor packet {line:?}: {reason}")]
    MalformedPacket { line: String, reason: String },
}
