use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermError {
    #[error("instruction digit {digit} at position {index} exceeds its bound {index}")]
    MalformedInstruction { index: usize, digit: usize },

    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("value {value} at position {index} breaks the permutation")]
    NotAPermutation { index: usize, value: usize },

    #[error("rank index {index} is out of range for n = {n}")]
    IndexOutOfRange { index: u128, n: usize },

    #[error("{n}! does not fit in 128 bits")]
    FactorialOverflow { n: usize },

    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("verification failed: {0}")]
    Verification(String),
}

pub type Result<T> = std::result::Result<T, PermError>;
