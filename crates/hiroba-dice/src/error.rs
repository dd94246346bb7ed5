//! Error types for the dice utilities.

/// Errors that can occur when constructing dice values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A face value outside 1..=6 was supplied.
    #[error("invalid die face: {0} (expected 1-6)")]
    InvalidFace(u8),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
