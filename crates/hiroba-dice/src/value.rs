//! The face value of a six-sided die.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A face value shown by a six-sided die, always in 1..=6.
///
/// Serializes as a bare integer. Deserializing a number outside the range
/// fails instead of producing an invalid face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiceValue(u8);

impl DiceValue {
    /// The lowest face.
    pub const MIN: Self = Self(1);
    /// The highest face.
    pub const MAX: Self = Self(6);
    /// Number of faces on the die.
    pub const SIDES: u8 = 6;

    /// Create a face value, returning `None` outside 1..=6.
    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::SIDES).contains(&value).then_some(Self(value))
    }

    /// The numeric face value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for DiceValue {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for DiceValue {
    type Error = DiceError;

    fn try_from(value: u8) -> DiceResult<Self> {
        Self::new(value).ok_or(DiceError::InvalidFace(value))
    }
}

impl From<DiceValue> for u8 {
    fn from(value: DiceValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for DiceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
