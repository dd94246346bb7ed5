//! Dice utilities for Dice Games Hiroba.
//!
//! Rolls six-sided dice, checks for zorome (every die showing the same
//! face), and computes and formats the probability of a zorome for a given
//! number of dice.

pub mod error;
pub mod probability;
pub mod roll;
pub mod tray;
pub mod value;

pub use error::{DiceError, DiceResult};
pub use probability::{
    calculate_zorome_probability, format_probability, format_probability_as_fraction,
};
pub use roll::{is_zorome, roll_dice, roll_dice_with, roll_multiple_dice, roll_multiple_dice_with};
pub use tray::{DiceTray, Die};
pub use value::DiceValue;
