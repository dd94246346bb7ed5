//! Rolling dice and checking for zorome.

use rand::Rng;

use crate::value::DiceValue;

/// Roll a single die using the thread-local RNG.
pub fn roll_dice() -> DiceValue {
    roll_dice_with(&mut rand::rng())
}

/// Roll a single die using the given RNG.
pub fn roll_dice_with<R: Rng + ?Sized>(rng: &mut R) -> DiceValue {
    DiceValue::new(rng.random_range(1..=DiceValue::SIDES)).unwrap_or_default()
}

/// Roll `count` dice using the thread-local RNG.
pub fn roll_multiple_dice(count: usize) -> Vec<DiceValue> {
    roll_multiple_dice_with(&mut rand::rng(), count)
}

/// Roll `count` dice using the given RNG, in order.
pub fn roll_multiple_dice_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<DiceValue> {
    (0..count).map(|_| roll_dice_with(rng)).collect()
}

/// Returns true if every die shows the same face.
///
/// An empty roll is never a zorome.
pub fn is_zorome(values: &[DiceValue]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => false,
    }
}
