//! A tray of dice that are rolled together.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::roll::{is_zorome, roll_dice_with};
use crate::value::DiceValue;

/// A single die on the tray.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Die {
    /// Position of the die on the tray.
    pub id: usize,
    /// The face currently showing.
    pub value: DiceValue,
    /// Whether the die is mid-roll and its face not yet final.
    pub is_rolling: bool,
}

/// An ordered set of dice rolled as one throw.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiceTray {
    dice: Vec<Die>,
}

impl DiceTray {
    /// Create a tray of `count` dice, all showing 1.
    pub fn new(count: usize) -> Self {
        let dice = (0..count)
            .map(|id| Die {
                id,
                value: DiceValue::MIN,
                is_rolling: false,
            })
            .collect();
        Self { dice }
    }

    /// The dice on the tray.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// The faces currently showing, in tray order.
    pub fn values(&self) -> Vec<DiceValue> {
        self.dice.iter().map(|d| d.value).collect()
    }

    /// Number of dice on the tray.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Whether the tray has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Whether any die is still rolling.
    pub fn is_rolling(&self) -> bool {
        self.dice.iter().any(|d| d.is_rolling)
    }

    /// Mark every die as rolling.
    pub fn start_roll(&mut self) {
        for die in &mut self.dice {
            die.is_rolling = true;
        }
    }

    /// Give every die a fresh face and stop it rolling.
    pub fn settle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<DiceValue> {
        for die in &mut self.dice {
            die.value = roll_dice_with(rng);
            die.is_rolling = false;
        }
        self.values()
    }

    /// Roll the whole tray in one step.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<DiceValue> {
        self.start_roll();
        self.settle(rng)
    }

    /// Whether the settled faces form a zorome.
    ///
    /// A tray that is still rolling never counts.
    pub fn is_zorome(&self) -> bool {
        !self.is_rolling() && is_zorome(&self.values())
    }
}

impl std::fmt::Display for DiceTray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}
