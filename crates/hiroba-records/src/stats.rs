//! Aggregate statistics over a set of play records.

use serde::{Deserialize, Serialize};

use crate::record::GameRecord;

/// Statistics for one game, optionally narrowed to one dice count.
///
/// Always computed from the stored records; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    /// Number of records considered.
    pub total_games: usize,
    /// Fewest attempts of any record, if there are records.
    pub best_score: Option<u32>,
    /// Mean attempts rounded to one decimal, if there are records.
    pub average_score: Option<f64>,
    /// Most recent records, newest first.
    pub recent_records: Vec<GameRecord>,
}

impl GameStats {
    /// Compute statistics over `records`, which are ordered oldest first.
    pub fn from_records(records: &[GameRecord], recent_limit: usize) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let best_score = records.iter().map(|r| r.attempts).min();
        let total: u64 = records.iter().map(|r| u64::from(r.attempts)).sum();
        let mean = total as f64 / records.len() as f64;

        Self {
            total_games: records.len(),
            best_score,
            average_score: Some(round_one_decimal(mean)),
            recent_records: records.iter().rev().take(recent_limit).cloned().collect(),
        }
    }
}

/// Round half up to one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
