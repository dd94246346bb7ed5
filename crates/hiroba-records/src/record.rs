//! A single completed play attempt.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed play attempt.
///
/// Stored with camelCase keys, newest last, under the game's storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Unique identifier of this record.
    pub id: String,
    /// Slug of the game that was played.
    pub game_slug: String,
    /// Number of dice used.
    pub dice_count: u32,
    /// Rolls needed to reach the win condition; lower is better.
    pub attempts: u32,
    /// When the attempt finished, in epoch milliseconds.
    pub timestamp: i64,
    /// Human-readable local date derived from `timestamp`.
    pub date_string: String,
}

impl GameRecord {
    /// Create a record for an attempt finishing now.
    pub fn new(game_slug: impl Into<String>, dice_count: u32, attempts: u32) -> Self {
        Self::at(game_slug, dice_count, attempts, Utc::now().timestamp_millis())
    }

    /// Create a record for an attempt finishing at `timestamp` (epoch ms).
    pub fn at(
        game_slug: impl Into<String>,
        dice_count: u32,
        attempts: u32,
        timestamp: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            game_slug: game_slug.into(),
            dice_count,
            attempts,
            timestamp,
            date_string: format_date(timestamp),
        }
    }

    /// Describe why this record cannot be stored, if it can't.
    pub(crate) fn invalid_reason(&self) -> Option<String> {
        if self.game_slug.trim().is_empty() {
            Some("game slug is empty".to_string())
        } else if self.dice_count == 0 {
            Some("dice count must be positive".to_string())
        } else if self.attempts == 0 {
            Some("attempts must be positive".to_string())
        } else {
            None
        }
    }
}

/// Format epoch milliseconds as a local `YYYY/M/D H:MM:SS` string.
fn format_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y/%-m/%-d %-H:%M:%S")
                .to_string()
        })
        .unwrap_or_default()
}
