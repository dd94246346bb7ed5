//! The record store contract and its key-value implementation.

use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::{ReadFailure, StoreError, StoreResult, WriteCause, WriteOp};
use crate::kv::KeyValueStore;
use crate::record::GameRecord;
use crate::stats::GameStats;

/// Persistence and aggregation of play records, keyed by game slug.
pub trait RecordStore {
    /// Append a record to its game's history, evicting the oldest records
    /// beyond the cap, and persist the history as one value.
    fn save_record(&mut self, record: GameRecord) -> StoreResult<()>;

    /// All records for a game, oldest first, optionally only those played
    /// with `dice_count` dice. Missing or unreadable data yields no records.
    fn get_records(&self, game_slug: &str, dice_count: Option<u32>) -> Vec<GameRecord>;

    /// Statistics over [`get_records`](Self::get_records).
    fn get_stats(&self, game_slug: &str, dice_count: Option<u32>) -> GameStats;

    /// Delete every record for a game. Succeeds if there were none.
    fn clear_records(&mut self, game_slug: &str) -> StoreResult<()>;
}

/// A [`RecordStore`] keeping one JSON array per game in a key-value medium.
#[derive(Debug, Clone)]
pub struct KvRecordStore<S> {
    medium: S,
    config: StoreConfig,
}

impl<S: KeyValueStore> KvRecordStore<S> {
    /// Create a store over `medium` with the default configuration.
    pub fn new(medium: S) -> Self {
        Self::with_config(medium, StoreConfig::default())
    }

    /// Create a store over `medium` with a custom configuration.
    pub fn with_config(medium: S, config: StoreConfig) -> Self {
        Self { medium, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The underlying medium.
    pub fn medium(&self) -> &S {
        &self.medium
    }

    /// Consume the store, returning the medium.
    pub fn into_medium(self) -> S {
        self.medium
    }

    /// Read a game's full record list, reporting why a read failed.
    pub fn load_records(&self, game_slug: &str) -> Result<Vec<GameRecord>, ReadFailure> {
        let key = self.config.key_for(game_slug);
        let Some(data) = self.medium.get(&key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&data).map_err(|source| ReadFailure::Corrupt { key, source })
    }

    /// Player-facing message for `err` in the configured locale.
    pub fn user_message(&self, err: &StoreError) -> String {
        err.user_message(self.config.locale)
    }

    fn write_error(op: WriteOp, slug: &str, source: impl Into<WriteCause>) -> StoreError {
        StoreError::Write {
            op,
            slug: slug.to_string(),
            source: source.into(),
        }
    }
}

impl<S: KeyValueStore> RecordStore for KvRecordStore<S> {
    fn save_record(&mut self, record: GameRecord) -> StoreResult<()> {
        if let Some(reason) = record.invalid_reason() {
            return Err(StoreError::InvalidRecord(reason));
        }

        let slug = record.game_slug.clone();
        let mut records = match self.load_records(&slug) {
            Ok(records) => records,
            Err(ReadFailure::Corrupt { key, source }) => {
                warn!(key = %key, error = %source, "Discarding corrupt records");
                Vec::new()
            }
            Err(ReadFailure::Medium(e)) => {
                warn!(slug = %slug, error = %e, "Failed to read records before save");
                return Err(Self::write_error(WriteOp::Save, &slug, e));
            }
        };
        records.push(record);

        let excess = records.len().saturating_sub(self.config.max_records);
        records.drain(..excess);

        let json = serde_json::to_string(&records)
            .map_err(|e| Self::write_error(WriteOp::Save, &slug, e))?;
        let key = self.config.key_for(&slug);
        if let Err(e) = self.medium.set(&key, &json) {
            warn!(slug = %slug, error = %e, "Failed to save record");
            return Err(Self::write_error(WriteOp::Save, &slug, e));
        }

        debug!(slug = %slug, stored = records.len(), evicted = excess, "Saved record");
        Ok(())
    }

    fn get_records(&self, game_slug: &str, dice_count: Option<u32>) -> Vec<GameRecord> {
        let records = match self.load_records(game_slug) {
            Ok(records) => records,
            Err(e) => {
                warn!(slug = %game_slug, error = %e, "Failed to get records");
                return Vec::new();
            }
        };

        match dice_count {
            Some(n) => records.into_iter().filter(|r| r.dice_count == n).collect(),
            None => records,
        }
    }

    fn get_stats(&self, game_slug: &str, dice_count: Option<u32>) -> GameStats {
        let records = self.get_records(game_slug, dice_count);
        GameStats::from_records(&records, self.config.recent_limit)
    }

    fn clear_records(&mut self, game_slug: &str) -> StoreResult<()> {
        let key = self.config.key_for(game_slug);
        if let Err(e) = self.medium.remove(&key) {
            warn!(slug = %game_slug, error = %e, "Failed to clear records");
            return Err(Self::write_error(WriteOp::Clear, game_slug, e));
        }
        debug!(slug = %game_slug, "Cleared records");
        Ok(())
    }
}
