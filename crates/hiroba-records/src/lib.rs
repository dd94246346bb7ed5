//! Play records and statistics for Dice Games Hiroba.
//!
//! Each completed play attempt is a [`GameRecord`]. Records are kept per
//! game in a key-value medium (see [`kv`]) as one JSON array per game slug,
//! capped at the most recent 100 entries. [`GameStats`] are computed fresh
//! from the stored records whenever they are requested.
//!
//! The medium is injected: [`KvRecordStore`] works over any
//! [`KeyValueStore`], so tests use [`MemoryStore`] and the CLI uses
//! [`FileStore`].

pub mod config;
pub mod error;
pub mod kv;
pub mod record;
pub mod stats;
pub mod store;

pub use config::{Locale, ParseLocaleError, StoreConfig};
pub use error::{KvError, ReadFailure, StoreError, StoreResult, WriteCause, WriteOp};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use record::GameRecord;
pub use stats::GameStats;
pub use store::{KvRecordStore, RecordStore};
