//! Error types for record storage.

use thiserror::Error;

use crate::config::Locale;

/// Result type for record store writes.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a key-value medium.
#[derive(Debug, Error)]
pub enum KvError {
    /// The medium has no room for the value.
    #[error("quota exceeded: {needed} bytes needed, {available} available")]
    QuotaExceeded {
        /// Bytes the medium would hold after the write.
        needed: usize,
        /// Bytes the medium allows.
        available: usize,
    },

    /// An I/O operation on the backing files failed.
    #[error("I/O error for key '{key}': {source}")]
    Io {
        /// The key being accessed.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Why the records for a game could not be read.
///
/// Never surfaced through [`RecordStore::get_records`](crate::RecordStore),
/// which treats every failure as "no records".
#[derive(Debug, Error)]
pub enum ReadFailure {
    /// The medium refused the read.
    #[error("read failed: {0}")]
    Medium(#[from] KvError),

    /// The stored value is not a valid record list.
    #[error("stored records under '{key}' are corrupt: {source}")]
    Corrupt {
        /// The key holding the damaged value.
        key: String,
        /// The JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// The write operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    /// Saving a new record.
    Save,
    /// Clearing a game's records.
    Clear,
}

impl WriteOp {
    /// Localized message shown to the player.
    pub fn user_message(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Save, Locale::Ja) => "記録の保存に失敗しました",
            (Self::Save, Locale::En) => "Failed to save the record",
            (Self::Clear, Locale::Ja) => "記録の削除に失敗しました",
            (Self::Clear, Locale::En) => "Failed to delete the records",
        }
    }
}

impl std::fmt::Display for WriteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Save => write!(f, "save"),
            Self::Clear => write!(f, "clear"),
        }
    }
}

/// The underlying cause of a failed write.
#[derive(Debug, Error)]
pub enum WriteCause {
    /// The medium rejected the write.
    #[error(transparent)]
    Medium(#[from] KvError),

    /// The record list could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors surfaced to callers of the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The medium rejected a save or clear. Previously stored data is intact.
    #[error("failed to {op} records for '{slug}': {source}")]
    Write {
        /// Which operation failed.
        op: WriteOp,
        /// The game whose records were being written.
        slug: String,
        /// What went wrong.
        #[source]
        source: WriteCause,
    },

    /// The record was rejected before anything was written.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl StoreError {
    /// Localized message suitable for showing to the player.
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            Self::Write { op, .. } => op.user_message(locale).to_string(),
            Self::InvalidRecord(reason) => match locale {
                Locale::Ja => format!("記録が不正です: {reason}"),
                Locale::En => format!("Invalid record: {reason}"),
            },
        }
    }
}
