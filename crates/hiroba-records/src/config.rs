//! Configuration for a record store.

use std::str::FromStr;

/// Language used for user-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Japanese.
    #[default]
    Ja,
    /// English.
    En,
}

/// Error returned when a locale name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale '{0}' (expected 'ja' or 'en')")]
pub struct ParseLocaleError(String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "ja-jp" | "japanese" => Ok(Self::Ja),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::En),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ja => write!(f, "ja"),
            Self::En => write!(f, "en"),
        }
    }
}

/// Configuration for a [`KvRecordStore`](crate::KvRecordStore).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Prefix joined with the game slug to form the storage key.
    pub key_prefix: String,
    /// Maximum records kept per game; older ones are evicted first.
    pub max_records: usize,
    /// Number of records listed in [`GameStats::recent_records`](crate::GameStats).
    pub recent_limit: usize,
    /// Language for user-facing error messages.
    pub locale: Locale,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: "dice-games:".to_string(),
            max_records: 100,
            recent_limit: 10,
            locale: Locale::Ja,
        }
    }
}

impl StoreConfig {
    /// Set the storage key prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Set the per-game record cap (at least 1).
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = max.max(1);
        self
    }

    /// Set how many recent records the stats include.
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Set the message locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The storage key for a game.
    pub fn key_for(&self, game_slug: &str) -> String {
        format!("{}{}", self.key_prefix, game_slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.key_prefix, "dice-games:");
        assert_eq!(cfg.max_records, 100);
        assert_eq!(cfg.recent_limit, 10);
        assert_eq!(cfg.locale, Locale::Ja);
    }

    #[test]
    fn builder_methods() {
        let cfg = StoreConfig::default()
            .with_prefix("test:")
            .with_max_records(5)
            .with_recent_limit(3)
            .with_locale(Locale::En);
        assert_eq!(cfg.key_for("zorome"), "test:zorome");
        assert_eq!(cfg.max_records, 5);
        assert_eq!(cfg.recent_limit, 3);
        assert_eq!(cfg.locale, Locale::En);
    }

    #[test]
    fn max_records_clamped() {
        let cfg = StoreConfig::default().with_max_records(0);
        assert_eq!(cfg.max_records, 1);
    }

    #[test]
    fn default_key_layout() {
        assert_eq!(StoreConfig::default().key_for("zorome"), "dice-games:zorome");
    }

    #[test]
    fn parse_locale() {
        assert_eq!("ja".parse::<Locale>(), Ok(Locale::Ja));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::En.to_string(), "en");
    }
}
