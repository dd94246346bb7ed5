//! The game metadata schema and its validation rules.

use chrono::NaiveDate;
use miette::{NamedSource, SourceSpan};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use toml::value::Datetime;
use toml::{Table, Value};

use crate::error::{ContentError, ContentResult};

/// How hard a game is to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// 初級
    #[serde(rename = "初級", alias = "beginner")]
    Beginner,
    /// 中級
    #[serde(rename = "中級", alias = "intermediate")]
    Intermediate,
    /// 上級
    #[serde(rename = "上級", alias = "advanced")]
    Advanced,
    /// 超級
    #[serde(rename = "超級", alias = "expert")]
    Expert,
}

impl Difficulty {
    /// Every tier, easiest first.
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// The label used in content files.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "初級",
            Self::Intermediate => "中級",
            Self::Advanced => "上級",
            Self::Expert => "超級",
        }
    }

    /// The English alias.
    pub fn alias(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s || d.alias().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown difficulty: {s}"))
    }
}

/// The kind of game, used to group the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// 運ゲー: decided by luck.
    #[serde(rename = "運ゲー", alias = "luck")]
    Luck,
    /// 戦略ゲー: decided by strategy.
    #[serde(rename = "戦略ゲー", alias = "strategy")]
    Strategy,
    /// 計算ゲー: arithmetic games.
    #[serde(rename = "計算ゲー", alias = "calculation")]
    Calculation,
    /// パーティーゲー: party games.
    #[serde(rename = "パーティーゲー", alias = "party")]
    Party,
    /// TRPG helpers.
    #[serde(rename = "TRPG", alias = "trpg")]
    Trpg,
    /// 統計: probability and statistics toys.
    #[serde(rename = "統計", alias = "statistics")]
    Statistics,
    /// ロールプレイ: role-play.
    #[serde(rename = "ロールプレイ", alias = "roleplay")]
    RolePlay,
}

impl Category {
    /// Every category in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Luck,
        Self::Strategy,
        Self::Calculation,
        Self::Party,
        Self::Trpg,
        Self::Statistics,
        Self::RolePlay,
    ];

    /// The label used in content files.
    pub fn label(self) -> &'static str {
        match self {
            Self::Luck => "運ゲー",
            Self::Strategy => "戦略ゲー",
            Self::Calculation => "計算ゲー",
            Self::Party => "パーティーゲー",
            Self::Trpg => "TRPG",
            Self::Statistics => "統計",
            Self::RolePlay => "ロールプレイ",
        }
    }

    /// The English alias.
    pub fn alias(self) -> &'static str {
        match self {
            Self::Luck => "luck",
            Self::Strategy => "strategy",
            Self::Calculation => "calculation",
            Self::Party => "party",
            Self::Trpg => "trpg",
            Self::Statistics => "statistics",
            Self::RolePlay => "roleplay",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s || c.alias().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// A validated catalog entry for one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMetadata {
    /// Display title.
    pub title: String,
    /// Name of the UI component that plays the game.
    pub component: String,
    /// One-paragraph description.
    pub description: String,
    /// Player count, e.g. "1人〜".
    pub players: String,
    /// Expected play time, e.g. "5-10分".
    pub duration: String,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Number of dice the game uses (1-10).
    pub dice_count: u8,
    /// Categories, never empty.
    pub category: Vec<Category>,
    /// Free-text tags.
    pub tags: Vec<String>,
    /// First publication date.
    pub published_at: NaiveDate,
    /// Last update date, never before `published_at`.
    pub updated_at: Option<NaiveDate>,
    /// Whether the game is highlighted on the front page.
    pub featured: bool,
    /// Game-specific settings passed through to the component.
    pub config: Option<toml::Table>,
}

/// Lowest permitted dice count.
pub const MIN_DICE: i64 = 1;
/// Highest permitted dice count.
pub const MAX_DICE: i64 = 10;

impl GameMetadata {
    /// Parse and validate TOML front matter for the game `record`.
    pub fn from_toml(record: &str, source: &str) -> ContentResult<Self> {
        let table: Table = toml::from_str(source).map_err(|e| ContentError::Parse {
            record: record.to_string(),
            message: e.message().to_string(),
            src: NamedSource::new(record, source.to_string()),
            span: e.span().map(SourceSpan::from),
        })?;
        let mut fields = Fields { record, table };

        let title = fields.text("title")?;
        let component = fields.text("component")?;
        let description = fields.text("description")?;
        let players = fields.text("players")?;
        let duration = fields.text("duration")?;
        let difficulty = fields.required("difficulty", None)?;

        let raw_count: i64 = fields.required("dice_count", Some("diceCount"))?;
        let dice_count = u8::try_from(raw_count)
            .ok()
            .filter(|n| (MIN_DICE..=MAX_DICE).contains(&i64::from(*n)))
            .ok_or_else(|| {
                fields.invalid(
                    "dice_count",
                    format!("must be between {MIN_DICE} and {MAX_DICE}, got {raw_count}"),
                )
            })?;

        let category: Vec<Category> = fields.required("category", None)?;
        if category.is_empty() {
            return Err(fields.invalid("category", "must list at least one category".to_string()));
        }
        let tags = fields.optional("tags", None)?.unwrap_or_default();

        let published_at = fields
            .date("published_at", Some("publishedAt"))?
            .ok_or_else(|| fields.invalid("published_at", "is required".to_string()))?;
        let updated_at = fields.date("updated_at", Some("updatedAt"))?;
        if let Some(updated) = updated_at.filter(|d| *d < published_at) {
            return Err(fields.invalid(
                "updated_at",
                format!("({updated}) is before published_at ({published_at})"),
            ));
        }

        let featured = fields.optional("featured", None)?.unwrap_or(false);
        let config = fields.optional("config", None)?;

        Ok(Self {
            title,
            component,
            description,
            players,
            duration,
            difficulty,
            dice_count,
            category,
            tags,
            published_at,
            updated_at,
            featured,
            config,
        })
    }

    /// The most recent of the publish and update dates.
    pub fn last_modified(&self) -> NaiveDate {
        self.updated_at.unwrap_or(self.published_at)
    }

    /// Whether the game belongs to `category`.
    pub fn has_category(&self, category: Category) -> bool {
        self.category.contains(&category)
    }
}

/// Front matter keys, taken one at a time so every error names its field.
struct Fields<'a> {
    record: &'a str,
    table: Table,
}

impl Fields<'_> {
    fn invalid(&self, field: &'static str, reason: String) -> ContentError {
        ContentError::InvalidField {
            record: self.record.to_string(),
            field,
            reason,
        }
    }

    /// Remove `field`, or its camelCase `alias`, from the table.
    fn take(&mut self, field: &str, alias: Option<&str>) -> Option<Value> {
        self.table
            .remove(field)
            .or_else(|| alias.and_then(|a| self.table.remove(a)))
    }

    fn optional<T: DeserializeOwned>(
        &mut self,
        field: &'static str,
        alias: Option<&str>,
    ) -> ContentResult<Option<T>> {
        self.take(field, alias)
            .map(|value| {
                value
                    .try_into()
                    .map_err(|e| self.invalid(field, format!("is invalid: {}", e.message())))
            })
            .transpose()
    }

    fn required<T: DeserializeOwned>(
        &mut self,
        field: &'static str,
        alias: Option<&str>,
    ) -> ContentResult<T> {
        self.optional(field, alias)?
            .ok_or_else(|| self.invalid(field, "is required".to_string()))
    }

    /// A required string that must not be blank.
    fn text(&mut self, field: &'static str) -> ContentResult<String> {
        let value: String = self.required(field, None)?;
        if value.trim().is_empty() {
            return Err(self.invalid(field, "must not be empty".to_string()));
        }
        Ok(value)
    }

    fn date(
        &mut self,
        field: &'static str,
        alias: Option<&str>,
    ) -> ContentResult<Option<NaiveDate>> {
        match self.take(field, alias) {
            None => Ok(None),
            Some(Value::Datetime(dt)) => to_date(&dt)
                .map(Some)
                .ok_or_else(|| self.invalid(field, format!("is not a date: {dt}"))),
            Some(other) => Err(self.invalid(field, format!("is not a date: {other}"))),
        }
    }
}

/// The calendar date of a TOML date or datetime.
fn to_date(dt: &Datetime) -> Option<NaiveDate> {
    let date = dt.date?;
    NaiveDate::from_ymd_opt(
        i32::from(date.year),
        u32::from(date.month),
        u32::from(date.day),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
title = "ぞろ目チャレンジ"
component = "ZoromeGame.vue"
description = "全てのサイコロが同じ目になるまで振り続けよう"
players = "1人〜"
duration = "5-10分"
difficulty = "初級"
dice_count = 3
category = ["運ゲー", "統計"]
tags = ["ぞろ目", "確率"]
published_at = 2024-01-15
featured = true

[config]
max_dice = 6
"#;

    fn with_line(key: &str, line: &str) -> String {
        VALID
            .lines()
            .map(|l| if l.starts_with(key) { line } else { l })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn field_of(err: ContentError) -> &'static str {
        match err {
            ContentError::InvalidField { field, .. } => field,
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn valid_front_matter() {
        let meta = GameMetadata::from_toml("zorome", VALID).unwrap();
        assert_eq!(meta.title, "ぞろ目チャレンジ");
        assert_eq!(meta.difficulty, Difficulty::Beginner);
        assert_eq!(meta.dice_count, 3);
        assert_eq!(meta.category, vec![Category::Luck, Category::Statistics]);
        assert_eq!(meta.tags.len(), 2);
        assert_eq!(meta.published_at, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(meta.featured);
        let config = meta.config.unwrap();
        assert_eq!(config["max_dice"].as_integer(), Some(6));
    }

    #[test]
    fn featured_defaults_to_false() {
        let src = with_line("featured", "");
        let meta = GameMetadata::from_toml("zorome", &src).unwrap();
        assert!(!meta.featured);
    }

    #[test]
    fn optional_fields_absent() {
        let src = VALID.replace("tags = [\"ぞろ目\", \"確率\"]", "");
        let src = src.split("[config]").next().unwrap_or_default().to_string();
        let meta = GameMetadata::from_toml("zorome", &src).unwrap();
        assert!(meta.tags.is_empty());
        assert!(meta.config.is_none());
        assert!(meta.updated_at.is_none());
    }

    #[test]
    fn camel_case_aliases() {
        let src = with_line("dice_count", "diceCount = 2");
        let src = src.replace("published_at", "publishedAt");
        let meta = GameMetadata::from_toml("zorome", &src).unwrap();
        assert_eq!(meta.dice_count, 2);
    }

    #[test]
    fn english_enum_aliases() {
        let src = with_line("difficulty", "difficulty = \"expert\"");
        let src = with_line_in(&src, "category", "category = [\"party\", \"trpg\"]");
        let meta = GameMetadata::from_toml("zorome", &src).unwrap();
        assert_eq!(meta.difficulty, Difficulty::Expert);
        assert_eq!(meta.category, vec![Category::Party, Category::Trpg]);
    }

    fn with_line_in(src: &str, key: &str, line: &str) -> String {
        src.lines()
            .map(|l| if l.starts_with(key) { line } else { l })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_title_rejected() {
        let src = with_line("title", "title = \"  \"");
        let err = GameMetadata::from_toml("zorome", &src).unwrap_err();
        assert_eq!(field_of(err), "title");
    }

    #[test]
    fn dice_count_out_of_range() {
        for bad in [
            "dice_count = 0",
            "dice_count = 11",
            "dice_count = -1",
            "dice_count = 300",
        ] {
            let src = with_line("dice_count", bad);
            let err = GameMetadata::from_toml("zorome", &src).unwrap_err();
            assert_eq!(field_of(err), "dice_count");
        }
    }

    #[test]
    fn dice_count_bounds_accepted() {
        for ok in ["dice_count = 1", "dice_count = 10"] {
            assert!(GameMetadata::from_toml("zorome", &with_line("dice_count", ok)).is_ok());
        }
    }

    #[test]
    fn fractional_dice_count_rejected() {
        let err = GameMetadata::from_toml("zorome", &with_line("dice_count", "dice_count = 2.5"))
            .unwrap_err();
        assert_eq!(field_of(err), "dice_count");
    }

    #[test]
    fn unknown_difficulty_rejected() {
        let src = with_line("difficulty", "difficulty = \"神級\"");
        let err = GameMetadata::from_toml("zorome", &src).unwrap_err();
        assert_eq!(err.record(), Some("zorome"));
        let message = err.to_string();
        assert!(message.contains("`difficulty`"), "{message}");
        assert!(message.contains("神級"), "{message}");
        assert_eq!(field_of(err), "difficulty");
    }

    #[test]
    fn wrong_types_name_their_field() {
        for (key, line) in [
            ("featured", "featured = \"yes\""),
            ("tags", "tags = \"ぞろ目\""),
            ("title", "title = 42"),
        ] {
            let err = GameMetadata::from_toml("zorome", &with_line(key, line)).unwrap_err();
            assert_eq!(field_of(err), key);
        }
        let src = VALID.replace("[config]\nmax_dice = 6", "config = 3");
        let err = GameMetadata::from_toml("zorome", &src).unwrap_err();
        assert_eq!(field_of(err), "config");
    }

    #[test]
    fn toml_syntax_error_carries_span() {
        let err = GameMetadata::from_toml("zorome", "title = \"unterminated\n").unwrap_err();
        match err {
            ContentError::Parse { record, span, .. } => {
                assert_eq!(record, "zorome");
                assert!(span.is_some());
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn empty_category_rejected() {
        let err =
            GameMetadata::from_toml("zorome", &with_line("category", "category = []")).unwrap_err();
        assert_eq!(field_of(err), "category");
    }

    #[test]
    fn unknown_category_rejected() {
        let src = with_line("category", "category = [\"麻雀\"]");
        let err = GameMetadata::from_toml("zorome", &src).unwrap_err();
        assert_eq!(field_of(err), "category");
    }

    #[test]
    fn missing_field_rejected() {
        let err = GameMetadata::from_toml("zorome", &with_line("component", "")).unwrap_err();
        assert_eq!(field_of(err), "component");
    }

    #[test]
    fn updated_before_published_rejected() {
        let head = VALID.split("[config]").next().unwrap_or_default();
        let src = format!("{head}\nupdated_at = 2023-12-31\n");
        let err = GameMetadata::from_toml("zorome", &src).unwrap_err();
        assert_eq!(field_of(err), "updated_at");
    }

    #[test]
    fn updated_at_and_last_modified() {
        let head = VALID.split("[config]").next().unwrap_or_default();
        let src = format!("{head}\nupdated_at = 2024-03-01\n");
        let meta = GameMetadata::from_toml("zorome", &src).unwrap();
        assert_eq!(meta.last_modified(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn time_only_published_at_rejected() {
        let src = with_line("published_at", "published_at = 07:32:00");
        let err = GameMetadata::from_toml("zorome", &src).unwrap_err();
        assert_eq!(field_of(err), "published_at");
    }

    #[test]
    fn enum_parsing_from_str() {
        assert_eq!("上級".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert_eq!("Beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!("計算ゲー".parse::<Category>(), Ok(Category::Calculation));
        assert_eq!("roleplay".parse::<Category>(), Ok(Category::RolePlay));
        assert!("chess".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_labels() {
        let meta = GameMetadata::from_toml("zorome", VALID).unwrap();
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["difficulty"], "初級");
        assert_eq!(json["category"][0], "運ゲー");
        assert_eq!(json["diceCount"], 3);
    }
}
