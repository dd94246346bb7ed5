//! Loading a directory of game documents into a catalog.

use std::path::Path;

use tracing::debug;

use crate::error::{ContentError, ContentResult};
use crate::front_matter;
use crate::schema::{Category, Difficulty, GameMetadata};

/// One game document: its slug, validated metadata and Markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEntry {
    /// The file stem; joins content to stored play records.
    pub slug: String,
    /// Validated front matter.
    pub data: GameMetadata,
    /// Markdown following the front matter.
    pub body: String,
}

/// Parse a single document for the game `slug`.
pub fn parse_entry(slug: &str, text: &str) -> ContentResult<GameEntry> {
    let (fm, body) = front_matter::split(text).ok_or_else(|| ContentError::MissingFrontMatter {
        record: slug.to_string(),
    })?;
    let data = GameMetadata::from_toml(slug, fm)?;
    Ok(GameEntry {
        slug: slug.to_string(),
        data,
        body: body.to_string(),
    })
}

/// Load every `*.md` document in `dir`, failing on the first invalid one.
pub fn load_collection(dir: &Path) -> ContentResult<GameCollection> {
    let io_error = |path: &Path, source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| io_error(dir, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    paths.sort();

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::InvalidFileName { path: path.clone() })?;
        let text = std::fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
        let entry = parse_entry(slug, &text)?;
        debug!(slug = %entry.slug, title = %entry.data.title, "Loaded game");
        entries.push(entry);
    }

    Ok(GameCollection::new(entries))
}

/// The validated game catalog, newest publication first.
#[derive(Debug, Clone, Default)]
pub struct GameCollection {
    entries: Vec<GameEntry>,
}

impl GameCollection {
    /// Build a catalog, ordering entries newest first then by slug.
    pub fn new(mut entries: Vec<GameEntry>) -> Self {
        entries.sort_by(|a, b| {
            b.data
                .published_at
                .cmp(&a.data.published_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        Self { entries }
    }

    /// Look up a game by slug.
    pub fn get(&self, slug: &str) -> Option<&GameEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// All games, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameEntry> {
        self.entries.iter()
    }

    /// Games marked as featured.
    pub fn featured(&self) -> impl Iterator<Item = &GameEntry> {
        self.entries.iter().filter(|e| e.data.featured)
    }

    /// Games in `category`.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &GameEntry> {
        self.entries
            .iter()
            .filter(move |e| e.data.has_category(category))
    }

    /// Games of the given difficulty.
    pub fn by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &GameEntry> {
        self.entries
            .iter()
            .filter(move |e| e.data.difficulty == difficulty)
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn doc(title: &str, published: &str, featured: bool, category: &str) -> String {
        format!(
            r#"+++
title = "{title}"
component = "ZoromeGame.vue"
description = "A dice game"
players = "1人〜"
duration = "5分"
difficulty = "中級"
dice_count = 2
category = [{category}]
published_at = {published}
featured = {featured}
+++

# {title}
"#
        )
    }

    fn write_dir(docs: &[(&str, String)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, text) in docs {
            fs::write(dir.path().join(name), text).unwrap();
        }
        dir
    }

    #[test]
    fn parse_entry_keeps_body() {
        let text = doc("Zorome", "2024-01-01", false, "\"運ゲー\"");
        let entry = parse_entry("zorome", &text).unwrap();
        assert_eq!(entry.slug, "zorome");
        assert!(entry.body.contains("# Zorome"));
    }

    #[test]
    fn parse_entry_without_front_matter() {
        let err = parse_entry("plain", "# no front matter").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter { .. }));
        assert_eq!(err.record(), Some("plain"));
    }

    #[test]
    fn load_sorts_newest_first() {
        let dir = write_dir(&[
            ("old.md", doc("Old", "2023-05-01", false, "\"運ゲー\"")),
            ("new.md", doc("New", "2024-05-01", true, "\"統計\"")),
            ("notes.txt", "ignored".to_string()),
        ]);
        let games = load_collection(dir.path()).unwrap();
        assert_eq!(games.len(), 2);
        let slugs: Vec<&str> = games.iter().map(|g| g.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old"]);
    }

    #[test]
    fn catalog_queries() {
        let dir = write_dir(&[
            ("a.md", doc("A", "2024-01-01", true, "\"運ゲー\", \"統計\"")),
            ("b.md", doc("B", "2024-02-01", false, "\"TRPG\"")),
        ]);
        let games = load_collection(dir.path()).unwrap();
        assert_eq!(games.featured().count(), 1);
        assert_eq!(games.by_category(Category::Statistics).count(), 1);
        assert_eq!(games.by_category(Category::Trpg).next().unwrap().slug, "b");
        assert_eq!(games.by_difficulty(Difficulty::Intermediate).count(), 2);
        assert_eq!(games.by_difficulty(Difficulty::Expert).count(), 0);
        assert_eq!(games.get("a").unwrap().data.title, "A");
        assert!(games.get("missing").is_none());
    }

    #[test]
    fn one_bad_document_fails_the_whole_load() {
        let dir = write_dir(&[
            ("good.md", doc("Good", "2024-01-01", false, "\"運ゲー\"")),
            ("bad.md", doc("Bad", "2024-01-01", false, "")),
        ]);
        let err = load_collection(dir.path()).unwrap_err();
        match err {
            ContentError::InvalidField { record, field, .. } => {
                assert_eq!(record, "bad");
                assert_eq!(field, "category");
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_name_fails_the_load() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = write_dir(&[("good.md", doc("Good", "2024-01-01", false, "\"運ゲー\""))]);
        let name = OsStr::from_bytes(b"bad\xff.md");
        if fs::write(dir.path().join(name), "+++\n+++\n").is_err() {
            // Some filesystems refuse non-UTF-8 names outright.
            return;
        }
        let err = load_collection(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::InvalidFileName { .. }));
        assert_eq!(err.record(), None);
    }

    #[test]
    fn missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = load_collection(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert_eq!(err.record(), None);
    }

    #[test]
    fn empty_directory_is_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let games = load_collection(dir.path()).unwrap();
        assert!(games.is_empty());
    }
}
