//! Game catalog content for Dice Games Hiroba.
//!
//! Each game is a Markdown document whose TOML front matter, fenced by
//! `+++` lines, describes the game: title, component, difficulty,
//! categories and so on. The file stem is the game's slug, which is also
//! the key its play records are stored under.
//!
//! Loading is all-or-nothing: the first document that fails validation
//! aborts the load with a [`ContentError`] naming the file and field.

pub mod collection;
pub mod error;
pub mod front_matter;
pub mod schema;

pub use collection::{GameCollection, GameEntry, load_collection, parse_entry};
pub use error::{ContentError, ContentResult};
pub use schema::{Category, Difficulty, GameMetadata};
