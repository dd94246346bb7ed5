pub mod check;
pub mod clear;
pub mod list;
pub mod odds;
pub mod record;
pub mod roll;
pub mod stats;

use std::path::Path;

use hiroba_content::GameCollection;
use hiroba_records::{FileStore, KvRecordStore, Locale, StoreConfig};

/// Open the record store kept under `data_dir`.
fn open_store(data_dir: &Path, locale: Locale) -> KvRecordStore<FileStore> {
    let config = StoreConfig::default().with_locale(locale);
    KvRecordStore::with_config(FileStore::new(data_dir), config)
}

/// Load the catalog, rendering any validation failure to stderr.
fn load_games(dir: &Path) -> Result<GameCollection, String> {
    hiroba_content::load_collection(dir).map_err(|e| {
        eprintln!("{:?}", miette::Report::new(e));
        "content validation failed".to_string()
    })
}
