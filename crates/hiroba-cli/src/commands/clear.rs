use std::path::Path;

use hiroba_records::{Locale, RecordStore};

pub fn run(data_dir: &Path, locale: Locale, slug: &str) -> Result<(), String> {
    let mut store = super::open_store(data_dir, locale);
    if let Err(e) = store.clear_records(slug) {
        return Err(store.user_message(&e));
    }

    println!("  Cleared records for '{slug}'.");
    Ok(())
}
