use std::path::Path;

use hiroba_records::{GameRecord, Locale, RecordStore};

pub fn run(
    data_dir: &Path,
    locale: Locale,
    slug: &str,
    dice: Option<u32>,
    attempts: u32,
    content_dir: Option<&Path>,
) -> Result<(), String> {
    let catalog_dice = match content_dir {
        Some(dir) => {
            let games = super::load_games(dir)?;
            let game = games
                .get(slug)
                .ok_or_else(|| format!("game not found: \"{slug}\""))?;
            Some(u32::from(game.data.dice_count))
        }
        None => None,
    };

    let dice = dice
        .or(catalog_dice)
        .ok_or("--dice is required unless --dir names the game's catalog")?;

    let record = GameRecord::new(slug, dice, attempts);
    let date = record.date_string.clone();

    let mut store = super::open_store(data_dir, locale);
    if let Err(e) = store.save_record(record) {
        return Err(store.user_message(&e));
    }

    println!("  Saved: {slug} with {dice} dice in {attempts} attempts ({date}).");
    Ok(())
}
