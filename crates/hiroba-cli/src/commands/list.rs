use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use hiroba_content::{Category, GameEntry};

pub fn run(dir: &Path, category: Option<&str>, featured: bool) -> Result<(), String> {
    let games = super::load_games(dir)?;

    let category = category.map(str::parse::<Category>).transpose()?;

    let results: Vec<&GameEntry> = games
        .iter()
        .filter(|g| category.is_none_or(|c| g.data.has_category(c)))
        .filter(|g| !featured || g.data.featured)
        .collect();

    if results.is_empty() {
        println!("  No games found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Slug",
        "Title",
        "Difficulty",
        "Dice",
        "Players",
        "Duration",
        "Categories",
    ]);

    for game in &results {
        let title = if game.data.featured {
            format!("★ {}", game.data.title)
        } else {
            game.data.title.clone()
        };
        let categories: Vec<&str> = game.data.category.iter().map(|c| c.label()).collect();

        table.add_row(vec![
            game.slug.clone(),
            title,
            game.data.difficulty.to_string(),
            game.data.dice_count.to_string(),
            game.data.players.clone(),
            game.data.duration.clone(),
            categories.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} games", results.len());

    Ok(())
}
