use std::path::Path;

pub fn run(dir: &Path) -> Result<(), String> {
    let games = super::load_games(dir)?;

    println!("  All checks passed for '{}'.", dir.display());
    println!(
        "  {} games, {} featured",
        games.len(),
        games.featured().count()
    );

    Ok(())
}
