use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use hiroba_records::{GameStats, Locale, RecordStore};

pub fn run(
    data_dir: &Path,
    locale: Locale,
    slug: &str,
    dice: Option<u32>,
    json: bool,
) -> Result<(), String> {
    let store = super::open_store(data_dir, locale);
    let stats = store.get_stats(slug, dice);

    if json {
        let out = serde_json::to_string_pretty(&stats).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print!("{}", render(slug, dice, &stats));
    Ok(())
}

fn render(slug: &str, dice: Option<u32>, stats: &GameStats) -> String {
    let mut out = String::new();
    let scope = match dice {
        Some(n) => format!("{slug} ({n} dice)"),
        None => slug.to_string(),
    };
    out.push_str(&format!("  {}\n\n", scope.bold()));

    if stats.total_games == 0 {
        out.push_str("  No records yet.\n");
        return out;
    }

    let best = stats.best_score.map(|b| b.to_string()).unwrap_or_default();
    let average = stats
        .average_score
        .map(|a| format!("{a:.1}"))
        .unwrap_or_default();
    out.push_str(&format!("  games:   {}\n", stats.total_games));
    out.push_str(&format!("  best:    {}\n", best.green()));
    out.push_str(&format!("  average: {average}\n\n"));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Dice", "Attempts"]);
    for record in &stats.recent_records {
        table.add_row(vec![
            record.date_string.clone(),
            record.dice_count.to_string(),
            record.attempts.to_string(),
        ]);
    }
    out.push_str(&format!("{table}\n"));
    out
}
