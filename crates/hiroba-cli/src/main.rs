//! CLI frontend for Dice Games Hiroba.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use hiroba_records::Locale;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hiroba",
    about = "Dice Games Hiroba: a catalog of dice games with play statistics",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding saved play records
    #[arg(long, global = true, env = "HIROBA_DATA_DIR", default_value = ".hiroba")]
    data_dir: PathBuf,

    /// Language for error messages shown to players (ja, en)
    #[arg(long, global = true, default_value = "ja")]
    lang: Locale,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every game document, failing on the first invalid one
    Check {
        /// Directory containing game .md files
        #[arg(short, long, default_value = "games")]
        dir: PathBuf,
    },

    /// List games in the catalog
    List {
        /// Only games in this category (label or English alias)
        #[arg(short, long)]
        category: Option<String>,

        /// Only featured games
        #[arg(short, long)]
        featured: bool,

        /// Directory containing game .md files
        #[arg(short, long, default_value = "games")]
        dir: PathBuf,
    },

    /// Roll six-sided dice and report a zorome
    Roll {
        /// Number of dice to roll
        #[arg(short = 'n', long, default_value = "2")]
        dice: usize,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the probability of a zorome
    Odds {
        /// Number of dice
        #[arg(short = 'n', long)]
        dice: u32,
    },

    /// Save a finished play attempt
    Record {
        /// Game slug
        slug: String,

        /// Number of dice used (defaults to the game's own count with --dir)
        #[arg(short = 'n', long)]
        dice: Option<u32>,

        /// Rolls needed to win
        #[arg(short, long)]
        attempts: u32,

        /// Check the slug against the catalog in this directory
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Show play statistics for a game
    Stats {
        /// Game slug
        slug: String,

        /// Only attempts played with this many dice
        #[arg(short = 'n', long)]
        dice: Option<u32>,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete all play records for a game
    Clear {
        /// Game slug
        slug: String,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = cli.data_dir;
    let locale = cli.lang;

    let result = match cli.command {
        Commands::Check { dir } => commands::check::run(&dir),
        Commands::List {
            category,
            featured,
            dir,
        } => commands::list::run(&dir, category.as_deref(), featured),
        Commands::Roll { dice, seed } => commands::roll::run(dice, seed),
        Commands::Odds { dice } => commands::odds::run(dice),
        Commands::Record {
            slug,
            dice,
            attempts,
            dir,
        } => commands::record::run(&data_dir, locale, &slug, dice, attempts, dir.as_deref()),
        Commands::Stats { slug, dice, json } => {
            commands::stats::run(&data_dir, locale, &slug, dice, json)
        }
        Commands::Clear { slug } => commands::clear::run(&data_dir, locale, &slug),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
