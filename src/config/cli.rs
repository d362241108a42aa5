use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the player name/link override table
    #[arg(long, env = "GRIDIRON_OVERRIDES", default_value = "overrides/pfr.json")]
    pub overrides: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Every `source` is a local HTML file or an http(s) URL.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Scrape a rotoguru player page
    GuruPlayer { source: String },

    /// List player page links from the rotoguru weekly listing
    GuruPlayers { source: String },

    /// Scrape a pro-football-reference game log
    PfrPlayer {
        source: String,

        /// Season of the game log (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Comma-separated weeks to extract
        #[arg(long, value_delimiter = ',', required = true)]
        weeks: Vec<u32>,
    },

    /// Scrape a rendered pro-football-reference box score
    PfrGame { source: String },

    /// List box-score links for one week of a season schedule
    PfrGames {
        source: String,

        #[arg(long)]
        week: u32,
    },

    /// Resolve a player name against the fantasy roster page
    PfrResolve {
        source: String,
        first: String,
        last: String,
    },
}
