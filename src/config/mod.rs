use crate::config::cli::Args;
use crate::error::{Result, ScrapeError};
use crate::resolver::OverrideTable;
use chrono::Datelike;
use clap::Parser;
use reqwest::Client;
use std::time::Duration;
use tracing::Level;

pub mod cli;

pub struct Config {
    pub args: Args,
    pub overrides: OverrideTable,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let overrides = OverrideTable::from_path(&args.overrides)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            args,
            overrides,
            http_client,
        })
    }

    pub fn log_level(&self) -> Result<Level> {
        self.args
            .log_level
            .parse()
            .map_err(|_| ScrapeError::Parse(format!("Invalid log level: {}", self.args.log_level)))
    }

    pub fn current_year() -> i32 {
        chrono::Local::now().year()
    }
}
