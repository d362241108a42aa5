//! Weekly American-football statistics scraped from pro-football-reference
//! and rotoguru pages.
//!
//! Scrapers never fail on a malformed page. Every record carries an `errors`
//! ledger naming the fields that fell back to their default.

pub mod clients;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod extract;
pub mod resolver;
pub mod scrapers;

pub use document::DocumentView;
pub use domain::{GameDetail, PlayerGameLog, RosterPlayer, TeamGame, WeekStats, Weeks};
pub use error::{Result, ScrapeError};
pub use extract::ErrorLedger;
pub use resolver::{NameResolver, OverrideTable};
pub use scrapers::PageScraper;
