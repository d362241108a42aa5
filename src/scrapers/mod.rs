use scraper::Html;
use serde::Serialize;

pub mod guru;
pub mod pfr;

pub const PFR_BASE_URL: &str = "https://www.pro-football-reference.com";
pub const GURU_BASE_URL: &str = "http://rotoguru1.com/cgi-bin/";

/// A scraper that turns one fetched page into one record.
///
/// Scraping never fails: fields that cannot be located are left at their
/// default and named in the record's error ledger.
pub trait PageScraper {
    type Record: Serialize;

    fn scrape(&self, document: &Html) -> Self::Record;
}

/// Prefixes a site-relative link fragment with the site's base URL.
pub fn qualify(base_url: &str, fragment: &str) -> String {
    format!("{base_url}{fragment}")
}
