mod overrides;

pub use overrides::OverrideTable;

use crate::document::{selector, DocumentView, Query, TextFilter};
use crate::extract::Lookup;
use crate::scrapers::qualify;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use tracing::{debug, warn};

static ANCHOR: Lazy<Selector> = Lazy::new(|| selector("a").expect("static selector"));

/// Maps a player's printed name to a roster link, with the override table
/// as a fallback for names the roster spells differently.
pub struct NameResolver<'t> {
    overrides: &'t OverrideTable,
    base_url: &'t str,
}

impl<'t> NameResolver<'t> {
    pub fn new(overrides: &'t OverrideTable, base_url: &'t str) -> Self {
        Self {
            overrides,
            base_url,
        }
    }

    /// Resolves `first last` against the anchors under `roster`.
    ///
    /// An anchor that exists but has no `href` resolves to `""`, whether it
    /// was found under the printed name or the alternate one. Only a missing
    /// anchor moves on to the next fallback.
    pub fn resolve(&self, first: &str, last: &str, roster: Option<ElementRef<'_>>) -> String {
        let full_name = format!("{first} {last}");

        let lookup = match roster.map(|roster| anchor_link(roster, &full_name)) {
            Some(Lookup::Absent) | None => self.retry_alternate(&full_name, roster),
            Some(lookup) => lookup,
        };

        match lookup {
            Lookup::Found(href) => qualify(self.base_url, &href),
            Lookup::Empty => String::new(),
            Lookup::Absent => self.fixed_link(&full_name),
        }
    }

    fn retry_alternate(&self, full_name: &str, roster: Option<ElementRef<'_>>) -> Lookup {
        let Some(alternate) = self.overrides.alternate_name(full_name) else {
            return Lookup::Absent;
        };

        warn!("No roster link for {full_name}, retrying as {alternate}");
        roster.map_or(Lookup::Absent, |roster| anchor_link(roster, alternate))
    }

    fn fixed_link(&self, full_name: &str) -> String {
        match self.overrides.link_fragment(full_name) {
            Some(fragment) => {
                warn!("Using fixed link override for {full_name}");
                qualify(self.base_url, fragment)
            }
            None => {
                debug!("No link found for {full_name}");
                String::new()
            }
        }
    }
}

fn anchor_link(roster: ElementRef<'_>, name: &str) -> Lookup {
    let query = Query::new(&ANCHOR).with_text(TextFilter::exact(name));

    match DocumentView::find_first_in(roster, &query) {
        Some(anchor) => DocumentView::attr_of(anchor, "href")
            .map_or(Lookup::Empty, |href| Lookup::Found(href.to_string())),
        None => Lookup::Absent,
    }
}
