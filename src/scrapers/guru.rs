//! rotoguru: weekly player list and per-player detail pages.

use super::{qualify, PageScraper, GURU_BASE_URL};
use crate::document::{selector, DocumentView, Query};
use crate::domain::RosterPlayer;
use crate::extract::{extract, Locate, Lookup, Read, Step};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{info, warn};

static LISTING: Lazy<Selector> = Lazy::new(|| selector("pre").expect("static selector"));
static PLAYER_ANCHOR: Lazy<Selector> =
    Lazy::new(|| selector(r#"a[href^="playrf"]"#).expect("static selector"));
static NAME_LABEL: Lazy<Selector> =
    Lazy::new(|| selector(r#"font[size="3"]"#).expect("static selector"));
static BOLD: Lazy<Selector> = Lazy::new(|| selector("b").expect("static selector"));

const POSITION_LABEL: &str = "DraftKings position: ";

/// Weekly stats listing; every player links to a `playrf` detail page.
pub struct PlayerListScraper;

impl PlayerListScraper {
    pub fn player_links(&self, document: &Html) -> Vec<String> {
        let view = DocumentView::new(document);
        let Some(listing) = view.find_first(&Query::new(&LISTING)) else {
            warn!("Player list has no listing block");
            return Vec::new();
        };

        DocumentView::find_all_in(listing, &Query::new(&PLAYER_ANCHOR))
            .into_iter()
            .filter_map(|anchor| DocumentView::attr_of(anchor, "href"))
            .map(|href| qualify(GURU_BASE_URL, href))
            .collect()
    }
}

/// Player detail page.
pub struct PlayerPageScraper;

impl PlayerPageScraper {
    pub fn scrape_basic_info(&self, view: &DocumentView<'_>, player: &mut RosterPlayer) {
        let ledger = &mut player.errors;
        let root = Some(view.root());

        let name = Locate::new(
            vec![Step::Find(Query::new(&NAME_LABEL)), Step::Find(Query::new(&BOLD))],
            Read::Text,
        );
        (player.first, player.last) = match name.walk(view.root()) {
            Lookup::Found(full_name) => split_name(&full_name),
            Lookup::Empty | Lookup::Absent => None,
        }
        .unwrap_or_else(|| {
            ledger.record("name");
            (String::new(), String::new())
        });

        player.position = extract(
            root,
            &Locate::new(vec![Step::AfterText(POSITION_LABEL)], Read::Text),
            "position",
            ledger,
        );
    }
}

impl PageScraper for PlayerPageScraper {
    type Record = RosterPlayer;

    fn scrape(&self, document: &Html) -> RosterPlayer {
        let view = DocumentView::new(document);
        let mut player = RosterPlayer::default();

        self.scrape_basic_info(&view, &mut player);

        info!(
            "Scraped {} {} ({})",
            player.first, player.last, player.position
        );
        player
    }
}

/// `"Last, First"` gives `(First, Last)`. Team defenses are printed without
/// a comma, so a name containing `Defense` splits on its first two words.
fn split_name(full_name: &str) -> Option<(String, String)> {
    let mut parts = full_name.split(", ");
    if let (Some(last), Some(first)) = (parts.next(), parts.next()) {
        return Some((first.to_string(), last.to_string()));
    }

    if full_name.contains("Defense") {
        let mut parts = full_name.split(' ');
        if let (Some(first), Some(last)) = (parts.next(), parts.next()) {
            return Some((first.to_string(), last.to_string()));
        }
    }

    None
}

pub fn scrape_player(document: &Html) -> RosterPlayer {
    PlayerPageScraper.scrape(document)
}
