//! pro-football-reference: schedule, roster, box-score and game-log pages.

use super::{qualify, PageScraper, PFR_BASE_URL};
use crate::document::{selector, DocumentView, Query, TextFilter};
use crate::domain::{GameDetail, PlayerGameLog, TeamGame, WeekStats, Weeks};
use crate::extract::{
    extract, extract_stat, participation_snaps, resolve, ErrorLedger, Locate, Lookup, Read, Step,
};
use crate::resolver::{NameResolver, OverrideTable};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, info};

macro_rules! static_selector {
    ($name:ident, $css:expr) => {
        static $name: Lazy<Selector> = Lazy::new(|| selector($css).expect("static selector"));
    };
}

static_selector!(GAMES_CONTAINER, "div#all_games tbody");
static_selector!(FANTASY_CONTAINER, "div#all_fantasy tbody");
static_selector!(WEEK_HEADER, r#"th[data-stat="week_num"]"#);
static_selector!(WEEK_CELL, r#"td[data-stat="week_num"]"#);
static_selector!(ANCHOR, "a");

static_selector!(OTHER_SCORES_LINK, "div#div_other_scores h2 a");
static_selector!(SCOREBOX, "div.scorebox");
static_selector!(SCOREBOX_META, "div.scorebox_meta");
static_selector!(STRONG, "strong");
static_selector!(GAME_INFO, "table#game_info");
static_selector!(INFO_HEADER, r#"th[data-stat="info"]"#);
static_selector!(TEAM_BLOCK, "div:not([class])");
static_selector!(TEAM_NAME, r#"a[itemprop="name"]"#);
static_selector!(TEAM_SCORE, "div.score");
static_selector!(HOME_SNAPS, "table#home_snap_counts");
static_selector!(VISITOR_SNAPS, "table#vis_snap_counts");

static_selector!(PLAYER_META, "div#meta");
static_selector!(PLAYER_NAME, r#"h1[itemprop="name"]"#);
static_selector!(AFFILIATION, r#"span[itemprop="affiliation"]"#);
static_selector!(BIRTH, "span#necro-birth");

static STADIUM_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new("Stadium").unwrap());
static HTM_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.htm$").unwrap());

/// Game-log columns, in [`WeekStats`] field order after `year` and `week`.
const STAT_COLUMNS: [&str; 16] = [
    "team",
    "rush_att",
    "rush_yds",
    "rush_td",
    "fumbles",
    "targets",
    "rec",
    "rec_yds",
    "rec_td",
    "pass_att",
    "pass_cmp",
    "pass_yds",
    "pass_td",
    "pass_int",
    "pass_sacked",
    "offense",
];

static STAT_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    STAT_COLUMNS
        .iter()
        .map(|column| selector(&format!(r#"td[data-stat="{column}"]"#)).expect("static selector"))
        .collect()
});

/// Rewrites a player page URL into the URL of that player's game log for `year`.
pub fn gamelog_url(url: &str, year: i32) -> String {
    HTM_SUFFIX
        .replace(url, format!("/gamelog/{year}/").as_str())
        .into_owned()
}

/// Season schedule page.
pub struct GameListScraper;

impl GameListScraper {
    /// Box-score links for every game of `week`; rows without a box score give `""`.
    pub fn week_links(&self, document: &Html, week: u32) -> Vec<String> {
        let view = DocumentView::new(document);
        let Some(container) = view.find_first(&Query::new(&GAMES_CONTAINER)) else {
            debug!("Schedule page has no games table");
            return Vec::new();
        };

        let week_text = week.to_string();
        let header = Query::new(&WEEK_HEADER).with_text(TextFilter::exact(week_text));
        let boxscore = Query::new(&ANCHOR).with_text(TextFilter::exact("boxscore"));

        DocumentView::find_all_in(container, &header)
            .into_iter()
            .map(|cell| {
                DocumentView::parent_of(cell)
                    .and_then(|row| DocumentView::find_first_in(row, &boxscore))
                    .and_then(|anchor| DocumentView::attr_of(anchor, "href"))
                    .map_or_else(String::new, |href| qualify(PFR_BASE_URL, href))
            })
            .collect()
    }
}

/// Fantasy roster page, used to turn printed names into player page links.
pub struct PlayerListScraper<'t> {
    resolver: NameResolver<'t>,
}

impl<'t> PlayerListScraper<'t> {
    pub fn new(overrides: &'t OverrideTable) -> Self {
        Self {
            resolver: NameResolver::new(overrides, PFR_BASE_URL),
        }
    }

    pub fn player_link(&self, document: &Html, first: &str, last: &str) -> String {
        let view = DocumentView::new(document);
        let roster = view.find_first(&Query::new(&FANTASY_CONTAINER));
        self.resolver.resolve(first, last, roster)
    }
}

/// Box-score page. Snap counts are only present once the page has been rendered.
pub struct GamePageScraper;

impl GamePageScraper {
    pub fn scrape_basic_info(&self, view: &DocumentView<'_>, game: &mut GameDetail) {
        let ledger = &mut game.errors;
        let root = Some(view.root());

        game.week = extract(
            root,
            &Locate::new(
                vec![Step::Find(Query::new(&OTHER_SCORES_LINK))],
                Read::LastToken,
            ),
            "week",
            ledger,
        );

        let meta = view
            .find_first(&Query::new(&SCOREBOX))
            .and_then(|scorebox| DocumentView::find_first_in(scorebox, &Query::new(&SCOREBOX_META)));

        game.start_time = extract(meta, &meta_value("Start Time"), "start_time", ledger);
        game.stadium = extract(
            meta,
            &Locate::new(
                vec![
                    Step::Find(
                        Query::new(&STRONG).with_text(TextFilter::Pattern((*STADIUM_LABEL).clone())),
                    ),
                    Step::Parent,
                    Step::Find(Query::new(&ANCHOR)),
                ],
                Read::Text,
            ),
            "stadium",
            ledger,
        );
        game.length = extract(meta, &meta_value("Time of Game"), "length", ledger);

        let game_info = view.find_first(&Query::new(&GAME_INFO));
        game.roof = extract(game_info, &info_value("Roof"), "roof", ledger);
        game.surface = extract(game_info, &info_value("Surface"), "surface", ledger);
        game.spread = extract(game_info, &info_value("Vegas Line"), "spread", ledger);
        game.over_under = extract(game_info, &info_value("Over/Under"), "over_under", ledger);
    }

    /// One entry per team block in the scorebox, paired by position with the
    /// home and visitor snap-count tables.
    pub fn scrape_team_info(&self, view: &DocumentView<'_>, game: &mut GameDetail) {
        let ledger = &mut game.errors;
        let Some(scorebox) = view.find_first(&Query::new(&SCOREBOX)) else {
            ledger.record("team_games");
            return;
        };

        let snap_tables = [
            view.find_first(&Query::new(&HOME_SNAPS)),
            view.find_first(&Query::new(&VISITOR_SNAPS)),
        ];

        for (index, team) in DocumentView::children_of(scorebox, &Query::new(&TEAM_BLOCK))
            .into_iter()
            .enumerate()
        {
            let team = Some(team);
            game.team_games.push(TeamGame {
                name: extract(team, &Locate::text_of(Query::new(&TEAM_NAME)), "name", ledger),
                score: extract(team, &Locate::text_of(Query::new(&TEAM_SCORE)), "score", ledger),
                snaps: participation_snaps(snap_tables.get(index).copied().flatten(), ledger),
            });
        }

        if game.team_games.is_empty() {
            ledger.record("team_games");
        }
    }
}

fn meta_value(label: &'static str) -> Locate<'static> {
    Locate::new(
        vec![
            Step::Find(Query::new(&STRONG).with_text(TextFilter::contains(label))),
            Step::Parent,
        ],
        Read::After(": "),
    )
}

fn info_value(label: &'static str) -> Locate<'static> {
    Locate::new(
        vec![
            Step::Find(Query::new(&INFO_HEADER).with_text(TextFilter::contains(label))),
            Step::NextSibling,
        ],
        Read::Text,
    )
}

impl PageScraper for GamePageScraper {
    type Record = GameDetail;

    fn scrape(&self, document: &Html) -> GameDetail {
        let view = DocumentView::new(document);
        let mut game = GameDetail::new();

        self.scrape_basic_info(&view, &mut game);
        self.scrape_team_info(&view, &mut game);

        info!(
            "Scraped week {} game at {} ({} failed fields)",
            game.week,
            game.stadium,
            game.errors.len()
        );
        game
    }
}

/// Player game-log page for one season.
pub struct PlayerPageScraper {
    year: i32,
    weeks: Weeks,
}

impl PlayerPageScraper {
    pub fn new(year: i32, weeks: impl Into<Weeks>) -> Self {
        Self {
            year,
            weeks: weeks.into(),
        }
    }

    pub fn scrape_basic_info(&self, view: &DocumentView<'_>, player: &mut PlayerGameLog) {
        let ledger = &mut player.errors;
        let meta = view.find_first(&Query::new(&PLAYER_META));

        (player.first, player.last) = player_name(meta, ledger);
        player.team = extract(meta, &Locate::text_of(Query::new(&AFFILIATION)), "team", ledger);

        if let Some((year, month, day)) = birth_date(meta, ledger) {
            player.birth_year = year;
            player.birth_month = month;
            player.birth_day = day;
        }
    }

    /// Appends the stats row for `week`; weeks without a row add nothing.
    pub fn scrape_game_stats(&self, view: &DocumentView<'_>, week: u32, player: &mut PlayerGameLog) {
        let week_cell = Query::new(&WEEK_CELL).with_text(TextFilter::exact(week.to_string()));
        let Some(row) = view
            .find_first(&week_cell)
            .and_then(DocumentView::parent_of)
        else {
            debug!("No game log row for week {week}");
            return;
        };

        let [team, rush_att, rush_yd, rush_td, fum, tgt, rec, rec_yd, rec_td, pass_att, pass_cmp, pass_yd, pass_td, int, sacked, snaps]: [String; 16] =
            std::array::from_fn(|i| extract_stat(row, Query::new(&STAT_SELECTORS[i])));

        player.games.push(WeekStats {
            year: self.year,
            week,
            team,
            rush_att,
            rush_yd,
            rush_td,
            fum,
            tgt,
            rec,
            rec_yd,
            rec_td,
            pass_att,
            pass_cmp,
            pass_yd,
            pass_td,
            int,
            sacked,
            snaps,
        });
    }
}

impl PageScraper for PlayerPageScraper {
    type Record = PlayerGameLog;

    fn scrape(&self, document: &Html) -> PlayerGameLog {
        let view = DocumentView::new(document);
        let mut player = PlayerGameLog::new();

        self.scrape_basic_info(&view, &mut player);
        for week in self.weeks.iter() {
            self.scrape_game_stats(&view, week, &mut player);
        }

        info!(
            "Scraped {} {}: {} of {} weeks ({} failed fields)",
            player.first,
            player.last,
            player.games.len(),
            self.weeks.len(),
            player.errors.len()
        );
        player
    }
}

/// Splits the page heading at the first space into first name and the rest.
fn player_name(meta: Option<scraper::ElementRef<'_>>, ledger: &mut ErrorLedger) -> (String, String) {
    let lookup = meta.map_or(Lookup::Absent, |meta| {
        Locate::text_of(Query::new(&PLAYER_NAME)).walk(meta)
    });

    let split = match &lookup {
        Lookup::Found(full_name) => full_name
            .split_once(' ')
            .map(|(first, last)| (first.to_string(), last.to_string())),
        Lookup::Empty | Lookup::Absent => None,
    };

    split.unwrap_or_else(|| {
        ledger.record("name");
        (String::new(), String::new())
    })
}

/// Reads `data-birth` as `YYYY-MM-DD`. Either all three parts are returned or
/// `birth_date` is recorded.
fn birth_date(
    meta: Option<scraper::ElementRef<'_>>,
    ledger: &mut ErrorLedger,
) -> Option<(String, String, String)> {
    let locate = Locate::new(vec![Step::Find(Query::new(&BIRTH))], Read::Attr("data-birth"));
    let text = resolve(
        meta.map_or(Lookup::Absent, |meta| locate.walk(meta)),
        "birth_date",
        ledger,
    );

    let parts = NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .ok()
        .and_then(|_| {
            let mut parts = text.splitn(3, '-').map(str::to_string);
            Some((parts.next()?, parts.next()?, parts.next()?))
        });

    if parts.is_none() {
        ledger.record("birth_date");
    }
    parts
}

/// Convenience wrapper: basic info plus one entry per requested week.
pub fn scrape_player(document: &Html, year: i32, weeks: impl Into<Weeks>) -> PlayerGameLog {
    PlayerPageScraper::new(year, weeks).scrape(document)
}

pub fn scrape_game(document: &Html) -> GameDetail {
    GamePageScraper.scrape(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamelog_url_replaces_suffix() {
        assert_eq!(
            gamelog_url("https://www.pro-football-reference.com/players/M/MahoPa00.htm", 2019),
            "https://www.pro-football-reference.com/players/M/MahoPa00/gamelog/2019/"
        );
        assert_eq!(gamelog_url("/players/M/MahoPa00.html", 2019), "/players/M/MahoPa00.html");
    }

    #[test]
    fn player_name_splits_on_first_space() {
        let html = Html::parse_fragment(
            r#"<div id="meta"><h1 itemprop="name">Odell Beckham Jr.</h1></div>"#,
        );
        let view = DocumentView::new(&html);
        let meta = view.find_first(&Query::new(&PLAYER_META));
        let mut ledger = ErrorLedger::new();

        assert_eq!(
            player_name(meta, &mut ledger),
            ("Odell".to_string(), "Beckham Jr.".to_string())
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn single_word_name_fails_as_a_whole() {
        let html = Html::parse_fragment(r#"<div id="meta"><h1 itemprop="name">Pele</h1></div>"#);
        let view = DocumentView::new(&html);
        let meta = view.find_first(&Query::new(&PLAYER_META));
        let mut ledger = ErrorLedger::new();

        assert_eq!(player_name(meta, &mut ledger), (String::new(), String::new()));
        assert!(ledger.contains("name"));
    }

    #[test]
    fn malformed_birth_date_fails_as_a_whole() {
        let html = Html::parse_fragment(
            r#"<div id="meta"><span id="necro-birth" data-birth="1995-09">Sept 1995</span></div>"#,
        );
        let view = DocumentView::new(&html);
        let meta = view.find_first(&Query::new(&PLAYER_META));
        let mut ledger = ErrorLedger::new();

        assert_eq!(birth_date(meta, &mut ledger), None);
        assert!(ledger.contains("birth_date"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn birth_date_keeps_source_digits() {
        let html = Html::parse_fragment(
            r#"<div id="meta"><span id="necro-birth" data-birth="1995-09-17">Sept 17</span></div>"#,
        );
        let view = DocumentView::new(&html);
        let meta = view.find_first(&Query::new(&PLAYER_META));
        let mut ledger = ErrorLedger::new();

        assert_eq!(
            birth_date(meta, &mut ledger),
            Some(("1995".into(), "09".into(), "17".into()))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn week_links_per_row() {
        let html = Html::parse_document(
            r#"<div id="all_games"><table><tbody>
                <tr><th data-stat="week_num">1</th><td><a href="/boxscores/201909050chi.htm">boxscore</a></td></tr>
                <tr><th data-stat="week_num">1</th><td>preview</td></tr>
                <tr><th data-stat="week_num">2</th><td><a href="/boxscores/201909150chi.htm">boxscore</a></td></tr>
            </tbody></table></div>"#,
        );

        assert_eq!(
            GameListScraper.week_links(&html, 1),
            vec![
                "https://www.pro-football-reference.com/boxscores/201909050chi.htm".to_string(),
                String::new(),
            ]
        );
        assert!(GameListScraper.week_links(&html, 9).is_empty());
    }

    #[test]
    fn blank_week_heading_is_not_an_error() {
        let html = Html::parse_document(
            r#"<div id="div_other_scores"><h2><a href="/years/2019/week_0.htm"></a></h2></div>"#,
        );
        let game = scrape_game(&html);

        assert_eq!(game.week, "");
        assert!(!game.errors.contains("week"));
        assert!(game.errors.contains("start_time"));
    }
}
