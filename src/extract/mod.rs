//! Field extraction: a declarative path through a [`DocumentView`] that ends
//! in a read, with absent results recorded in an [`ErrorLedger`].

mod ledger;
pub(crate) mod snaps;

pub use ledger::ErrorLedger;
pub use snaps::participation_snaps;

use crate::document::{DocumentView, Node, Query};
use scraper::ElementRef;

/// Default for statistical columns that are missing or blank.
pub const STAT_DEFAULT: &str = "0";

/// Outcome of walking a [`Locate`] path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    /// The node exists but carries no text.
    Empty,
    /// A node or attribute on the path is missing, or the value is malformed.
    Absent,
}

impl Lookup {
    fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            Lookup::Empty
        } else {
            Lookup::Found(text.to_string())
        }
    }

    pub fn or_default(self, default: &str) -> String {
        match self {
            Lookup::Found(value) => value,
            Lookup::Empty | Lookup::Absent => default.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Step<'q> {
    /// First matching descendant of the current element.
    Find(Query<'q>),
    Parent,
    NextSibling,
    /// The node following the text node exactly equal to the label.
    AfterText(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub enum Read {
    Text,
    Attr(&'static str),
    /// Text after the first occurrence of the delimiter.
    After(&'static str),
    /// Last whitespace-separated token of the text.
    LastToken,
}

#[derive(Debug, Clone)]
pub struct Locate<'q> {
    steps: Vec<Step<'q>>,
    read: Read,
}

impl<'q> Locate<'q> {
    pub fn new(steps: Vec<Step<'q>>, read: Read) -> Self {
        Self { steps, read }
    }

    /// Shorthand for a single `Find` followed by a text read.
    pub fn text_of(query: Query<'q>) -> Self {
        Self::new(vec![Step::Find(query)], Read::Text)
    }

    pub fn walk(&self, scope: ElementRef<'_>) -> Lookup {
        let mut cursor = Node::Element(scope);

        for step in &self.steps {
            let next = match (step, cursor) {
                (Step::Find(query), Node::Element(element)) => {
                    DocumentView::find_first_in(element, query).map(Node::Element)
                }
                (Step::Parent, Node::Element(element)) => {
                    DocumentView::parent_of(element).map(Node::Element)
                }
                (Step::NextSibling, Node::Element(element)) => DocumentView::next_sibling_of(element),
                (Step::AfterText(label), Node::Element(element)) => {
                    DocumentView::sibling_after_text(element, label)
                }
                (_, Node::Text(_)) => None,
            };

            match next {
                Some(node) => cursor = node,
                None => return Lookup::Absent,
            }
        }

        match self.read {
            Read::Text => Lookup::from_text(&cursor.text()),
            Read::Attr(name) => cursor
                .element()
                .and_then(|element| DocumentView::attr_of(element, name))
                .map_or(Lookup::Absent, Lookup::from_text),
            Read::After(delimiter) => cursor
                .text()
                .split_once(delimiter)
                .map_or(Lookup::Absent, |(_, value)| Lookup::from_text(value)),
            Read::LastToken => cursor
                .text()
                .split_whitespace()
                .last()
                .map_or(Lookup::Empty, Lookup::from_text),
        }
    }
}

/// Walks `locate` from `scope`, returning `""` and recording `field` when the
/// path is broken. A missing scope counts as a broken path.
pub fn extract(
    scope: Option<ElementRef<'_>>,
    locate: &Locate<'_>,
    field: &'static str,
    ledger: &mut ErrorLedger,
) -> String {
    let lookup = scope.map_or(Lookup::Absent, |scope| locate.walk(scope));
    resolve(lookup, field, ledger)
}

/// Turns a lookup into a field value, recording `field` when it is absent.
pub fn resolve(lookup: Lookup, field: &'static str, ledger: &mut ErrorLedger) -> String {
    match lookup {
        Lookup::Found(value) => value,
        Lookup::Empty => String::new(),
        Lookup::Absent => {
            ledger.record(field);
            String::new()
        }
    }
}

/// Reads a statistical cell, falling back to [`STAT_DEFAULT`] without touching a ledger.
pub fn extract_stat(row: ElementRef<'_>, query: Query<'_>) -> String {
    Locate::text_of(query).walk(row).or_default(STAT_DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{selector, TextFilter};
    use scraper::Html;

    const PAGE: &str = r#"
        <div class="scorebox_meta">
          <div><strong>Start Time</strong>: 1:00pm</div>
          <div><strong>Attendance</strong></div>
          <div><strong>Weather</strong>: </div>
          <span id="necro-birth">no date</span>
        </div>
    "#;

    #[test]
    fn found_value_is_returned_without_ledger_entry() {
        let html = Html::parse_fragment(PAGE);
        let strong = selector("strong").unwrap();
        let query = Query::new(&strong).with_text(TextFilter::contains("Start Time"));
        let locate = Locate::new(vec![Step::Find(query), Step::Parent], Read::After(": "));
        let mut ledger = ErrorLedger::new();

        let value = extract(Some(html.root_element()), &locate, "start_time", &mut ledger);
        assert_eq!(value, "1:00pm");
        assert!(ledger.is_empty());
    }

    #[test]
    fn missing_delimiter_is_recorded() {
        let html = Html::parse_fragment(PAGE);
        let strong = selector("strong").unwrap();
        let query = Query::new(&strong).with_text(TextFilter::exact("Attendance"));
        let locate = Locate::new(vec![Step::Find(query), Step::Parent], Read::After(": "));
        let mut ledger = ErrorLedger::new();

        assert_eq!(extract(Some(html.root_element()), &locate, "attendance", &mut ledger), "");
        assert!(ledger.contains("attendance"));
    }

    #[test]
    fn empty_value_is_not_recorded() {
        let html = Html::parse_fragment(PAGE);
        let strong = selector("strong").unwrap();
        let query = Query::new(&strong).with_text(TextFilter::exact("Weather"));
        let locate = Locate::new(vec![Step::Find(query), Step::Parent], Read::After(": "));
        let mut ledger = ErrorLedger::new();

        assert_eq!(extract(Some(html.root_element()), &locate, "weather", &mut ledger), "");
        assert!(ledger.is_empty());
    }

    #[test]
    fn missing_attribute_and_missing_scope_are_recorded() {
        let html = Html::parse_fragment(PAGE);
        let span = selector("span#necro-birth").unwrap();
        let locate = Locate::new(vec![Step::Find(Query::new(&span))], Read::Attr("data-birth"));
        let mut ledger = ErrorLedger::new();

        assert_eq!(extract(Some(html.root_element()), &locate, "birth_date", &mut ledger), "");
        assert_eq!(extract(None, &locate, "stadium", &mut ledger), "");
        assert!(ledger.contains("birth_date"));
        assert!(ledger.contains("stadium"));
    }

    #[test]
    fn stats_default_to_zero() {
        let html = Html::parse_fragment(
            r#"<table><tr><td data-stat="rush_att"></td><td data-stat="rec">4</td></tr></table>"#,
        );
        let row_sel = selector("tr").unwrap();
        let row = html.select(&row_sel).next().unwrap();
        let rush = selector(r#"td[data-stat="rush_att"]"#).unwrap();
        let rec = selector(r#"td[data-stat="rec"]"#).unwrap();
        let targets = selector(r#"td[data-stat="targets"]"#).unwrap();

        assert_eq!(extract_stat(row, Query::new(&rush)), "0");
        assert_eq!(extract_stat(row, Query::new(&rec)), "4");
        assert_eq!(extract_stat(row, Query::new(&targets)), "0");
    }

    #[test]
    fn last_token_read() {
        let html = Html::parse_fragment(r#"<h2><a href="/years/2019/week_7.htm">Week 7</a></h2>"#);
        let anchor = selector("a").unwrap();
        let locate = Locate::new(vec![Step::Find(Query::new(&anchor))], Read::LastToken);

        assert_eq!(locate.walk(html.root_element()), Lookup::Found("7".to_string()));
    }

    #[test]
    fn blank_last_token_is_empty_not_absent() {
        let html = Html::parse_fragment(r#"<h2><a href="/x">  </a></h2>"#);
        let anchor = selector("a").unwrap();
        let locate = Locate::new(vec![Step::Find(Query::new(&anchor))], Read::LastToken);
        let mut ledger = ErrorLedger::new();

        assert_eq!(locate.walk(html.root_element()), Lookup::Empty);
        assert_eq!(extract(Some(html.root_element()), &locate, "week", &mut ledger), "");
        assert!(ledger.is_empty());
    }
}
