//! Read-only navigation over a parsed HTML page.
//!
//! Every lookup returns `Option`; deciding whether a missing node is an error
//! is left to the caller.

use crate::error::{Result, ScrapeError};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Compiles a CSS selector, mapping parse failures into [`ScrapeError::Selector`].
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(e.to_string()))
}

/// Predicate applied to the full text of a candidate element.
#[derive(Debug, Clone)]
pub enum TextFilter {
    Exact(String),
    Prefix(String),
    Contains(String),
    Pattern(Regex),
    Except(String),
}

impl TextFilter {
    pub fn exact(text: impl Into<String>) -> Self {
        Self::Exact(text.into())
    }

    pub fn prefix(text: impl Into<String>) -> Self {
        Self::Prefix(text.into())
    }

    pub fn contains(text: impl Into<String>) -> Self {
        Self::Contains(text.into())
    }

    pub fn except(text: impl Into<String>) -> Self {
        Self::Except(text.into())
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Exact(expected) => text == expected,
            Self::Prefix(prefix) => text.starts_with(prefix.as_str()),
            Self::Contains(needle) => text.contains(needle.as_str()),
            Self::Pattern(re) => re.is_match(text),
            Self::Except(excluded) => text != excluded,
        }
    }
}

/// Tag and attribute constraints (as a CSS selector) plus an optional text predicate.
#[derive(Debug, Clone)]
pub struct Query<'q> {
    selector: &'q Selector,
    text: Option<TextFilter>,
}

impl<'q> Query<'q> {
    pub fn new(selector: &'q Selector) -> Self {
        Self {
            selector,
            text: None,
        }
    }

    pub fn with_text(mut self, filter: TextFilter) -> Self {
        self.text = Some(filter);
        self
    }

    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        self.selector.matches(&element) && self.matches_text(element)
    }

    fn matches_text(&self, element: ElementRef<'_>) -> bool {
        match &self.text {
            Some(filter) => filter.matches(&DocumentView::text_of(element)),
            None => true,
        }
    }
}

/// A position in the tree reached by navigation: an element or a bare text node.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
}

impl<'a> Node<'a> {
    pub fn element(self) -> Option<ElementRef<'a>> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn text(self) -> String {
        match self {
            Node::Element(element) => DocumentView::text_of(element),
            Node::Text(text) => text.to_string(),
        }
    }
}

fn classify<'a>(value: &'a scraper::Node, element: Option<ElementRef<'a>>) -> Option<Node<'a>> {
    match value {
        scraper::Node::Text(text) if !text.trim().is_empty() => Some(Node::Text(&**text)),
        scraper::Node::Element(_) => element.map(Node::Element),
        _ => None,
    }
}

/// Borrowed view over one parsed document for the duration of a scrape.
#[derive(Clone, Copy)]
pub struct DocumentView<'a> {
    html: &'a Html,
}

impl<'a> DocumentView<'a> {
    pub fn new(html: &'a Html) -> Self {
        Self { html }
    }

    pub fn root(&self) -> ElementRef<'a> {
        self.html.root_element()
    }

    pub fn find_first(&self, query: &Query<'_>) -> Option<ElementRef<'a>> {
        self.html
            .select(query.selector)
            .find(|element| query.matches_text(*element))
    }

    pub fn find_all(&self, query: &Query<'_>) -> Vec<ElementRef<'a>> {
        self.html
            .select(query.selector)
            .filter(|element| query.matches_text(*element))
            .collect()
    }

    /// First descendant of `scope` (excluding `scope` itself) matching `query`.
    pub fn find_first_in(scope: ElementRef<'a>, query: &Query<'_>) -> Option<ElementRef<'a>> {
        scope
            .select(query.selector)
            .find(|element| element.id() != scope.id() && query.matches_text(*element))
    }

    pub fn find_all_in(scope: ElementRef<'a>, query: &Query<'_>) -> Vec<ElementRef<'a>> {
        scope
            .select(query.selector)
            .filter(|element| element.id() != scope.id() && query.matches_text(*element))
            .collect()
    }

    /// Direct element children of `scope` matching `query`.
    pub fn children_of(scope: ElementRef<'a>, query: &Query<'_>) -> Vec<ElementRef<'a>> {
        scope
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|element| query.matches(*element))
            .collect()
    }

    pub fn parent_of(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
        element.parent().and_then(ElementRef::wrap)
    }

    /// Next sibling node, skipping comments and whitespace-only text.
    pub fn next_sibling_of(element: ElementRef<'a>) -> Option<Node<'a>> {
        element
            .next_siblings()
            .find_map(|node| classify(node.value(), ElementRef::wrap(node)))
    }

    /// The node following the first text node under `scope` whose content is exactly `label`.
    pub fn sibling_after_text(scope: ElementRef<'a>, label: &str) -> Option<Node<'a>> {
        let label_node = scope.descendants().find(|node| {
            matches!(node.value(), scraper::Node::Text(text) if &**text == label)
        })?;

        label_node
            .next_siblings()
            .find_map(|node| classify(node.value(), ElementRef::wrap(node)))
    }

    pub fn text_of(element: ElementRef<'_>) -> String {
        element.text().collect::<String>()
    }

    pub fn attr_of(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
        element.value().attr(name)
    }
}
