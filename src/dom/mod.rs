// src/dom/mod.rs
//
// The page as seen by the extractor: query by selector, read text/attributes,
// report and change scroll position. Nothing here knows about songs.
//
// Implementations:
// - html::HtmlDocument      one rendered-DOM snapshot (scraper)
// - snapshots::SnapshotDocument  several snapshots of one page; scrolling to the
//                                bottom reveals the next one (lazy loading)

use std::fmt;

pub mod html;
pub mod snapshots;

pub use html::HtmlDocument;
pub use snapshots::SnapshotDocument;

pub type DomResult<T> = Result<T, DomError>;
pub type ElementBox<'a> = Box<dyn Element + 'a>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// Selector text could not be parsed
    InvalidSelector { selector: String, reason: String },

    /// Reading from an element failed (detached node, unreadable attribute, ...)
    Access(String),

    /// A snapshot series with no snapshots in it
    NoSnapshots,
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelector { selector, reason } => {
                write!(f, "Invalid selector '{}': {}", selector, reason)
            }
            Self::Access(msg) => write!(f, "Element access failed: {}", msg),
            Self::NoSnapshots => write!(f, "No page snapshots to read"),
        }
    }
}

impl std::error::Error for DomError {}

pub trait Document {
    /// All matches in document order.
    fn query_all(&self, selector: &str) -> DomResult<Vec<ElementBox<'_>>>;

    /// Total scrollable height. Grows as more content is loaded.
    fn scroll_height(&self) -> u64;

    fn scroll_to(&mut self, y: u64);
}

pub trait Element {
    /// First matching descendant in document order (never the element itself).
    fn query(&self, selector: &str) -> DomResult<Option<ElementBox<'_>>>;

    /// All matching descendants in document order.
    fn query_all(&self, selector: &str) -> DomResult<Vec<ElementBox<'_>>>;

    /// Concatenated text of all descendant text nodes, untrimmed.
    fn text_content(&self) -> DomResult<String>;

    /// Raw attribute value as written in the markup.
    fn attr(&self, name: &str) -> DomResult<Option<String>>;

    /// Live URL property (`src`, `href`): the attribute resolved against the
    /// document base. `None` when the element has no such property or the
    /// attribute is missing.
    fn url_property(&self, name: &str) -> DomResult<Option<String>>;

    /// `data-*` attributes with DOM dataset naming (`data-song-id` → `songId`),
    /// in attribute order.
    fn dataset(&self) -> DomResult<Vec<(String, String)>>;

    fn outer_html(&self) -> DomResult<String>;
}
