// src/dom/snapshots.rs
//
// A page captured several times while it lazily loaded, oldest first.
// Scrolling to (or past) the bottom of the current snapshot reveals the next.
// Once the last snapshot is showing, the height stops changing.

use std::{error::Error, path::Path};

use super::{Document, DomError, DomResult, ElementBox, HtmlDocument};

pub struct SnapshotDocument {
    pages: Vec<HtmlDocument>,
    current: usize,
}

impl SnapshotDocument {
    pub fn new(pages: Vec<HtmlDocument>) -> DomResult<Self> {
        if pages.is_empty() {
            return Err(DomError::NoSnapshots);
        }
        Ok(Self { pages, current: 0 })
    }

    /// Parse every file, in the given order.
    pub fn from_files(paths: &[impl AsRef<Path>], fallback_base: Option<&str>)
        -> Result<Self, Box<dyn Error>>
    {
        let mut pages = Vec::with_capacity(paths.len());
        for p in paths {
            pages.push(HtmlDocument::from_file(p.as_ref(), fallback_base)?);
        }
        Ok(Self::new(pages)?)
    }

    /// Index of the snapshot currently showing.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn page(&self) -> &HtmlDocument {
        &self.pages[self.current]
    }
}

impl Document for SnapshotDocument {
    fn query_all(&self, selector: &str) -> DomResult<Vec<ElementBox<'_>>> {
        self.page().query_all(selector)
    }

    fn scroll_height(&self) -> u64 {
        self.page().scroll_height()
    }

    fn scroll_to(&mut self, y: u64) {
        let at_bottom = y >= self.page().scroll_height();
        self.pages[self.current].scroll_to(y);
        if at_bottom && self.current + 1 < self.pages.len() {
            self.current += 1;
            logd!("Document: Revealed snapshot {}/{}", self.current + 1, self.pages.len());
        }
    }
}
