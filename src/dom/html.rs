// src/dom/html.rs
//
// One rendered-DOM snapshot, parsed with scraper.
// Scroll height is the element count: a page that lazily loads more cards
// has more elements in a later snapshot, which is all the loader compares.

use std::{error::Error, path::Path};

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{Document, DomError, DomResult, Element, ElementBox};
use crate::core::sanitize::dataset_key;

// Elements whose `src` / `href` attribute is reflected as a URL property.
const SRC_TAGS: &[&str] = &[
    "audio", "embed", "iframe", "img", "input", "script", "source", "track", "video",
];
const HREF_TAGS: &[&str] = &["a", "area", "base", "link"];

pub struct HtmlDocument {
    html: Html,
    base: Option<Url>,
    height: u64,
    scroll_y: u64,
}

impl HtmlDocument {
    /// Parse a snapshot. `fallback_base` is used when the page carries no `<base href>`.
    pub fn parse(source: &str, fallback_base: Option<&str>) -> Self {
        let html = Html::parse_document(source);
        let fallback = fallback_base.and_then(|b| Url::parse(b).ok());
        let base = document_base(&html, fallback);
        let height = html
            .tree
            .nodes()
            .filter(|n| n.value().is_element())
            .count() as u64;

        Self { html, base, height, scroll_y: 0 }
    }

    pub fn from_file(path: &Path, fallback_base: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let text = crate::file::read_text(path)?;
        let doc = Self::parse(&text, fallback_base);
        logd!(
            "Document: Parsed {} (height={}, base={})",
            path.display(),
            doc.height,
            doc.base.as_ref().map(Url::as_str).unwrap_or("-")
        );
        Ok(doc)
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    pub fn scroll_y(&self) -> u64 {
        self.scroll_y
    }
}

fn document_base(html: &Html, fallback: Option<Url>) -> Option<Url> {
    let Ok(sel) = Selector::parse("base[href]") else {
        return fallback;
    };
    let href = html
        .select(&sel)
        .next()
        .and_then(|b| b.value().attr("href"))
        .map(str::trim);

    match href {
        Some(h) => Url::options()
            .base_url(fallback.as_ref())
            .parse(h)
            .ok()
            .or(fallback),
        None => fallback,
    }
}

fn parse_selector(selector: &str) -> DomResult<Selector> {
    Selector::parse(selector).map_err(|e| DomError::InvalidSelector {
        selector: s!(selector),
        reason: e.to_string(),
    })
}

impl Document for HtmlDocument {
    fn query_all(&self, selector: &str) -> DomResult<Vec<ElementBox<'_>>> {
        let sel = parse_selector(selector)?;
        let base = self.base.as_ref();
        Ok(self
            .html
            .select(&sel)
            .map(|el| Box::new(HtmlElement { el, base }) as ElementBox<'_>)
            .collect())
    }

    fn scroll_height(&self) -> u64 {
        self.height
    }

    fn scroll_to(&mut self, y: u64) {
        self.scroll_y = y.min(self.height);
    }
}

struct HtmlElement<'a> {
    el: ElementRef<'a>,
    base: Option<&'a Url>,
}

impl<'a> HtmlElement<'a> {
    fn wrap(&self, el: ElementRef<'a>) -> ElementBox<'a> {
        Box::new(HtmlElement { el, base: self.base })
    }

    fn descendants_matching(&self, sel: &Selector) -> impl Iterator<Item = ElementRef<'a>> {
        let me = self.el.id();
        self.el.select(sel).filter(move |e| e.id() != me)
    }
}

impl<'a> Element for HtmlElement<'a> {
    fn query(&self, selector: &str) -> DomResult<Option<ElementBox<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.descendants_matching(&sel).next().map(|e| self.wrap(e)))
    }

    fn query_all(&self, selector: &str) -> DomResult<Vec<ElementBox<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.descendants_matching(&sel).map(|e| self.wrap(e)).collect())
    }

    fn text_content(&self) -> DomResult<String> {
        Ok(self.el.text().collect())
    }

    fn attr(&self, name: &str) -> DomResult<Option<String>> {
        Ok(self.el.value().attr(name).map(str::to_string))
    }

    fn url_property(&self, name: &str) -> DomResult<Option<String>> {
        let tag = self.el.value().name();
        let reflected = match name {
            "src" => SRC_TAGS.contains(&tag),
            "href" => HREF_TAGS.contains(&tag),
            _ => false,
        };
        if !reflected {
            return Ok(None);
        }
        let Some(raw) = self.el.value().attr(name) else {
            return Ok(None);
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Some(s!()));
        }
        let resolved = match self.base {
            Some(base) => base.join(raw).map(String::from),
            None => Url::parse(raw).map(String::from),
        };
        Ok(Some(resolved.unwrap_or_else(|_| s!(raw))))
    }

    fn dataset(&self) -> DomResult<Vec<(String, String)>> {
        Ok(self
            .el
            .value()
            .attrs()
            .filter_map(|(name, value)| dataset_key(name).map(|k| (k, s!(value))))
            .collect())
    }

    fn outer_html(&self) -> DomResult<String> {
        Ok(self.el.html())
    }
}
