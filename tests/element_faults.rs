// tests/element_faults.rs
//
// One bad element must not take the others down.

use suno_library::config::options::ExtractOptions;
use suno_library::dom::{Document, DomError, DomResult, Element, ElementBox, HtmlDocument};
use suno_library::extract::extract_all;
use suno_library::progress::RecordingProgress;

/// Delegates everything, but its attributes can't be read.
struct Unreadable<'a>(ElementBox<'a>);

impl Element for Unreadable<'_> {
    fn query(&self, selector: &str) -> DomResult<Option<ElementBox<'_>>> {
        self.0.query(selector)
    }
    fn query_all(&self, selector: &str) -> DomResult<Vec<ElementBox<'_>>> {
        self.0.query_all(selector)
    }
    fn text_content(&self) -> DomResult<String> {
        self.0.text_content()
    }
    fn attr(&self, _name: &str) -> DomResult<Option<String>> {
        Err(DomError::Access("malformed attribute".into()))
    }
    fn url_property(&self, name: &str) -> DomResult<Option<String>> {
        self.0.url_property(name)
    }
    fn dataset(&self) -> DomResult<Vec<(String, String)>> {
        Err(DomError::Access("malformed attribute".into()))
    }
    fn outer_html(&self) -> DomResult<String> {
        self.0.outer_html()
    }
}

const PAGE: &str = r#"<html><body>
    <article data-id="1"><h3>Alpha</h3></article>
    <article data-id="2"><h3>Beta</h3></article>
    <article data-id="3"><h3>Gamma</h3></article>
</body></html>"#;

#[test]
fn failing_element_is_skipped_and_logged() {
    let doc = HtmlDocument::parse(PAGE, None);
    let mut els = doc.query_all("article").unwrap();
    let bad = els.remove(1);
    els.insert(1, Box::new(Unreadable(bad)));

    let mut prog = RecordingProgress::default();
    let ex = extract_all(&els, &ExtractOptions::default(), Some(&mut prog));

    let titles: Vec<&str> = ex.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Gamma"]);
    assert_eq!(ex.records[1].index, 3);

    assert_eq!(ex.failed.len(), 1);
    assert_eq!(ex.failed[0].0, 2);
    assert!(ex.failed[0].1.contains("malformed attribute"));
    assert_eq!(prog.warnings.len(), 1);
    assert!(prog.warnings[0].contains("element 2"));
}

#[test]
fn every_element_failing_yields_nothing() {
    let doc = HtmlDocument::parse(PAGE, None);
    let els: Vec<ElementBox<'_>> = doc
        .query_all("article")
        .unwrap()
        .into_iter()
        .map(|e| Box::new(Unreadable(e)) as ElementBox<'_>)
        .collect();

    let ex = extract_all(&els, &ExtractOptions::default(), None);
    assert!(ex.records.is_empty());
    assert_eq!(ex.failed.len(), 3);
}
