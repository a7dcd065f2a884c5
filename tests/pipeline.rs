// tests/pipeline.rs
//
// Loader → resolver → extractor over real HTML snapshots, no UI, no waiting.

use std::fs;
use std::path::PathBuf;

use suno_library::config::options::{AppOptions, LoadOptions};
use suno_library::dom::{Document, HtmlDocument, SnapshotDocument};
use suno_library::loader::NoSleep;
use suno_library::progress::RecordingProgress;
use suno_library::runner::{self, collect};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("suno_pipeline_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn library_page(n: usize) -> String {
    let cards: String = (1..=n)
        .map(|i| {
            format!(
                r#"<div data-testid="song-card" data-clip-id="clip-{i}">
                     <h4>Song {i}</h4>
                     <span class="duration">2:0{i}</span>
                     <a href="/song/clip-{i}">open</a>
                   </div>"#
            )
        })
        .collect();
    format!("<html><body><main>{cards}</main></body></html>")
}

fn immediate() -> AppOptions {
    AppOptions { load: LoadOptions::immediate(), ..AppOptions::default() }
}

#[test]
fn snapshots_load_until_height_settles() {
    let pages = vec![
        HtmlDocument::parse(&library_page(2), Some("https://suno.com/")),
        HtmlDocument::parse(&library_page(4), Some("https://suno.com/")),
    ];
    let mut doc = SnapshotDocument::new(pages).unwrap();
    let mut sleeper = NoSleep::default();
    let mut prog = RecordingProgress::default();

    let c = collect(&mut doc, &mut sleeper, &immediate(), Some(&mut prog));

    assert_eq!(c.load.attempts, 2);
    assert!(c.load.reached_end);
    assert_eq!(doc.current(), 1);
    assert_eq!(c.selector, Some(r#"[data-testid*="song"]"#));
    assert_eq!(c.matched, 4);

    let titles: Vec<&str> = c.extraction.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Song 1", "Song 2", "Song 3", "Song 4"]);

    let last = &c.extraction.records[3];
    assert_eq!(last.url.as_deref(), Some("https://suno.com/song/clip-4"));
    assert_eq!(last.duration.as_deref(), Some("2:04"));
    assert_eq!(last.extra.get("clipId").map(String::as_str), Some("clip-4"));

    assert_eq!(prog.total, 4);
    assert_eq!(prog.done, 4);
    assert!(prog.lines.iter().any(|l| l.contains("Reached end of content")));
}

#[test]
fn heading_fallback_when_no_container_matches() {
    let page = r#"<html><body>
        <h2>My Creations</h2>
        <div class="cardTitle">Loose Song</div>
        <p>no cards here</p>
    </body></html>"#;
    let mut doc = HtmlDocument::parse(page, None);
    let c = collect(&mut doc, &mut NoSleep::default(), &immediate(), None);

    assert!(c.used_fallback);
    assert_eq!(c.selector, None);
    let titles: Vec<&str> = c.extraction.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["My Creations", "Loose Song"]);
}

#[test]
fn output_never_exceeds_matched_and_titles_are_present() {
    let page = r#"<html><body>
        <article><h3>One</h3></article>
        <article>   </article>
        <article><h3></h3><p>body only</p></article>
        <article><h3>Four</h3></article>
    </body></html>"#;
    let mut doc = HtmlDocument::parse(page, None);
    let c = collect(&mut doc, &mut NoSleep::default(), &immediate(), None);

    assert_eq!(c.matched, 4);
    assert!(c.extraction.records.len() <= c.matched);
    assert!(c.extraction.records.iter().all(|r| !r.title.is_empty()));
    let idx: Vec<u32> = c.extraction.records.iter().map(|r| r.index).collect();
    assert_eq!(idx, vec![1, 4]);
    assert_eq!(c.extraction.untitled, 2);
}

#[test]
fn open_document_reads_files_in_order() {
    let dir = tmp_dir("open");
    let a = dir.join("a.html");
    let b = dir.join("b.html");
    fs::write(&a, library_page(1)).unwrap();
    fs::write(&b, library_page(3)).unwrap();

    let mut opts = immediate();
    opts.input.files = vec![a, b];
    let mut doc = runner::open_document(&opts.input).unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.query_all("h4").unwrap().len(), 1);

    let c = collect(&mut doc, &mut NoSleep::default(), &opts, None);
    assert_eq!(c.extraction.records.len(), 3);
}

#[test]
fn open_document_errors() {
    let opts = immediate();
    assert!(runner::open_document(&opts.input).is_err());

    let mut missing = immediate();
    missing.input.files = vec![PathBuf::from("definitely/not/here.html")];
    assert!(runner::open_document(&missing.input).is_err());
}
