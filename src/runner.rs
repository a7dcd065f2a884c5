// src/runner.rs
//
// Loader → Resolver → Extractor → Exporter, in one pass.

use std::error::Error;

use chrono::NaiveDate;

use crate::{
    config::options::{AppOptions, InputOptions},
    dom::{Document, SnapshotDocument},
    export::{self, Clipboard, ExportOutcome},
    extract::{self, Extraction},
    loader::{self, LoadOutcome, Sleeper},
    progress::Progress,
    resolver,
};

/// Everything read from the page, before export.
#[derive(Debug, Clone)]
pub struct Collected {
    pub load: LoadOutcome,
    /// Container selector that matched; `None` when the heading fallback was used
    pub selector: Option<&'static str>,
    pub used_fallback: bool,
    /// Elements the resolver returned
    pub matched: usize,
    pub extraction: Extraction,
}

/// Summary of what was produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub collected: Collected,
    pub export: ExportOutcome,
}

/// Open the input snapshots as one document.
pub fn open_document(input: &InputOptions) -> Result<SnapshotDocument, Box<dyn Error>> {
    if input.files.is_empty() {
        return Err("No input files given".into());
    }
    let base = Some(input.base_url.trim()).filter(|b| !b.is_empty());
    SnapshotDocument::from_files(&input.files, base)
}

/// Scroll, find and extract. Never fails: structural surprises only shrink the result.
pub fn collect(
    doc: &mut dyn Document,
    sleeper: &mut dyn Sleeper,
    opts: &AppOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Collected {
    let load = loader::scroll_to_load(doc, sleeper, &opts.load, progress.as_deref_mut());

    let doc: &dyn Document = doc;
    let resolved = resolver::resolve_song_elements(doc, progress.as_deref_mut());
    let extraction = extract::extract_all(&resolved.elements, &opts.extract, progress.as_deref_mut());

    Collected {
        load,
        selector: resolved.selector,
        used_fallback: resolved.used_fallback,
        matched: resolved.len(),
        extraction,
    }
}

/// Top-level run: open inputs, collect, export.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    sleeper: &mut dyn Sleeper,
    clipboard: Option<&mut dyn Clipboard>,
    date: NaiveDate,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    logf!("Run: Begin inputs={:?}", opts.input.files);
    if let Some(p) = progress.as_deref_mut() {
        p.log("Starting Suno library extraction…");
    }

    let mut doc = open_document(&opts.input)?;
    let collected = collect(&mut doc, sleeper, opts, progress.as_deref_mut());

    let export = export::export_records(
        &collected.extraction.records,
        &opts.export,
        date,
        clipboard,
        progress.as_deref_mut(),
    )?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Run: Done export={:?}", export);

    Ok(RunSummary { collected, export })
}
