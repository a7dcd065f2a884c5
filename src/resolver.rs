// src/resolver.rs
//
// "First match wins" over an ordered list of selectors.

use crate::{
    config::consts::{FALLBACK_SELECTOR, SONG_SELECTORS},
    dom::{Document, DomResult, ElementBox},
    progress::Progress,
};

/// Try `candidates` in order; return the first one whose query yields
/// anything, with its results. Failing candidates are logged and skipped.
pub fn first_non_empty<'c, T, F>(candidates: &[&'c str], mut query: F) -> Option<(&'c str, Vec<T>)>
where
    F: FnMut(&str) -> DomResult<Vec<T>>,
{
    for &candidate in candidates {
        match query(candidate) {
            Ok(found) if !found.is_empty() => return Some((candidate, found)),
            Ok(_) => logd!("Resolve: No match for {}", candidate),
            Err(e) => logw!("Resolve: Skipping {}: {}", candidate, e),
        }
    }
    None
}

/// Walk a fallback chain of lookups; the first `Some` wins.
pub fn first_some<T>(chain: &[&dyn Fn() -> DomResult<Option<T>>]) -> DomResult<Option<T>> {
    for step in chain {
        if let Some(v) = step()? {
            return Ok(Some(v));
        }
    }
    Ok(None)
}

pub struct Resolved<'d> {
    /// Container selector that matched; `None` when the fallback was used
    pub selector: Option<&'static str>,
    pub used_fallback: bool,
    pub elements: Vec<ElementBox<'d>>,
}

impl Resolved<'_> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Find song containers with the built-in selector table.
pub fn resolve_song_elements<'d>(
    doc: &'d dyn Document,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Resolved<'d> {
    resolve_with(doc, SONG_SELECTORS, FALLBACK_SELECTOR, progress)
}

/// Same as `resolve_song_elements` with caller-provided selectors.
/// Zero matches everywhere is not an error: the result is simply empty.
pub fn resolve_with<'d>(
    doc: &'d dyn Document,
    candidates: &[&'static str],
    fallback: &'static str,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Resolved<'d> {
    if let Some((selector, elements)) = first_non_empty(candidates, |s| doc.query_all(s)) {
        logf!("Resolve: {} element(s) via {}", elements.len(), selector);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Found {} elements using selector: {}", elements.len(), selector));
        }
        return Resolved { selector: Some(selector), used_fallback: false, elements };
    }

    loge!("Resolve: No container selector matched; using heading fallback");
    if let Some(p) = progress.as_deref_mut() {
        p.warn("Could not find song elements. The page structure may have changed.");
        p.log("Trying alternative extraction method…");
    }

    let elements = doc.query_all(fallback).unwrap_or_else(|e| {
        loge!("Resolve: Fallback selector failed: {}", e);
        Vec::new()
    });
    logf!("Resolve: Fallback found {} element(s)", elements.len());

    Resolved { selector: None, used_fallback: true, elements }
}
