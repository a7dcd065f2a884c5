// src/extract.rs
//
// Turn matched elements into SongRecords. Every field except the title is
// optional; an element without a title is dropped, and an element that
// errors is logged and dropped without stopping the rest.

use crate::{
    config::{consts::*, options::ExtractOptions},
    core::sanitize::{non_empty_trimmed, truncate_chars},
    dom::{DomResult, Element, ElementBox},
    progress::Progress,
    record::SongRecord,
    resolver::first_some,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Titled records, in element order
    pub records: Vec<SongRecord>,
    /// Elements dropped for lacking a title
    pub untitled: usize,
    /// Elements that failed, by index, with the error text
    pub failed: Vec<(u32, String)>,
}

pub fn extract_all(
    elements: &[ElementBox<'_>],
    opts: &ExtractOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Extraction {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(elements.len());
        p.log("Extracting song data…");
    }

    let mut out = Extraction::default();

    for (i, el) in elements.iter().enumerate() {
        // assigned before the title check, so skipped elements leave a gap
        let index = (i + 1) as u32;

        match extract_record(el.as_ref(), index, opts) {
            Ok(Some(song)) => out.records.push(song),
            Ok(None) => {
                logd!("Extract: Element {} has no title, skipped", index);
                out.untitled += 1;
            }
            Err(e) => {
                logw!("Extract: Error processing element {}: {}", index, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.warn(&format!("Error processing element {}: {}", index, e));
                }
                out.failed.push((index, e.to_string()));
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(index);
        }
    }

    logf!(
        "Extract: records={} untitled={} failed={}",
        out.records.len(),
        out.untitled,
        out.failed.len()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Extracted {} songs", out.records.len()));
    }
    out
}

/// One element → one record. `Ok(None)` when there is no usable title.
pub fn extract_record(
    el: &dyn Element,
    index: u32,
    opts: &ExtractOptions,
) -> DomResult<Option<SongRecord>> {
    let title_text = match el.query(TITLE_SELECTOR)? {
        Some(t) => t.text_content()?,
        None => el.text_content()?,
    };
    let Some(title) = non_empty_trimmed(&title_text) else {
        return Ok(None);
    };

    let mut song = SongRecord::new(index, title);

    if let Some(d) = el.query(DESCRIPTION_SELECTOR)? {
        song.description = Some(trimmed_text(d.as_ref())?);
    }

    if let Some(d) = el.query(DATE_SELECTOR)? {
        let text = || -> DomResult<Option<String>> { Ok(non_empty_trimmed(&d.text_content()?)) };
        let datetime = || d.attr("datetime");
        song.date = first_some::<String>(&[&text, &datetime])?;
    }

    if let Some(d) = el.query(DURATION_SELECTOR)? {
        song.duration = Some(trimmed_text(d.as_ref())?);
    }

    let tag_els = el.query_all(TAG_SELECTOR)?;
    if !tag_els.is_empty() {
        let mut tags = Vec::with_capacity(tag_els.len());
        for t in &tag_els {
            tags.push(trimmed_text(t.as_ref())?);
        }
        song.tags = Some(tags);
    }

    if let Some(a) = el.query(AUDIO_SELECTOR)? {
        song.audio_url = source_url(a.as_ref())?;
    }

    if let Some(img) = el.query(IMAGE_SELECTOR)? {
        song.image_url = source_url(img.as_ref())?;
    }

    if let Some(link) = el.query(LINK_SELECTOR)? {
        let property = || link.url_property("href");
        let raw = || link.attr("href");
        song.url = first_some::<String>(&[&property, &raw])?;
    }

    if opts.with_html {
        song.element_html = Some(truncate_chars(&el.outer_html()?, ELEMENT_HTML_MAX_CHARS));
    }

    for (key, value) in el.dataset()? {
        song.merge_data(key, value);
    }

    Ok(Some(song))
}

fn trimmed_text(el: &dyn Element) -> DomResult<String> {
    Ok(el.text_content()?.trim().to_string())
}

/// Live `src` property if it has a value, else the raw attribute.
fn source_url(el: &dyn Element) -> DomResult<Option<String>> {
    let property = || -> DomResult<Option<String>> {
        Ok(el.url_property("src")?.filter(|s| !s.is_empty()))
    };
    let raw = || el.attr("src");
    first_some::<String>(&[&property, &raw])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, HtmlDocument};

    fn doc(body: &str) -> HtmlDocument {
        HtmlDocument::parse(&format!("<html><body>{body}</body></html>"), Some("https://suno.com/"))
    }

    fn one(d: &HtmlDocument, opts: &ExtractOptions) -> Option<SongRecord> {
        let els = d.query_all("article").unwrap();
        extract_record(els[0].as_ref(), 1, opts).unwrap()
    }

    #[test]
    fn full_card() {
        let d = doc(r#"
            <article data-song-id="s-1" data-title="ignored">
              <h3 class="title">  Night Drive </h3>
              <p class="description"> synthwave, 80s </p>
              <time datetime="2024-02-02">Feb 2</time>
              <span class="duration">3:21</span>
              <span class="tag"> synth </span><span class="tag">retro</span>
              <audio src="https://cdn1.suno.ai/s-1.mp3"></audio>
              <img src="/covers/s-1.jpg">
              <a href="/song/s-1">open</a>
            </article>"#);
        let s = one(&d, &ExtractOptions::default()).unwrap();

        assert_eq!(s.index, 1);
        assert_eq!(s.title, "Night Drive");
        assert_eq!(s.description.as_deref(), Some("synthwave, 80s"));
        assert_eq!(s.date.as_deref(), Some("Feb 2"));
        assert_eq!(s.duration.as_deref(), Some("3:21"));
        assert_eq!(s.tags, Some(vec![s!("synth"), s!("retro")]));
        assert_eq!(s.audio_url.as_deref(), Some("https://cdn1.suno.ai/s-1.mp3"));
        assert_eq!(s.image_url.as_deref(), Some("https://suno.com/covers/s-1.jpg"));
        assert_eq!(s.url.as_deref(), Some("https://suno.com/song/s-1"));
        assert_eq!(s.extra.get("songId").map(String::as_str), Some("s-1"));
        assert!(!s.extra.contains_key("title"));
        assert_eq!(s.element_html, None);
    }

    #[test]
    fn empty_time_text_falls_back_to_datetime() {
        let d = doc(r#"<article><h3>T</h3><time datetime="2024-01-01">  </time></article>"#);
        let s = one(&d, &ExtractOptions::default()).unwrap();
        assert_eq!(s.date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn element_itself_is_the_title_without_heading() {
        let d = doc("<article>  Just text  </article>");
        let s = one(&d, &ExtractOptions::default()).unwrap();
        assert_eq!(s.title, "Just text");
    }

    #[test]
    fn blank_title_drops_the_record() {
        let d = doc(r#"<article><h3>   </h3><span class="duration">1:00</span></article>"#);
        assert_eq!(one(&d, &ExtractOptions::default()), None);
    }

    #[test]
    fn audio_by_source_extension() {
        let d = doc(r#"<article><h3>T</h3><source src="clip.wav"></article>"#);
        let s = one(&d, &ExtractOptions::default()).unwrap();
        assert_eq!(s.audio_url.as_deref(), Some("https://suno.com/clip.wav"));
    }

    #[test]
    fn non_media_source_keeps_raw_src() {
        let d = doc(r#"<article><h3>T</h3><div src="/clips/a.mp3"></div></article>"#);
        let s = one(&d, &ExtractOptions::default()).unwrap();
        assert_eq!(s.audio_url.as_deref(), Some("/clips/a.mp3"));
    }

    #[test]
    fn element_html_is_truncated() {
        let long = "x".repeat(800);
        let d = doc(&format!("<article><h3>T</h3><p>{long}</p></article>"));
        let opts = ExtractOptions { with_html: true };
        let s = one(&d, &opts).unwrap();
        let html = s.element_html.unwrap();
        assert_eq!(html.chars().count(), ELEMENT_HTML_MAX_CHARS);
        assert!(html.starts_with("<article>"));
    }

    #[test]
    fn index_gaps_survive_skips() {
        let d = doc("<article><h3>A</h3></article><article> </article><article><h3>C</h3></article>");
        let els = d.query_all("article").unwrap();
        let ex = extract_all(&els, &ExtractOptions::default(), None);
        let idx: Vec<u32> = ex.records.iter().map(|r| r.index).collect();
        assert_eq!(idx, vec![1, 3]);
        assert_eq!(ex.untitled, 1);
        assert!(ex.failed.is_empty());
    }
}
