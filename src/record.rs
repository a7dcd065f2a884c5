// src/record.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One extracted song. Optional fields are left out of the JSON when unset.
/// `extra` carries the element's `data-*` attributes that didn't collide
/// with a field already set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SongRecord {
    /// 1-based position among matched elements (untitled ones leave gaps)
    pub index: u32,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_html: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl SongRecord {
    pub fn new(index: u32, title: String) -> Self {
        Self { index, title, ..Self::default() }
    }

    /// Whether `key` already holds a value on this record.
    pub fn has_key(&self, key: &str) -> bool {
        match key {
            "index" | "title" => true,
            "description" => self.description.is_some(),
            "date" => self.date.is_some(),
            "duration" => self.duration.is_some(),
            "tags" => self.tags.is_some(),
            "audio_url" => self.audio_url.is_some(),
            "image_url" => self.image_url.is_some(),
            "url" => self.url.is_some(),
            "element_html" => self.element_html.is_some(),
            other => self.extra.contains_key(other),
        }
    }

    /// Add a data attribute unless the key is taken. First write wins.
    /// Returns whether it was added.
    pub fn merge_data(&mut self, key: String, value: String) -> bool {
        if self.has_key(&key) {
            return false;
        }
        // an unset semantic field must stay typed, so it's filled in place
        match key.as_str() {
            "description" => self.description = Some(value),
            "date" => self.date = Some(value),
            "duration" => self.duration = Some(value),
            "audio_url" => self.audio_url = Some(value),
            "image_url" => self.image_url = Some(value),
            "url" => self.url = Some(value),
            "element_html" => self.element_html = Some(value),
            "tags" => self.tags = Some(vec![value]),
            _ => {
                self.extra.insert(key, value);
            }
        }
        true
    }

    /// Column values for table views: index, title, date, duration, tags, url.
    pub fn summary_row(&self) -> [String; 6] {
        [
            self.index.to_string(),
            self.title.clone(),
            self.date.clone().unwrap_or_default(),
            self.duration.clone().unwrap_or_default(),
            self.tags.as_ref().map(|t| t.join(", ")).unwrap_or_default(),
            self.url.clone().unwrap_or_default(),
        ]
    }
}

pub const SUMMARY_HEADERS: [&str; 6] = ["#", "Title", "Date", "Duration", "Tags", "Link"];
