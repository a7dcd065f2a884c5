// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;

use super::consts::*;
use crate::file::looks_like_dir_hint;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub input: InputOptions,
    pub load: LoadOptions,
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputOptions {
    /// Rendered DOM snapshots, oldest first. More than one means "the same page, scrolled".
    pub files: Vec<PathBuf>,
    /// Used to resolve relative `src`/`href` when the page has no `<base href>`.
    pub base_url: String,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            base_url: s!(DEFAULT_BASE_URL),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub max_attempts: usize,
    pub scroll_delay: Duration,
    pub settle_delay: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_attempts: MAX_SCROLL_ATTEMPTS,
            scroll_delay: Duration::from_millis(SCROLL_DELAY_MS),
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
        }
    }
}

impl LoadOptions {
    /// Same attempt ceiling, no waiting. For snapshots that are already on disk.
    pub fn immediate() -> Self {
        Self {
            scroll_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    /// Attach a truncated copy of each element's outer HTML as `element_html`.
    pub with_html: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: OutputPath,
    pub clipboard: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: OutputPath::default(),
            clipboard: true,
        }
    }
}

impl ExportOptions {
    /// Dated default file name, e.g. `suno_library_2024-01-01.json`.
    pub fn file_name_for(date: NaiveDate) -> String {
        format!("{FILE_PREFIX}{}.{FILE_EXT}", date.format("%Y-%m-%d"))
    }

    /// Final output path for an export happening on `date`.
    pub fn out_path(&self, date: NaiveDate) -> PathBuf {
        match &self.out_path.file_name {
            Some(name) => self.out_path.dir.join(name),
            None => self.out_path.dir.join(Self::file_name_for(date)),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Parse user text into dir (+ optional explicit file name).
    /// A trailing separator or an existing directory means "directory, dated name".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        let p = PathBuf::from(crate::file::normalize_separators(s));
        if looks_like_dir_hint(Path::new(s)) || p.is_dir() {
            self.out_path = OutputPath { dir: p, file_name: None };
            return;
        }

        let dir = p
            .parent()
            .map(|pp| pp.to_path_buf())
            .unwrap_or_default();
        self.out_path = OutputPath {
            dir,
            file_name: p.file_name().map(|f| f.to_os_string()),
        };
    }

    /// Text representation for the GUI output field.
    pub fn display_path(&self) -> String {
        match &self.out_path.file_name {
            Some(name) => self.out_path.dir.join(name).to_string_lossy().into_owned(),
            None => {
                let mut d = self.out_path.dir.to_string_lossy().into_owned();
                if !looks_like_dir_hint(Path::new(&d)) {
                    d.push(std::path::MAIN_SEPARATOR);
                }
                d
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_name: Option<OsString>, // None → dated default name
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: None,
        }
    }
}
