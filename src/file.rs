// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write `contents` to `path`, creating parent directories first.
/// Returns the path written to.
pub fn write_text(path: &Path, contents: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

/// Read one input snapshot as UTF-8 (lossy; saved pages are not always clean).
pub fn read_text(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = fs::read(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Split a `;`-separated list of paths (GUI input field).
pub fn split_path_list(text: &str) -> Vec<PathBuf> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| PathBuf::from(normalize_separators(s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hint_needs_trailing_separator() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(looks_like_dir_hint(Path::new("out\\")));
        assert!(!looks_like_dir_hint(Path::new("out")));
    }

    #[test]
    fn path_list_skips_blanks() {
        let v = split_path_list(" a.html ;; b.html;");
        assert_eq!(v, vec![PathBuf::from("a.html"), PathBuf::from("b.html")]);
    }

    #[test]
    fn write_text_creates_parents() {
        let mut dir = std::env::temp_dir();
        dir.push("suno_file_write_text");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("x.json");

        let written = write_text(&path, "[]").unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
