// src/export.rs
//
// Records → pretty JSON → dated file, then a best-effort clipboard copy.
// Only the file write can fail the export; the clipboard never does.

use std::{
    error::Error,
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use chrono::NaiveDate;

use crate::{
    config::options::ExportOptions,
    file,
    progress::Progress,
    record::SongRecord,
};

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn Error>>;
}

/// Pipes text into the platform's clipboard command.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        let mut last_err: Option<String> = None;
        for &(program, args) in CLIPBOARD_COMMANDS {
            match pipe_into(program, args, text) {
                Ok(()) => {
                    logd!("Clipboard: Wrote {} bytes via {}", text.len(), program);
                    return Ok(());
                }
                Err(e) => last_err = Some(format!("{}: {}", program, e)),
            }
        }
        Err(last_err
            .unwrap_or_else(|| s!("Clipboard not supported on this platform"))
            .into())
    }
}

type ClipboardCommand = (&'static str, &'static [&'static str]);

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[("clip", &[])];

#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[];

fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<(), Box<dyn Error>> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin is dropped before waiting so the tool sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;
    if !status.success() {
        return Err(format!("exited with {}", status).into());
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No records: nothing written, nothing copied
    NothingToExport,
    Exported {
        path: PathBuf,
        count: usize,
        /// `None` when the clipboard step was turned off
        copied: Option<bool>,
    },
}

/// Pretty JSON, two-space indent.
pub fn to_json(records: &[SongRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Today's date for the file name (UTC, like an ISO timestamp's date part).
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub fn export_records(
    records: &[SongRecord],
    opts: &ExportOptions,
    date: NaiveDate,
    clipboard: Option<&mut dyn Clipboard>,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ExportOutcome, Box<dyn Error>> {
    if records.is_empty() {
        loge!("Export: No songs found");
        if let Some(p) = progress.as_deref_mut() {
            p.error("No songs found! Please check the page structure.");
            p.log("You may need to adjust the selectors.");
        }
        return Ok(ExportOutcome::NothingToExport);
    }

    let json = to_json(records)?;

    let preview = serde_json::to_string_pretty(&records[0])?;
    logd!("Export: First record\n{}", preview);
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Sample (first song):\n{}", preview));
    }

    let path = file::write_text(&opts.out_path(date), &json)?;
    logf!("Export: OK count={} path={}", records.len(), path.display());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Saved {} songs to {}", records.len(), path.display()));
    }

    let copied = match clipboard {
        Some(cb) if opts.clipboard => Some(copy_best_effort(cb, &json, progress.as_deref_mut())),
        _ => None,
    };

    Ok(ExportOutcome::Exported { path, count: records.len(), copied })
}

/// Copy, log either way, report whether it worked.
pub fn copy_best_effort(
    clipboard: &mut dyn Clipboard,
    text: &str,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> bool {
    match clipboard.set_text(text) {
        Ok(()) => {
            logf!("Clipboard: Copied {} bytes", text.len());
            if let Some(p) = progress.as_deref_mut() {
                p.log("Also copied to clipboard!");
            }
            true
        }
        Err(e) => {
            logf!("Clipboard: Copy failed: {}", e);
            if let Some(p) = progress.as_deref_mut() {
                p.log("Could not copy to clipboard, but the file was saved");
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::RecordingProgress;

    #[derive(Default)]
    struct MemClipboard {
        text: Option<String>,
        fail: bool,
    }

    impl Clipboard for MemClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
            if self.fail {
                return Err("no display".into());
            }
            self.text = Some(s!(text));
            Ok(())
        }
    }

    #[cfg(unix)]
    #[test]
    fn clipboard_tool_that_quits_early_is_reaped() {
        // exits without reading stdin: either the write breaks or the status is nonzero
        let big = "x".repeat(1 << 20);
        assert!(pipe_into("sh", &["-c", "exit 3"], &big).is_err());
        assert!(pipe_into("sh", &["-c", "cat > /dev/null"], &big).is_ok());
    }

    fn tmp_opts(name: &str) -> ExportOptions {
        let mut dir = std::env::temp_dir();
        dir.push(format!("suno_export_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        let mut opts = ExportOptions::default();
        opts.set_path(&format!("{}/", dir.display()));
        opts
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn json_uses_two_space_indent() {
        let json = to_json(&[SongRecord::new(1, s!("A"))]).unwrap();
        assert_eq!(json, "[\n  {\n    \"index\": 1,\n    \"title\": \"A\"\n  }\n]");
    }

    #[test]
    fn empty_writes_nothing() {
        let opts = tmp_opts("empty");
        let mut cb = MemClipboard::default();
        let mut prog = RecordingProgress::default();
        let out = export_records(&[], &opts, day(), Some(&mut cb), Some(&mut prog)).unwrap();

        assert_eq!(out, ExportOutcome::NothingToExport);
        assert!(!opts.out_path(day()).exists());
        assert!(cb.text.is_none());
        assert_eq!(prog.errors.len(), 1);
    }

    #[test]
    fn writes_dated_file_and_copies_same_text() {
        let opts = tmp_opts("ok");
        let mut cb = MemClipboard::default();
        let recs = vec![SongRecord::new(1, s!("A")), SongRecord::new(3, s!("C"))];
        let out = export_records(&recs, &opts, day(), Some(&mut cb), None).unwrap();

        let ExportOutcome::Exported { path, count, copied } = out else {
            panic!("expected export");
        };
        assert_eq!(count, 2);
        assert_eq!(copied, Some(true));
        assert!(path.ends_with("suno_library_2024-01-01.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(cb.text.as_deref(), Some(written.as_str()));
    }

    #[test]
    fn clipboard_failure_does_not_fail_export() {
        let opts = tmp_opts("cb_fail");
        let mut cb = MemClipboard { fail: true, ..Default::default() };
        let recs = vec![SongRecord::new(1, s!("A"))];
        let out = export_records(&recs, &opts, day(), Some(&mut cb), None).unwrap();

        match out {
            ExportOutcome::Exported { path, copied, .. } => {
                assert!(path.exists());
                assert_eq!(copied, Some(false));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn clipboard_can_be_turned_off() {
        let mut opts = tmp_opts("cb_off");
        opts.clipboard = false;
        let mut cb = MemClipboard::default();
        let recs = vec![SongRecord::new(1, s!("A"))];
        let out = export_records(&recs, &opts, day(), Some(&mut cb), None).unwrap();

        assert!(matches!(out, ExportOutcome::Exported { copied: None, .. }));
        assert!(cb.text.is_none());
    }
}
