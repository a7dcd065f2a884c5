// src/progress.rs
/// Lightweight progress reporting for an extraction run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the number of candidate elements is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something was skipped but the run goes on.
    fn warn(&mut self, _msg: &str) {}

    /// The run produced nothing usable.
    fn error(&mut self, _msg: &str) {}

    /// Called when one element has been handled (kept or skipped).
    fn item_done(&mut self, _index: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Collects every message; handy in tests and for the GUI log view.
#[derive(Debug, Default, Clone)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub total: usize,
    pub done: usize,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn warn(&mut self, msg: &str) { self.warnings.push(s!(msg)); }
    fn error(&mut self, msg: &str) { self.errors.push(s!(msg)); }
    fn item_done(&mut self, _index: u32) { self.done += 1; }
}
