// src/config/state.rs
use super::options::{AppOptions, LoadOptions};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    /// Input field text; several paths separated by `;`
    pub input_text: String,
    pub base_url_text: String,
    /// Extract without the scroll delays (snapshots are static files)
    pub skip_delays: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            input_text: s!(),
            base_url_text: s!(crate::config::consts::DEFAULT_BASE_URL),
            skip_delays: true,
        }
    }
}

impl GuiState {
    /// Extraction runs on the UI thread, so real delays freeze the window.
    pub fn load_options(&self) -> LoadOptions {
        if self.skip_delays { LoadOptions::immediate() } else { LoadOptions::default() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
