// src/gui/actions/copy.rs
use eframe::egui;
use crate::{export, gui::app::App};
use super::EguiClipboard;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.records.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let json = match export::to_json(&app.records) {
        Ok(j) => j,
        Err(e) => {
            loge!("Copy: Serialize failed: {}", e);
            app.status(format!("Copy error: {e}"));
            return;
        }
    };

    logf!("Copy: records={}", app.records.len());
    if export::copy_best_effort(&mut EguiClipboard(ui_ctx), &json, None) {
        app.status(format!("Copied {} songs to clipboard", app.records.len()));
    } else {
        app.status("Could not copy to clipboard");
    }
}
