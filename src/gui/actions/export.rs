// src/gui/actions/export.rs
use eframe::egui;
use crate::{
    export::{self, ExportOutcome},
    gui::{app::App, progress::GuiProgress},
};
use super::EguiClipboard;

pub fn export(app: &mut App, ui_ctx: &egui::Context) {
    // normalize out_path first (mutates app) before any &app borrows
    app.sync_gui_into_options();

    let mut prog = GuiProgress::new(app.status.clone());
    let mut clipboard = EguiClipboard(ui_ctx);

    let result = export::export_records(
        &app.records,
        &app.state.options.export,
        export::today(),
        Some(&mut clipboard),
        Some(&mut prog),
    );

    let status_msg = match result {
        Ok(ExportOutcome::Exported { path, count, copied }) => {
            logf!("Export: OK count={} path={}", count, path.display());
            let also = if copied == Some(true) { " (also copied)" } else { "" };
            format!("Exported {} songs to {}{}", count, path.display(), also)
        }
        Ok(ExportOutcome::NothingToExport) => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("No songs found! Nothing to export")
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
