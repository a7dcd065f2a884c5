// src/gui/components/records_table.rs
//
// Read-only view of the last extraction.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, record::SUMMARY_HEADERS};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if let Some(run) = &app.last_run {
        let end = if run.load.reached_end { "end of content" } else { "scroll ceiling" };
        ui.label(format!(
            "{} scroll(s) to {}, {} element(s) via {}",
            run.load.attempts,
            end,
            run.matched,
            run.selector.unwrap_or("heading fallback"),
        ));
        ui.separator();
    }

    if app.records.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No songs yet. Point at a saved library page and press EXTRACT.");
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::exact(40.0))
        .column(Column::initial(260.0).at_least(80.0).clip(true))
        .column(Column::initial(110.0).clip(true))
        .column(Column::initial(70.0))
        .column(Column::initial(200.0).clip(true))
        .column(Column::remainder().clip(true))
        .header(20.0, |mut header| {
            for h in SUMMARY_HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, app.records.len(), |mut row| {
                let cells = app.records[row.index()].summary_row();
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
