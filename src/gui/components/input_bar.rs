// src/gui/components/input_bar.rs
//
// Where the page snapshots come from and how they are read.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let gui = &mut app.state.gui;

    ui.horizontal(|ui| {
        ui.label("Pages:");
        ui.add(
            egui::TextEdit::singleline(&mut gui.input_text)
                .hint_text("library.html; library-2.html")
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        )
        .on_hover_text("Saved page snapshots, oldest first. Separate several with ;");

        ui.label("Base URL:");
        ui.add(
            egui::TextEdit::singleline(&mut gui.base_url_text)
                .desired_width(180.0)
                .font(egui::TextStyle::Monospace),
        );
    });

    ui.horizontal(|ui| {
        let before = gui.skip_delays;
        ui.checkbox(&mut gui.skip_delays, "Skip scroll delays")
            .on_hover_text("Unchecked, the window stays busy while each scroll waits (up to ~75 s)");
        if gui.skip_delays != before {
            logf!("UI: skip_delays → {}", gui.skip_delays);
        }

        let extract = &mut app.state.options.extract;
        let before = extract.with_html;
        ui.checkbox(&mut extract.with_html, "Include element HTML");
        if extract.with_html != before {
            logf!("UI: with_html → {}", extract.with_html);
        }
    });
}
