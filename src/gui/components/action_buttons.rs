// src/gui/components/action_buttons.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Output field ---
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }

        let mut clip = app.state.options.export.clipboard;
        if ui.checkbox(&mut clip, "Copy on export").changed() {
            app.state.options.export.clipboard = clip;
            logf!("UI: clipboard → {}", clip);
        }
    });

    if open_folder_clicked {
        open_output_folder(app);
    }

    // Actions: Extract / Copy / Export
    use crate::gui::actions;
    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_extract = ui.add(
            egui::Button::new(
                egui::RichText::new("EXTRACT")
                .color(black)
                .strong())
            .fill(red));
        if button_extract.clicked() {
            actions::extract(app);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app, ui.ctx());
        }

        ui.label(app.status_text());
    });
}

/// Open the output folder in the system file explorer.
fn open_output_folder(app: &mut App) {
    app.sync_gui_into_options();
    let folder = find_nearest_existing_parent(app.state.options.export.out_dir());

    let absolute_folder = match std::fs::canonicalize(&folder) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

/// Nearest existing directory walking up from `path`; `.` if none.
fn find_nearest_existing_parent(path: &std::path::Path) -> std::path::PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return std::path::PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &std::path::Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(program)
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn {}: {}", program, e))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err("Opening folders not supported on this platform".to_string())
    }
}
