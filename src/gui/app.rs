// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    file::split_path_list,
    record::SongRecord,
    runner::Collected,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Suno Library Extractor",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last extraction
    pub records: Vec<SongRecord>,
    pub last_run: Option<Collected>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.display_path();
        logf!("Init: out={}", out_path_text);

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            records: Vec::new(),
            last_run: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Mirror GUI fields → options before running an action.
    pub fn sync_gui_into_options(&mut self) {
        let gui = &self.state.gui;
        let opts = &mut self.state.options;

        opts.input.files = split_path_list(&gui.input_text);
        opts.input.base_url = gui.base_url_text.trim().to_string();
        opts.load = gui.load_options();

        if self.out_path_dirty {
            opts.export.set_path(&self.out_path_text);
            logf!("UI: Out path set → {}", opts.export.display_path());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            crate::gui::components::input_bar::draw(ui, self);
            ui.separator();
            crate::gui::components::action_buttons::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::records_table::draw(ui, self);
        });
    }
}
