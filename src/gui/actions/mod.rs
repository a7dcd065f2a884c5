// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,extract}.

mod copy;
mod export;
mod extract;

pub use copy::copy;
pub use export::export;
pub use extract::extract;

use std::error::Error;

use eframe::egui;

use crate::export::Clipboard;

/// egui's own clipboard; setting text can't fail from our side.
pub(super) struct EguiClipboard<'a>(pub &'a egui::Context);

impl Clipboard for EguiClipboard<'_> {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        self.0.copy_text(s!(text));
        Ok(())
    }
}
