// src/gui/actions/extract.rs
use crate::{
    gui::{app::App, progress::GuiProgress},
    loader::ThreadSleeper,
    runner,
};

pub fn extract(app: &mut App) {
    app.sync_gui_into_options();
    let opts = app.state.options.clone();

    logf!("Extract: Begin inputs={:?}", opts.input.files);

    let mut doc = match runner::open_document(&opts.input) {
        Ok(d) => d,
        Err(e) => {
            loge!("Extract: Open failed: {}", e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the extraction happens ←
    let collected = runner::collect(&mut doc, &mut ThreadSleeper, &opts, Some(&mut prog));

    let ex = &collected.extraction;
    logf!(
        "Extract: OK matched={} records={} failed={}",
        collected.matched,
        ex.records.len(),
        ex.failed.len()
    );

    let via = match collected.selector {
        Some(sel) => sel,
        None => "heading fallback",
    };
    app.status(if ex.records.is_empty() {
        s!("No songs found! Please check the page structure.")
    } else {
        format!(
            "Extracted {} songs from {} elements ({}), {} skipped",
            ex.records.len(),
            collected.matched,
            via,
            ex.untitled + ex.failed.len()
        )
    });

    app.records = ex.records.clone();
    app.last_run = Some(collected);
}
