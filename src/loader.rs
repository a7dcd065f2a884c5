// src/loader.rs
//
// Scroll-to-load: keep scrolling to the bottom until the page stops growing
// or the attempt ceiling is hit. Hitting the ceiling is a normal exit.

use std::{thread, time::Duration};

use crate::{
    config::options::LoadOptions,
    dom::Document,
    progress::Progress,
};

/// Where the loader's pauses go. Swap it out to run without waiting.
pub trait Sleeper {
    fn sleep(&mut self, dur: Duration);
}

/// Real wall-clock pauses.
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, dur: Duration) {
        if !dur.is_zero() {
            thread::sleep(dur);
        }
    }
}

/// Returns immediately; keeps a tally of what would have been slept.
#[derive(Debug, Default)]
pub struct NoSleep {
    pub slept: Vec<Duration>,
}

impl Sleeper for NoSleep {
    fn sleep(&mut self, dur: Duration) {
        self.slept.push(dur);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Scroll-to-bottom operations performed
    pub attempts: usize,
    /// Height stopped changing (false: ceiling reached)
    pub reached_end: bool,
    pub final_height: u64,
}

pub fn scroll_to_load(
    doc: &mut dyn Document,
    sleeper: &mut dyn Sleeper,
    opts: &LoadOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> LoadOutcome {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Scrolling to load all songs…");
    }

    let mut previous_height = 0u64;
    let mut attempts = 0usize;
    let mut reached_end = false;

    while attempts < opts.max_attempts {
        let bottom = doc.scroll_height();
        doc.scroll_to(bottom);
        attempts += 1;
        sleeper.sleep(opts.scroll_delay);

        let current_height = doc.scroll_height();
        logd!("Load: attempt={} height {} → {}", attempts, previous_height, current_height);
        if current_height == previous_height {
            reached_end = true;
            break;
        }
        previous_height = current_height;
    }

    if reached_end {
        logf!("Load: Reached end of content after {} scroll(s)", attempts);
        if let Some(p) = progress.as_deref_mut() {
            p.log("Reached end of content");
        }
    } else {
        logf!("Load: Stopped at the {} scroll ceiling", opts.max_attempts);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Stopped after {} scrolls", attempts));
        }
    }

    doc.scroll_to(0);
    sleeper.sleep(opts.settle_delay);

    LoadOutcome {
        attempts,
        reached_end,
        final_height: doc.scroll_height(),
    }
}
