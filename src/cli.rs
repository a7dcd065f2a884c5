// src/cli.rs
use std::{env, error::Error, path::PathBuf, time::Duration};

use crate::{
    config::options::{AppOptions, LoadOptions},
    export::{self, ExportOutcome, SystemClipboard},
    loader::ThreadSleeper,
    progress::Progress,
    runner,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(AppOptions),
}

/// Prints progress lines to the terminal.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{}", msg);
    }
    fn warn(&mut self, msg: &str) {
        eprintln!("Warning: {}", msg);
    }
    fn error(&mut self, msg: &str) {
        eprintln!("Error: {}", msg);
    }
    fn finish(&mut self) {
        logd!("CLI: finished ({} candidate elements)", self.total);
    }
}

/// Parse the process arguments and run. `Ok(false)` means nothing was exported.
pub fn run() -> Result<bool, Box<dyn Error>> {
    let opts = match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            return Ok(true);
        }
        Command::Run(opts) => opts,
    };

    let mut progress = CliProgress::default();
    let mut clipboard = SystemClipboard;
    let summary = runner::run(
        &opts,
        &mut ThreadSleeper,
        Some(&mut clipboard),
        export::today(),
        Some(&mut progress),
    )?;

    match summary.export {
        ExportOutcome::Exported { path, count, .. } => {
            println!("Success! Wrote {} songs to {}", count, path.display());
            Ok(true)
        }
        ExportOutcome::NothingToExport => Ok(false),
    }
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                let v = args.next().ok_or("Missing value for --input")?;
                opts.input.files.push(PathBuf::from(v));
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                opts.export.set_path(&v);
            }
            "--base-url" => {
                opts.input.base_url = args.next().ok_or("Missing value for --base-url")?;
            }
            "--delay-ms" => {
                let v: u64 = args.next().ok_or("Missing value for --delay-ms")?.parse()?;
                opts.load.scroll_delay = Duration::from_millis(v);
            }
            "--no-wait" => opts.load = LoadOptions::immediate(),
            "--no-clipboard" => opts.export.clipboard = false,
            "--with-html" => opts.extract.with_html = true,
            "-h" | "--help" => return Ok(Command::Help),
            other if other.starts_with('-') => {
                return Err(format!("Unknown arg: {}", other).into());
            }
            _ => opts.input.files.push(PathBuf::from(a)),
        }
    }

    if opts.input.files.is_empty() {
        return Err("Specify at least one page snapshot (-i <file.html>)".into());
    }
    Ok(Command::Run(opts))
}
