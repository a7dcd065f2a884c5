// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod dom;
pub mod file;
pub mod progress;

pub mod loader;
pub mod record;
pub mod resolver;
pub mod extract;
pub mod export;
pub mod runner;

pub mod cli;
pub mod gui;
