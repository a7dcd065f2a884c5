// src/gui/components/mod.rs
pub mod action_buttons;
pub mod input_bar;
pub mod records_table;
