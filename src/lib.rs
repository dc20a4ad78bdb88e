// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod extract;
pub mod logging;
pub mod menu;
pub mod progress;
pub mod record;
pub mod scrape;
pub mod store;

pub mod gui;
