// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use job_tracker::config::consts::LOG_FILE;
use job_tracker::config::state::GuiState;
use job_tracker::gui;
use job_tracker::logging::{self, Sink};

fn main() {
    logging::init(Sink::File(Path::new(LOG_FILE)));

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("LinkedIn Job Tracker")
            .with_inner_size([size.window_w, size.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        log::error!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
