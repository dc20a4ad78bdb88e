// src/gui/actions/track.rs
use std::path::PathBuf;

use eframe::egui;

use crate::{gui::app::App, record::col, store};

fn refresh_files(app: &mut App) {
    app.files = match store::list_files(&app.data_dir) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("Listing {} failed: {e}", app.data_dir.display());
            Vec::new()
        }
    };
}

pub fn load_latest(app: &mut App) {
    refresh_files(app);
    match app.files.first().cloned() {
        Some(path) => load_file(app, path),
        None => app.status("No job data found. Search for jobs first."),
    }
}

pub fn load_file(app: &mut App, path: PathBuf) {
    match store::load(&path) {
        Ok(ds) => {
            log::info!("Loaded {} ({} rows)", path.display(), ds.row_count());
            app.status(format!("Loaded {} jobs from {}", ds.row_count(), file_label(&path)));
            app.dataset = ds;
            app.current_file = Some(path);
            app.selected = None;
            app.details = None;
            app.rebuild_view();
        }
        Err(e) => {
            log::error!("Loading {} failed: {e}", path.display());
            app.status(format!("Error loading job data: {e}"));
        }
    }
    refresh_files(app);
}

/// Re-read the current file, or the newest one when none is loaded.
pub fn refresh(app: &mut App) {
    match app.current_file.clone() {
        Some(path) => load_file(app, path),
        None => load_latest(app),
    }
}

pub fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn open_link(app: &App, ctx: &egui::Context, row: usize) {
    match app.cell_at(row, col::APPLICATION_LINK) {
        Some(url) => {
            log::info!("Opening {url}");
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }
        None => app.status("No application link available for this job"),
    }
}

pub fn copy_email(app: &App, ctx: &egui::Context, row: usize) {
    match app.cell_at(row, col::EMAIL) {
        Some(email) => {
            ctx.copy_text(s!(email));
            app.status("Email copied to clipboard");
        }
        None => app.status("No email available for this job"),
    }
}
