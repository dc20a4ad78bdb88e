// src/gui/actions/search.rs
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use eframe::egui;

use crate::{
    core::net::HttpClient,
    gui::{app::{App, SearchOutcome}, progress::GuiProgress},
    scrape::{self, Pacing},
};

use super::track;

/// Kick off one search on a background thread. Ignored while one is running.
pub fn start(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    if !app.state.search.is_complete() {
        app.status("Job title and location are required");
        return;
    }

    let mut opts = app.state.search.clone();
    opts.max_age_days = app.state.age_filter.max_age_days();
    let data_dir = app.data_dir.clone();
    let mut progress = GuiProgress::new(app.status.clone(), app.progress.clone());
    let ctx = ctx.clone();

    let (tx, rx) = mpsc::channel::<SearchOutcome>();
    app.search_rx = Some(rx);
    app.running = true;
    if let Ok(mut p) = app.progress.lock() {
        *p = 0.0;
    }
    app.status(format!("Searching for {} jobs in {}…", opts.title, opts.location));

    thread::spawn(move || {
        let outcome = HttpClient::new()
            .map_err(|e| e.to_string())
            .and_then(|client| {
                scrape::run_search(&client, &opts, &Pacing::polite(), &data_dir, &mut progress)
                    .map_err(|e| e.to_string())
            });
        let _ = tx.send(outcome);
        ctx.request_repaint();
    });
}

/// Pick up a finished search, if any.
pub fn poll(app: &mut App) {
    let Some(rx) = app.search_rx.as_ref() else { return };
    let outcome = match rx.try_recv() {
        Ok(o) => o,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => Err(s!("Search thread stopped unexpectedly")),
    };
    app.search_rx = None;
    app.running = false;

    match outcome {
        Ok(summary) => match summary.file {
            Some(path) => {
                track::load_file(app, path);
                app.status(format!("Found {} jobs. Saved {}.", summary.ids_found, summary.records));
            }
            None if summary.ids_found == 0 => app.status("No jobs found"),
            None => app.status(format!("Found {} jobs but none could be fetched", summary.ids_found)),
        },
        Err(e) => {
            log::error!("Search: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
