// src/gui/actions/prune.rs
use chrono::{Local, NaiveDate};

use crate::{
    gui::app::{App, PruneConfirm},
    store::{self, StoreError},
};

/// Work out what "Remove Old Jobs" would drop and ask before doing it.
pub fn plan(app: &mut App) {
    plan_for(app, Local::now().date_naive());
}

// Plans from the file on disk, not the table in memory, so edits made
// since the last load survive the rewrite.
fn plan_for(app: &mut App, today: NaiveDate) {
    let Some(path) = app.current_file.clone() else {
        app.status("No job data loaded");
        return;
    };
    let fresh = match store::load(&path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Reloading {} failed: {e}", path.display());
            app.status(format!("Error filtering jobs: {e}"));
            return;
        }
    };
    app.dataset = fresh;
    app.rebuild_view();

    let max_days = app.state.gui.prune_days;
    match store::plan_prune(&app.dataset, max_days, today) {
        Ok(plan) if plan.removed == 0 => app.status(format!("No jobs older than {max_days} days found")),
        Ok(plan) => app.prune_confirm = Some(PruneConfirm { plan, max_days }),
        Err(StoreError::NoPostingDates) => app.status("Cannot filter by age: posting dates not available"),
        Err(e) => app.status(format!("Error filtering jobs: {e}")),
    }
}

pub fn confirm(app: &mut App, pending: PruneConfirm) {
    let Some(path) = app.current_file.clone() else { return };
    match store::save(&path, &pending.plan.kept) {
        Ok(()) => {
            log::info!("Pruned {} jobs from {}", pending.plan.removed, path.display());
            app.dataset = pending.plan.kept;
            app.selected = None;
            app.details = None;
            app.rebuild_view();
            app.status(format!("Removed {} old job listings", pending.plan.removed));
        }
        Err(e) => {
            log::error!("Prune save failed: {e}");
            app.status(format!("Error filtering jobs: {e}"));
        }
    }
}
