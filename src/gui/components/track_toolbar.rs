// src/gui/components/track_toolbar.rs
//
// Filter, file picker, pruning, and actions on the selected row.

use eframe::egui;

use crate::config::state::ALL_STATUSES;
use crate::gui::{
    actions::{prune, track, update},
    app::App,
};
use crate::record::Status;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.horizontal_wrapped(|ui| {
        ui.label("Filter by Status:");
        let before = app.state.gui.status_filter.clone();
        egui::ComboBox::from_id_salt("status_filter")
            .selected_text(before.clone())
            .show_ui(ui, |ui| {
                let filter = &mut app.state.gui.status_filter;
                ui.selectable_value(filter, s!(ALL_STATUSES), ALL_STATUSES);
                for st in Status::KNOWN {
                    ui.selectable_value(filter, s!(st.as_str()), st.as_str());
                }
            });
        if app.state.gui.status_filter != before {
            log::debug!("UI: Status filter → {}", app.state.gui.status_filter);
            app.rebuild_view();
        }

        if ui.button("Refresh").clicked() {
            track::refresh(app);
        }

        ui.separator();
        ui.label("File:");
        let current = app
            .current_file
            .as_deref()
            .map(track::file_label)
            .unwrap_or_else(|| s!("(none)"));
        let mut chosen = None;
        egui::ComboBox::from_id_salt("data_file")
            .selected_text(current)
            .width(320.0)
            .show_ui(ui, |ui| {
                for f in &app.files {
                    let is_current = app.current_file.as_ref() == Some(f);
                    if ui.selectable_label(is_current, track::file_label(f)).clicked() {
                        chosen = Some(f.clone());
                    }
                }
            });
        if let Some(path) = chosen {
            track::load_file(app, path);
        }

        ui.separator();
        let prune_label = format!("Remove Old Jobs ({} days)", app.state.gui.prune_days);
        if ui.button(prune_label).clicked() {
            prune::plan(app);
        }
    });

    ui.horizontal(|ui| {
        let sel = app.selected;
        let has_sel = sel.is_some();
        if ui.add_enabled(has_sel, egui::Button::new("Update Status")).clicked() {
            if let Some(row) = sel { update::open(app, row); }
        }
        if ui.add_enabled(has_sel, egui::Button::new("Open Application Link")).clicked() {
            if let Some(row) = sel { track::open_link(app, &ctx, row); }
        }
        if ui.add_enabled(has_sel, egui::Button::new("Copy Email")).clicked() {
            if let Some(row) = sel { track::copy_email(app, &ctx, row); }
        }
        ui.separator();
        ui.label(format!("{} of {} jobs", app.view_ix.len(), app.dataset.row_count()));
    });
}
