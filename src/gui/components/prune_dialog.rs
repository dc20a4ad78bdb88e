// src/gui/components/prune_dialog.rs

use eframe::egui;

use crate::gui::{actions::prune, app::App};

pub fn show(ctx: &egui::Context, app: &mut App) {
    let Some(pending) = app.prune_confirm.take() else { return };
    let mut answer: Option<bool> = None;

    egui::Window::new("Confirm")
        .id(egui::Id::new("prune_confirm"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!(
                "Remove {} jobs older than {} days?",
                pending.plan.removed, pending.max_days
            ));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    answer = Some(true);
                }
                if ui.button("No").clicked() {
                    answer = Some(false);
                }
            });
        });

    match answer {
        Some(true) => prune::confirm(app, pending),
        Some(false) => app.status("Nothing removed"),
        None => app.prune_confirm = Some(pending),
    }
}
