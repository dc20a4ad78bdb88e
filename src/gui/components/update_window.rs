// src/gui/components/update_window.rs

use eframe::egui;

use crate::gui::{actions::update, app::App};
use crate::record::Status;

pub fn show(ctx: &egui::Context, app: &mut App) {
    let Some(mut ed) = app.editor.take() else { return };

    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    egui::Window::new("Update Job Status")
        .id(egui::Id::new("update_window"))
        .open(&mut open)
        .collapsible(false)
        .default_width(480.0)
        .show(ctx, |ui| {
            ui.label(format!("Job {}", ed.job_id));
            ui.add_space(6.0);

            egui::Grid::new("update_form")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Status:");
                    ui.horizontal(|ui| {
                        egui::ComboBox::from_id_salt("update_status")
                            .selected_text(ed.status.clone())
                            .show_ui(ui, |ui| {
                                for st in Status::KNOWN {
                                    ui.selectable_value(&mut ed.status, s!(st.as_str()), st.as_str());
                                }
                            });
                        ui.add(egui::TextEdit::singleline(&mut ed.status).desired_width(160.0));
                    });
                    ui.end_row();

                    ui.label("Date Applied:");
                    ui.add(egui::TextEdit::singleline(&mut ed.date_applied).hint_text("YYYY-MM-DD"));
                    ui.end_row();

                    ui.label("Application Deadline:");
                    ui.text_edit_singleline(&mut ed.deadline);
                    ui.end_row();

                    ui.label("Application Link:");
                    ui.add(egui::TextEdit::singleline(&mut ed.application_link).desired_width(300.0));
                    ui.end_row();

                    ui.label("Resume Link:");
                    ui.add(egui::TextEdit::singleline(&mut ed.resume_link).desired_width(300.0));
                    ui.end_row();

                    ui.label("Notes:");
                    ui.add(egui::TextEdit::multiline(&mut ed.notes).desired_rows(5).desired_width(300.0));
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                save = ui.button("Save").clicked();
                cancel = ui.button("Cancel").clicked();
            });
        });

    if save && update::save(app, &ed) {
        return;
    }
    if open && !cancel {
        app.editor = Some(ed);
    }
}
