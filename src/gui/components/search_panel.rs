// src/gui/components/search_panel.rs

use eframe::egui;

use crate::config::consts::MAX_PAGES;
use crate::config::options::{AgeFilter, JobType};
use crate::gui::{actions::search, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    let running = app.running;

    ui.add_enabled_ui(!running, |ui| {
        egui::Grid::new("search_form")
            .num_columns(4)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                let opts = &mut app.state.search;

                ui.label("Job Title:");
                ui.add(egui::TextEdit::singleline(&mut opts.title).desired_width(220.0));
                ui.label("Location:");
                ui.add(egui::TextEdit::singleline(&mut opts.location).desired_width(220.0));
                ui.end_row();

                ui.label("Job Type:");
                egui::ComboBox::from_id_salt("job_type")
                    .selected_text(opts.job_type.label())
                    .show_ui(ui, |ui| {
                        for jt in JobType::ALL {
                            ui.selectable_value(&mut opts.job_type, jt, jt.label());
                        }
                    });
                ui.label("Pages to Scrape:");
                ui.add(egui::DragValue::new(&mut opts.pages).range(1..=MAX_PAGES));
                ui.end_row();

                ui.label("Job Age Filter:");
                let age = &mut app.state.age_filter;
                egui::ComboBox::from_id_salt("age_filter")
                    .selected_text(age.label())
                    .show_ui(ui, |ui| {
                        for a in AgeFilter::ALL {
                            ui.selectable_value(age, a, a.label());
                        }
                    });
                ui.end_row();
            });
    });

    ui.add_space(8.0);
    if ui.add_enabled(!running, egui::Button::new("Search Jobs")).clicked() {
        search::start(app, &ctx);
    }

    if running {
        ui.add_space(4.0);
        ui.add(egui::ProgressBar::new(app.progress_fraction()).show_percentage().animate(true));
    }
    ui.label(app.status_text());
}
