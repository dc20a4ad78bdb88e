// src/gui/components/details_window.rs
//
// Read-only view of every stored column for one row.

use eframe::egui;

use crate::gui::{
    actions::{track, update},
    app::App,
};
use crate::record::col;

/// `date_applied` → `Date Applied`
fn heading(column: &str) -> String {
    column
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut c = w.chars();
            match c.next() {
                Some(first) => first.to_uppercase().chain(c).collect::<String>(),
                None => s!(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

enum Pressed {
    Update,
    OpenLink,
    CopyEmail,
    Close,
}

pub fn show(ctx: &egui::Context, app: &mut App) {
    let Some(row) = app.details else { return };
    let Some(values) = app.dataset.rows.get(row).cloned() else {
        app.details = None;
        return;
    };
    let headers = app.dataset.headers.clone();

    let title = format!(
        "Job Details: {} at {}",
        app.cell_at(row, col::JOB_TITLE).unwrap_or("?"),
        app.cell_at(row, col::COMPANY).unwrap_or("?"),
    );
    let description = app.cell_at(row, col::DESCRIPTION).map(|d| s!(d));
    let has_link = app.cell_at(row, col::APPLICATION_LINK).is_some();
    let has_email = app.cell_at(row, col::EMAIL).is_some();

    let mut open = true;
    let mut pressed = None;

    egui::Window::new(title)
        .id(egui::Id::new("details_window"))
        .open(&mut open)
        .default_size([600.0, 500.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                egui::Grid::new("details_grid")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for (h, v) in headers.iter().zip(&values) {
                            if h == col::DESCRIPTION {
                                continue;
                            }
                            ui.strong(format!("{}:", heading(h)));
                            ui.add(egui::Label::new(v.as_str()).wrap());
                            ui.end_row();
                        }
                    });

                if let Some(desc) = &description {
                    ui.add_space(8.0);
                    ui.strong("Description:");
                    ui.add(egui::Label::new(desc.as_str()).wrap());
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Update Status").clicked() {
                    pressed = Some(Pressed::Update);
                }
                if has_link && ui.button("Open Application Link").clicked() {
                    pressed = Some(Pressed::OpenLink);
                }
                if has_email && ui.button("Copy Email").clicked() {
                    pressed = Some(Pressed::CopyEmail);
                }
                if ui.button("Close").clicked() {
                    pressed = Some(Pressed::Close);
                }
            });
        });

    match pressed {
        Some(Pressed::Update) => update::open(app, row),
        Some(Pressed::OpenLink) => track::open_link(app, ctx, row),
        Some(Pressed::CopyEmail) => track::copy_email(app, ctx, row),
        Some(Pressed::Close) => open = false,
        None => {}
    }
    if !open {
        app.details = None;
    }
}

#[cfg(test)]
mod tests {
    use super::heading;

    #[test]
    fn headings_are_title_cased() {
        assert_eq!(heading("date_applied"), "Date Applied");
        assert_eq!(heading("type"), "Type");
        assert_eq!(heading("job_id"), "Job Id");
    }
}
