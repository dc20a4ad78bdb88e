// src/gui/components/job_table.rs
//
// Tracked jobs table. Click selects, double-click opens details,
// right-click offers the per-row actions.

use eframe::egui::{self, Sense};
use egui_extras::{Column, TableBuilder};

use crate::gui::{
    actions::{track, update},
    app::App,
};
use crate::record::col;

/// (column, heading, initial width)
const TABLE_COLUMNS: &[(&str, &str, f32)] = &[
    (col::JOB_ID,           "ID",               90.0),
    (col::COMPANY,          "Company",          150.0),
    (col::JOB_TITLE,        "Job Title",        220.0),
    (col::STATUS,           "Status",           120.0),
    (col::DATE_APPLIED,     "Date Applied",     100.0),
    (col::DEADLINE,         "Deadline",         110.0),
    (col::TYPE,             "Job Type",         100.0),
    (col::CONTACT_PERSON,   "Contact Person",   140.0),
    (col::EMAIL,            "Email",            180.0),
    (col::APPLICATION_LINK, "Application Link", 240.0),
];

enum RowAction {
    Select(usize),
    Details(usize),
    Update(usize),
    OpenLink(usize),
    CopyEmail(usize),
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.view_ix.is_empty() {
        ui.label(if app.current_file.is_none() { "No job data loaded" } else { "No jobs match the filter" });
        return;
    }

    let ctx = ui.ctx().clone();
    let mut action: Option<RowAction> = None;

    {
        let ds = &app.dataset;
        let view = &app.view_ix;
        let selected = app.selected;
        let source_cols: Vec<Option<usize>> = TABLE_COLUMNS
            .iter()
            .map(|(name, _, _)| ds.column(name))
            .collect();

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(Sense::click())
            .min_scrolled_height(0.0);
        for (_, _, w) in TABLE_COLUMNS {
            table = table.column(Column::initial(*w).at_least(40.0).clip(true));
        }

        table
            .header(22.0, |mut header| {
                for (_, heading, _) in TABLE_COLUMNS {
                    header.col(|ui| {
                        ui.strong(*heading);
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, view.len(), |mut row| {
                    let Some(&ix) = view.get(row.index()) else { return };
                    let Some(data) = ds.rows.get(ix) else { return };
                    row.set_selected(selected == Some(ix));

                    for src in &source_cols {
                        let text = src.and_then(|ci| data.get(ci)).map(String::as_str).unwrap_or("");
                        row.col(|ui| {
                            ui.add(egui::Label::new(text).truncate().selectable(false));
                        });
                    }

                    let resp = row.response();
                    if resp.double_clicked() {
                        action = Some(RowAction::Details(ix));
                    } else if resp.clicked() {
                        action = Some(RowAction::Select(ix));
                    }
                    resp.context_menu(|ui| {
                        if ui.button("Update Status").clicked() {
                            action = Some(RowAction::Update(ix));
                        }
                        if ui.button("Open Application Link").clicked() {
                            action = Some(RowAction::OpenLink(ix));
                        }
                        if ui.button("Copy Email").clicked() {
                            action = Some(RowAction::CopyEmail(ix));
                        }
                    });
                });
            });
    }

    match action {
        Some(RowAction::Select(ix)) => app.selected = Some(ix),
        Some(RowAction::Details(ix)) => {
            app.selected = Some(ix);
            app.details = Some(ix);
        }
        Some(RowAction::Update(ix)) => {
            app.selected = Some(ix);
            update::open(app, ix);
        }
        Some(RowAction::OpenLink(ix)) => track::open_link(app, &ctx, ix),
        Some(RowAction::CopyEmail(ix)) => track::copy_email(app, &ctx, ix),
        None => {}
    }
}
