// src/gui/actions/update.rs
use chrono::Local;

use crate::{
    gui::app::{App, StatusEditor},
    record::Status,
    store::{self, StatusUpdate},
};

use super::track;

pub fn open(app: &mut App, row: usize) {
    match app.record_at(row) {
        Some(rec) => app.editor = Some(StatusEditor::for_record(&rec)),
        None => app.status("Please select a job to update"),
    }
}

/// Form → update. Text fields overwrite what is stored, blanks included;
/// a blank date is left for the store to fill in.
pub fn to_update(ed: &StatusEditor) -> StatusUpdate {
    let date = ed.date_applied.trim();
    StatusUpdate {
        status: Status::from(ed.status.as_str()),
        date_applied: (!date.is_empty()).then(|| s!(date)),
        deadline: Some(s!(ed.deadline.trim())),
        application_link: Some(s!(ed.application_link.trim())),
        resume_link: Some(s!(ed.resume_link.trim())),
        notes: Some(s!(ed.notes.trim())),
    }
}

/// Write the form to the current file. Returns false (form stays open) on error.
pub fn save(app: &mut App, ed: &StatusEditor) -> bool {
    let Some(path) = app.current_file.clone() else {
        app.status("No job data loaded");
        return false;
    };
    let update = to_update(ed);
    let today = Local::now().date_naive();

    match store::update_file(&path, &ed.job_id, &update, today) {
        Ok(_) => {
            track::refresh(app);
            app.status(format!("Updated job {} status to '{}'", ed.job_id, update.status));
            true
        }
        Err(e) => {
            log::error!("Update {} failed: {e}", ed.job_id);
            app.status(format!("Error updating job status: {e}"));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_date_is_left_to_the_store() {
        let ed = StatusEditor {
            job_id: s!("1"),
            status: s!("Applied"),
            notes: s!("  called recruiter "),
            ..StatusEditor::default()
        };
        let u = to_update(&ed);
        assert_eq!(u.status, Status::Applied);
        assert_eq!(u.date_applied, None);
        assert_eq!(u.deadline.as_deref(), Some(""));
        assert_eq!(u.notes.as_deref(), Some("called recruiter"));
    }
}
