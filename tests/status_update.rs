// tests/status_update.rs
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use job_tracker::record::Status;
use job_tracker::store::{self, StatusUpdate, StoreError};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("job_tracker_update_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

const CSV: &str = "company,status,date_applied,deadline,resume_link,job_id\n\
Acme,Not Applied,,,,100\n\
Globex,Applied,2024-05-01,,,200\n";

#[test]
fn applied_gets_today_and_notes_column() {
    let dir = tmp_dir("applied");
    let path = dir.join("jobs.csv");
    fs::write(&path, CSV).unwrap();

    let mut update = StatusUpdate::new(Status::Applied);
    update.notes = Some("referral from Sam".into());
    let n = store::update_latest(&dir, "100", &update, today()).unwrap();
    assert_eq!(n, 1);

    let ds = store::load(&path).unwrap();
    assert_eq!(ds.headers.last().map(String::as_str), Some("notes"));
    assert_eq!(ds.cell(0, "status"), Some("Applied"));
    assert_eq!(ds.cell(0, "date_applied"), Some("2024-06-03"));
    assert_eq!(ds.cell(0, "notes"), Some("referral from Sam"));
    assert_eq!(ds.cell(1, "notes"), Some(""));
}

#[test]
fn explicit_fields_overwrite_and_others_stay() {
    let dir = tmp_dir("explicit");
    let path = dir.join("jobs.csv");
    fs::write(&path, CSV).unwrap();

    let mut update = StatusUpdate::new(Status::InterviewScheduled);
    update.deadline = Some("June 30, 2024".into());
    update.resume_link = Some("https://example.com/cv.pdf".into());
    store::update_file(&path, "200", &update, today()).unwrap();

    let ds = store::load(&path).unwrap();
    assert_eq!(ds.cell(1, "status"), Some("Interview Scheduled"));
    assert_eq!(ds.cell(1, "date_applied"), Some("2024-05-01"));
    assert_eq!(ds.cell(1, "deadline"), Some("June 30, 2024"));
    assert_eq!(ds.cell(1, "resume_link"), Some("https://example.com/cv.pdf"));
    assert!(ds.column("notes").is_none());
}

#[test]
fn unknown_job_leaves_file_untouched() {
    let dir = tmp_dir("unknown");
    let path = dir.join("jobs.csv");
    fs::write(&path, CSV).unwrap();

    let err = store::update_file(&path, "999", &StatusUpdate::new(Status::Rejected), today()).unwrap_err();
    assert!(matches!(err, StoreError::JobNotFound(ref id) if id == "999"));
    assert_eq!(fs::read_to_string(&path).unwrap(), CSV);
}

#[test]
fn no_files_reports_no_data() {
    let dir = tmp_dir("no_files");
    let err = store::update_latest(&dir, "1", &StatusUpdate::new(Status::Applied), today()).unwrap_err();
    assert!(matches!(err, StoreError::NoDataFiles(_)));
}

#[test]
fn custom_status_is_kept_verbatim() {
    let dir = tmp_dir("custom");
    let path = dir.join("jobs.csv");
    fs::write(&path, CSV).unwrap();

    store::update_file(&path, "100", &StatusUpdate::new(Status::from("Ghosted")), today()).unwrap();
    let ds = store::load(&path).unwrap();
    assert_eq!(ds.cell(0, "status"), Some("Ghosted"));
    assert_eq!(ds.cell(0, "date_applied"), Some(""));
    assert_eq!(store::filter_by_status(&ds, Some("Ghosted")).row_count(), 1);
}
