// tests/store_roundtrip.rs
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use chrono::NaiveDate;
use job_tracker::record::{JobRecord, Status};
use job_tracker::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("job_tracker_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample(id: &str, company: &str) -> JobRecord {
    let mut r = JobRecord::new(id);
    r.company = Some(company.into());
    r.job_title = Some("Rust, Backend \"Core\" Engineer".into());
    r.email = Some("jobs@example.com".into());
    r.posting_date = Some("2024-05-01".into());
    r.description = Some("never stored".into());
    r
}

#[test]
fn written_records_read_back() {
    let dir = tmp_dir("roundtrip");
    let now = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap().and_hms_opt(9, 30, 0).unwrap();
    let records = vec![sample("111", "Acme"), sample("222", "Globex")];

    let path = store::write_new(&dir, "Rust Dev", "Toronto", &records, now)
        .unwrap()
        .expect("a file is written");
    assert_eq!(path.file_name().unwrap(), "Rust_Dev_Toronto_20240502_093000.csv");

    let ds = store::load(&path).unwrap();
    assert_eq!(ds.headers.first().map(String::as_str), Some("company"));
    assert!(ds.column("description").is_none());

    let back = ds.records();
    assert_eq!(back.len(), 2);
    for (orig, got) in records.iter().zip(&back) {
        assert_eq!(got.job_id, orig.job_id);
        assert_eq!(got.company, orig.company);
        assert_eq!(got.job_title, orig.job_title);
        assert_eq!(got.email, orig.email);
        assert_eq!(got.posting_date, orig.posting_date);
        assert_eq!(got.application_link, orig.application_link);
        assert_eq!(got.status, Status::NotApplied);
        assert_eq!(got.description, None);
    }
}

#[test]
fn nothing_written_without_records() {
    let dir = tmp_dir("empty");
    let now = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(store::write_new(&dir, "a", "b", &[], now).unwrap(), None);
    assert!(store::list_files(&dir).unwrap().is_empty());
}

#[test]
fn latest_file_is_newest_modified_csv() {
    let dir = tmp_dir("latest");
    assert_eq!(store::latest_file(&dir).unwrap(), None);

    let base = SystemTime::now() - Duration::from_secs(3600);
    for (name, age) in [("b_older.csv", 20), ("a_newest.csv", 0), ("c_oldest.csv", 40), ("notes.txt", 0)] {
        let p = dir.join(name);
        let f = File::create(&p).unwrap();
        f.set_modified(base - Duration::from_secs(age)).unwrap();
    }

    let latest = store::latest_file(&dir).unwrap().unwrap();
    assert_eq!(latest.file_name().unwrap(), "a_newest.csv");

    let all = store::list_files(&dir).unwrap();
    let names: Vec<_> = all.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
    assert_eq!(names, vec!["a_newest.csv", "b_older.csv", "c_oldest.csv"]);

    assert!(store::latest_file(&dir.join("missing")).unwrap().is_none());
}

#[test]
fn unknown_columns_and_short_rows_survive_rewrite() {
    let dir = tmp_dir("unknown_cols");
    let path = dir.join("hand_made.csv");
    fs::write(&path, "job_id,status,my_rating\n1,Applied,5\n2,Rejected\n").unwrap();

    let ds = store::load(&path).unwrap();
    assert_eq!(ds.rows[1], vec!["2", "Rejected", ""]);

    store::save(&path, &ds).unwrap();
    let again = store::load(&path).unwrap();
    assert_eq!(again, ds);
    assert!(!dir.join("hand_made.csv.tmp").exists());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tmp_dir("missing_file");
    assert!(store::load(&dir.join("nope.csv")).is_err());
    assert!(matches!(store::load_latest(&dir), Err(store::StoreError::NoDataFiles(_))));
}
