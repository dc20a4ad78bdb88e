// src/store.rs
//
// Flat CSV store: one file per search run under the data directory.
// Files are read and rewritten whole. Unknown columns survive a rewrite.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::config::consts::STAMP_FMT;
use crate::config::state::ALL_STATUSES;
use crate::core::sanitize::filename_part;
use crate::extract::dates::{format_date, parse_date, parse_relative_date};
use crate::record::{col, default_headers, JobRecord, Status};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No job data files found in {}", .0.display())]
    NoDataFiles(PathBuf),

    #[error("Job ID {0} not found")]
    JobNotFound(String),

    #[error("No posting date information available for filtering")]
    NoPostingDates,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Header row plus data rows. Every row is kept at header length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn from_records(records: &[JobRecord]) -> Self {
        let headers = default_headers();
        let rows = records.iter().map(|r| r.to_row(&headers)).collect();
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Index of a column by exact name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of `name`, appending an empty column if absent.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(ix) = self.column(name) {
            return ix;
        }
        self.headers.push(s!(name));
        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, s!());
        }
        width - 1
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let ix = self.column(name)?;
        self.rows.get(row)?.get(ix).map(String::as_str)
    }

    pub fn records(&self) -> Vec<JobRecord> {
        self.rows
            .iter()
            .map(|r| JobRecord::from_row(&self.headers, r))
            .collect()
    }

    fn pad_rows(&mut self) {
        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, s!());
        }
    }
}

/* ---------- file I/O ---------- */

pub fn load(path: &Path) -> Result<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| s!(h)).collect();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(|c| s!(c)).collect::<Vec<String>>());
    }

    let mut ds = DataSet { headers, rows };
    ds.pad_rows();
    Ok(ds)
}

/// Rewrite `path` with `ds`. Writes a sibling temp file and renames it over
/// the target, so a failed write leaves the old file untouched.
pub fn save(path: &Path, ds: &DataSet) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("csv.tmp");
    let written = write_csv(&tmp, ds).and_then(|_| fs::rename(&tmp, path).map_err(StoreError::from));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn write_csv(path: &Path, ds: &DataSet) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(&ds.headers)?;
    for row in &ds.rows {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}

/// `<title>_<location>_<YYYYMMDD_HHMMSS>.csv`
pub fn file_name_for(title: &str, location: &str, now: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}.csv",
        filename_part(title),
        filename_part(location),
        now.format(STAMP_FMT)
    )
}

/// Write a new run file. No records → nothing written.
pub fn write_new(
    dir: &Path,
    title: &str,
    location: &str,
    records: &[JobRecord],
    now: NaiveDateTime,
) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        return Ok(None);
    }
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name_for(title, location, now));
    save(&path, &DataSet::from_records(records))?;
    log::info!("Saved {} jobs to {}", records.len(), path.display());
    Ok(Some(path))
}

/// All `*.csv` files in `dir`, newest first. A missing directory is empty.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut found: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        if path.extension().and_then(|s| s.to_str()) != Some("csv") { continue; }
        let mtime = fs::metadata(&path)
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        found.push((mtime, path));
    }
    found.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
    Ok(found.into_iter().map(|(_, p)| p).collect())
}

pub fn latest_file(dir: &Path) -> Result<Option<PathBuf>> {
    Ok(list_files(dir)?.into_iter().next())
}

fn require_latest(dir: &Path) -> Result<PathBuf> {
    latest_file(dir)?.ok_or_else(|| StoreError::NoDataFiles(dir.to_path_buf()))
}

/// Load the newest file in `dir`.
pub fn load_latest(dir: &Path) -> Result<(PathBuf, DataSet)> {
    let path = require_latest(dir)?;
    let ds = load(&path)?;
    Ok((path, ds))
}

/* ---------- status tracking ---------- */

/// Field changes for one posting. `None` leaves a field as it is.
#[derive(Clone, Debug, Default)]
pub struct StatusUpdate {
    pub status: Status,
    pub date_applied: Option<String>,
    pub deadline: Option<String>,
    pub application_link: Option<String>,
    pub resume_link: Option<String>,
    pub notes: Option<String>,
}

impl StatusUpdate {
    pub fn new(status: Status) -> Self {
        Self { status, ..Self::default() }
    }
}

/// Apply `update` to every row whose job_id equals `job_id`.
/// Returns the number of rows changed.
pub fn update_status(
    ds: &mut DataSet,
    job_id: &str,
    update: &StatusUpdate,
    today: NaiveDate,
) -> Result<usize> {
    ds.pad_rows();
    let id_ix = ds
        .column(col::JOB_ID)
        .ok_or_else(|| StoreError::JobNotFound(s!(job_id)))?;
    let hits: Vec<usize> = ds
        .rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.get(id_ix).is_some_and(|c| c == job_id))
        .map(|(i, _)| i)
        .collect();
    if hits.is_empty() {
        return Err(StoreError::JobNotFound(s!(job_id)));
    }

    let date_applied = update.date_applied.clone().or_else(|| {
        (update.status == Status::Applied).then(|| format_date(today))
    });

    let mut changes: Vec<(&str, String)> = vec![(col::STATUS, update.status.to_string())];
    let optional = [
        (col::DATE_APPLIED, &date_applied),
        (col::DEADLINE, &update.deadline),
        (col::APPLICATION_LINK, &update.application_link),
        (col::RESUME_LINK, &update.resume_link),
        (col::NOTES, &update.notes),
    ];
    for (name, value) in optional {
        if let Some(v) = value {
            changes.push((name, v.clone()));
        }
    }

    for (name, value) in changes {
        let ix = ds.ensure_column(name);
        for &row in &hits {
            ds.rows[row][ix] = value.clone();
        }
    }
    Ok(hits.len())
}

/// Load `path`, apply the update, save. Nothing is written on error.
pub fn update_file(path: &Path, job_id: &str, update: &StatusUpdate, today: NaiveDate) -> Result<usize> {
    let mut ds = load(path)?;
    let n = update_status(&mut ds, job_id, update, today)?;
    save(path, &ds)?;
    log::info!("Updated job {job_id} to {} in {}", update.status, path.display());
    Ok(n)
}

pub fn update_latest(dir: &Path, job_id: &str, update: &StatusUpdate, today: NaiveDate) -> Result<usize> {
    let path = require_latest(dir)?;
    update_file(&path, job_id, update, today)
}

/// Indices of rows whose status equals `status` exactly.
/// `None` or "All" selects every row.
pub fn rows_with_status(ds: &DataSet, status: Option<&str>) -> Vec<usize> {
    let wanted = match status {
        None | Some(ALL_STATUSES) => return (0..ds.rows.len()).collect(),
        Some(s) => s,
    };
    let Some(ix) = ds.column(col::STATUS) else {
        return Vec::new();
    };
    ds.rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.get(ix).is_some_and(|c| c == wanted))
        .map(|(i, _)| i)
        .collect()
}

pub fn filter_by_status(ds: &DataSet, status: Option<&str>) -> DataSet {
    let rows = rows_with_status(ds, status)
        .into_iter()
        .map(|i| ds.rows[i].clone())
        .collect();
    DataSet { headers: ds.headers.clone(), rows }
}

/* ---------- age pruning ---------- */

#[derive(Clone, Debug)]
pub struct PrunePlan {
    pub kept: DataSet,
    pub removed: usize,
}

/// Split `ds` into rows to keep and a count of rows older than `max_days`.
///
/// A missing posting_date column is derived from time_posted first.
/// Rows without a readable date are kept.
pub fn plan_prune(ds: &DataSet, max_days: i64, today: NaiveDate) -> Result<PrunePlan> {
    let mut work = ds.clone();
    work.pad_rows();

    if work.column(col::POSTING_DATE).is_none() {
        if let Some(tp) = work.column(col::TIME_POSTED) {
            let ix = work.ensure_column(col::POSTING_DATE);
            for row in &mut work.rows {
                if let Some(d) = parse_relative_date(&row[tp], today) {
                    row[ix] = format_date(d);
                }
            }
            log::debug!("Derived {} from {}", col::POSTING_DATE, col::TIME_POSTED);
        }
    }
    let ix = work.column(col::POSTING_DATE).ok_or(StoreError::NoPostingDates)?;

    let dates: Vec<Option<NaiveDate>> = work.rows.iter().map(|r| parse_date(&r[ix])).collect();
    if !work.rows.is_empty() && dates.iter().all(Option::is_none) {
        return Err(StoreError::NoPostingDates);
    }

    let before = work.rows.len();
    let rows = std::mem::take(&mut work.rows);
    work.rows = rows
        .into_iter()
        .zip(dates)
        .filter(|(_, d)| match d {
            Some(d) => (today - *d).num_days() <= max_days,
            None => true,
        })
        .map(|(r, _)| r)
        .collect();
    let removed = before - work.rows.len();

    Ok(PrunePlan { kept: work, removed })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(headers: &[&str], rows: &[&[&str]]) -> DataSet {
        DataSet {
            headers: headers.iter().map(|h| s!(*h)).collect(),
            rows: rows.iter().map(|r| r.iter().map(|c| s!(*c)).collect()).collect(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn file_name_replaces_separators() {
        let now = day(2024, 3, 5).and_hms_opt(14, 7, 9).unwrap();
        assert_eq!(
            file_name_for("Rust Developer", "New York/NY", now),
            "Rust_Developer_New_York_NY_20240305_140709.csv"
        );
    }

    #[test]
    fn ensure_column_pads_rows() {
        let mut d = ds(&["job_id"], &[&["1"], &["2"]]);
        assert_eq!(d.ensure_column("notes"), 1);
        assert_eq!(d.ensure_column("job_id"), 0);
        assert!(d.rows.iter().all(|r| r.len() == 2));
        assert_eq!(d.cell(1, "notes"), Some(""));
    }

    #[test]
    fn applied_without_date_is_stamped_today() {
        let mut d = ds(&["job_id", "status", "date_applied"], &[&["1", "Not Applied", ""], &["2", "Not Applied", ""]]);
        let n = update_status(&mut d, "2", &StatusUpdate::new(Status::Applied), day(2024, 5, 1)).unwrap();
        assert_eq!(n, 1);
        assert_eq!(d.cell(1, "status"), Some("Applied"));
        assert_eq!(d.cell(1, "date_applied"), Some("2024-05-01"));
        assert_eq!(d.cell(0, "status"), Some("Not Applied"));
    }

    #[test]
    fn other_status_keeps_date_applied() {
        let mut d = ds(&["job_id", "status", "date_applied"], &[&["1", "Applied", "2024-04-01"]]);
        update_status(&mut d, "1", &StatusUpdate::new(Status::Rejected), day(2024, 5, 1)).unwrap();
        assert_eq!(d.cell(0, "date_applied"), Some("2024-04-01"));
        assert_eq!(d.column("notes"), None);
    }

    #[test]
    fn unknown_job_or_missing_id_column() {
        let mut d = ds(&["job_id", "status"], &[&["1", "Applied"]]);
        let before = d.clone();
        assert!(matches!(
            update_status(&mut d, "9", &StatusUpdate::new(Status::Applied), day(2024, 5, 1)),
            Err(StoreError::JobNotFound(id)) if id == "9"
        ));
        assert_eq!(d, before);

        let mut no_ids = ds(&["status"], &[&["Applied"]]);
        let before = no_ids.clone();
        assert!(matches!(
            update_status(&mut no_ids, "1", &StatusUpdate::default(), day(2024, 5, 1)),
            Err(StoreError::JobNotFound(id)) if id == "1"
        ));
        assert_eq!(no_ids, before);
    }

    #[test]
    fn filter_is_exact() {
        let d = ds(&["job_id", "status"], &[&["1", "Applied"], &["2", "Applied "], &["3", "Rejected"]]);
        assert_eq!(filter_by_status(&d, Some("Applied")).row_count(), 1);
        assert_eq!(filter_by_status(&d, Some("All")).row_count(), 3);
        assert_eq!(filter_by_status(&d, None).row_count(), 3);
        assert_eq!(filter_by_status(&d, Some("Offer Received")).row_count(), 0);
    }

    #[test]
    fn prune_keeps_undated_rows() {
        let d = ds(
            &["job_id", "posting_date"],
            &[&["old", "2024-01-01"], &["edge", "2024-04-01"], &["new", "2024-04-30"], &["none", ""]],
        );
        let plan = plan_prune(&d, 30, day(2024, 5, 1)).unwrap();
        let ids: Vec<&str> = plan.kept.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["edge", "new", "none"]);
        assert_eq!(plan.removed, 1);
    }

    #[test]
    fn prune_derives_from_time_posted() {
        let d = ds(&["job_id", "time_posted"], &[&["a", "45 days ago"], &["b", "3 days ago"]]);
        let plan = plan_prune(&d, 30, day(2024, 5, 1)).unwrap();
        assert_eq!(plan.removed, 1);
        assert_eq!(plan.kept.cell(0, "posting_date"), Some("2024-04-28"));
    }

    #[test]
    fn prune_refuses_without_dates() {
        let d = ds(&["job_id", "company"], &[&["a", "Acme"]]);
        assert!(matches!(plan_prune(&d, 30, day(2024, 5, 1)), Err(StoreError::NoPostingDates)));

        let d = ds(&["job_id", "time_posted"], &[&["a", "recently"]]);
        assert!(matches!(plan_prune(&d, 30, day(2024, 5, 1)), Err(StoreError::NoPostingDates)));
    }
}
