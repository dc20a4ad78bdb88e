// src/menu.rs
//
// One-shot numbered console menu: list all, list by status, or update one job.
// Store errors are printed, not returned; only console I/O can fail the menu.

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::cli::write_job_list;
use crate::record::Status;
use crate::store::{self, StatusUpdate};

/// Status choices 1-4; anything else asks for custom text.
const STATUS_CHOICES: [Status; 4] = [
    Status::Applied,
    Status::InterviewScheduled,
    Status::Rejected,
    Status::OfferReceived,
];

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = s!();
    input.read_line(&mut line)?;
    Ok(s!(line.trim()))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    data_dir: &Path,
    today: NaiveDate,
) -> io::Result<()> {
    writeln!(out, "Job Application Status Updater")?;
    writeln!(out, "1. List all jobs")?;
    writeln!(out, "2. List jobs by status")?;
    writeln!(out, "3. Update job status")?;

    match prompt(input, out, "Enter your choice (1-3): ")?.as_str() {
        "1" => list(out, data_dir, None),
        "2" => {
            let status = prompt(input, out, "Enter status to filter by (e.g., Applied, Not Applied): ")?;
            list(out, data_dir, Some(&status))
        }
        "3" => update(input, out, data_dir, today),
        _ => writeln!(out, "Invalid choice."),
    }
}

fn list<W: Write>(out: &mut W, data_dir: &Path, status: Option<&str>) -> io::Result<()> {
    match store::load_latest(data_dir) {
        Ok((_, ds)) => write_job_list(out, &ds, status),
        Err(e) => writeln!(out, "Error listing jobs: {e}"),
    }
}

fn update<R: BufRead, W: Write>(input: &mut R, out: &mut W, data_dir: &Path, today: NaiveDate) -> io::Result<()> {
    let job_id = prompt(input, out, "Enter job ID to update: ")?;

    writeln!(out, "\nSelect new status:")?;
    for (i, st) in STATUS_CHOICES.iter().enumerate() {
        writeln!(out, "{}. {st}", i + 1)?;
    }
    writeln!(out, "5. Custom status")?;

    let choice = prompt(input, out, "Enter your choice (1-5): ")?;
    let status = match choice.parse::<usize>() {
        Ok(n @ 1..=4) => STATUS_CHOICES[n - 1].clone(),
        _ => Status::from(prompt(input, out, "Enter custom status: ")?.as_str()),
    };

    let mut update = StatusUpdate::new(status);
    update.date_applied = non_empty(prompt(input, out, "Enter date applied (YYYY-MM-DD) or leave blank for today: ")?);
    update.resume_link = non_empty(prompt(input, out, "Enter resume link (optional): ")?);
    update.notes = non_empty(prompt(input, out, "Enter any notes (optional): ")?);

    match store::update_latest(data_dir, &job_id, &update, today) {
        Ok(_) => writeln!(out, "Updated job {job_id} status to '{}'", update.status),
        Err(e) => writeln!(out, "Error updating job status: {e}"),
    }
}
