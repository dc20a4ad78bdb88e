// src/cli.rs
//
// Command-line surface for the `cli` binary.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::config::consts::{DATA_DIR, DEFAULT_PAGES, DEFAULT_PRUNE_DAYS, MAX_PAGES};
use crate::config::options::{JobType, SearchOptions};
use crate::core::net::{FetchError, HttpClient};
use crate::menu;
use crate::progress::Progress;
use crate::record::{col, Status};
use crate::scrape::{self, Pacing};
use crate::store::{self, DataSet, StatusUpdate, StoreError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("title and location are required")]
    IncompleteSearch,
}

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Search LinkedIn job postings and track applications")]
pub struct Cli {
    /// Directory holding the per-search CSV files
    #[arg(long, global = true, default_value = DATA_DIR)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a search and save the results to a new CSV file
    Search(SearchArgs),

    /// List tracked jobs
    List {
        /// Only rows with exactly this status
        #[arg(long)]
        status: Option<String>,
        /// Read this file instead of the newest one
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Update the application status of one job
    Update(UpdateArgs),

    /// Remove jobs posted more than N days ago
    Prune {
        #[arg(long, default_value_t = DEFAULT_PRUNE_DAYS)]
        max_days: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Interactive numbered menu
    Menu,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub location: String,
    #[arg(long, value_enum, default_value_t = JobType::Any)]
    pub job_type: JobType,
    #[arg(long, default_value_t = DEFAULT_PAGES, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGES as i64))]
    pub pages: u32,
    /// Only postings at most this many days old
    #[arg(long)]
    pub max_age_days: Option<u32>,
}

impl From<SearchArgs> for SearchOptions {
    fn from(a: SearchArgs) -> Self {
        SearchOptions {
            title: a.title,
            location: a.location,
            job_type: a.job_type,
            pages: a.pages,
            max_age_days: a.max_age_days,
        }
    }
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub job_id: String,
    /// New status, e.g. "Applied" or any custom text
    #[arg(long)]
    pub status: String,
    #[arg(long)]
    pub date_applied: Option<String>,
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long)]
    pub application_link: Option<String>,
    #[arg(long)]
    pub resume_link: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl UpdateArgs {
    fn to_update(&self) -> StatusUpdate {
        StatusUpdate {
            status: Status::from(self.status.as_str()),
            date_applied: self.date_applied.clone(),
            deadline: self.deadline.clone(),
            application_link: self.application_link.clone(),
            resume_link: self.resume_link.clone(),
            notes: self.notes.clone(),
        }
    }
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let today = Local::now().date_naive();
    let dir = cli.data_dir.as_path();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Search(args) => {
            let opts = SearchOptions::from(args);
            if !opts.is_complete() {
                return Err(CliError::IncompleteSearch);
            }
            let client = HttpClient::new()?;
            let mut progress = ConsoleProgress::default();
            let summary = scrape::run_search(&client, &opts, &Pacing::polite(), dir, &mut progress)?;
            match summary.file {
                Some(path) => writeln!(out, "Saved {} of {} jobs to {}", summary.records, summary.ids_found, path.display())?,
                None => writeln!(out, "No jobs saved")?,
            }
        }
        Command::List { status, file } => {
            let ds = load_target(dir, file.as_deref())?;
            write_job_list(&mut out, &ds, status.as_deref())?;
        }
        Command::Update(args) => {
            let update = args.to_update();
            let n = match &args.file {
                Some(path) => store::update_file(path, &args.job_id, &update, today)?,
                None => store::update_latest(dir, &args.job_id, &update, today)?,
            };
            writeln!(out, "Updated {n} row(s) for job {} to '{}'", args.job_id, update.status)?;
        }
        Command::Prune { max_days, yes, file } => {
            let path = match file {
                Some(p) => p,
                None => store::latest_file(dir)?.ok_or_else(|| StoreError::NoDataFiles(dir.to_path_buf()))?,
            };
            let stdin = io::stdin();
            prune_file(&path, max_days, yes, today, &mut stdin.lock(), &mut out)?;
        }
        Command::Menu => {
            let stdin = io::stdin();
            menu::run_menu(&mut stdin.lock(), &mut out, dir, today)?;
        }
    }
    Ok(())
}

fn load_target(dir: &Path, file: Option<&Path>) -> Result<DataSet, StoreError> {
    match file {
        Some(path) => store::load(path),
        None => store::load_latest(dir).map(|(_, ds)| ds),
    }
}

/// Plan a prune, ask unless `yes`, then save the kept rows.
pub fn prune_file<R: BufRead, W: Write>(
    path: &Path,
    max_days: i64,
    yes: bool,
    today: NaiveDate,
    input: &mut R,
    out: &mut W,
) -> Result<usize, CliError> {
    let ds = store::load(path)?;
    let plan = store::plan_prune(&ds, max_days, today)?;
    if plan.removed == 0 {
        writeln!(out, "No jobs older than {max_days} days")?;
        return Ok(0);
    }
    if !yes {
        write!(out, "Remove {} jobs older than {max_days} days? [y/N] ", plan.removed)?;
        out.flush()?;
        let mut answer = s!();
        input.read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            writeln!(out, "Cancelled")?;
            return Ok(0);
        }
    }
    store::save(path, &plan.kept)?;
    log::info!("Pruned {} jobs from {}", plan.removed, path.display());
    writeln!(out, "Removed {} jobs, {} remaining", plan.removed, plan.kept.row_count())?;
    Ok(plan.removed)
}

const LIST_COLUMNS: &[(&str, usize)] = &[
    (col::JOB_ID, 12),
    (col::COMPANY, 24),
    (col::JOB_TITLE, 32),
    (col::STATUS, 20),
    (col::DATE_APPLIED, 12),
    (col::TYPE, 16),
    (col::EMAIL, 28),
];

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return s!(text);
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Fixed-width job table followed by a total line.
pub fn write_job_list<W: Write>(out: &mut W, ds: &DataSet, status: Option<&str>) -> io::Result<()> {
    let view = store::filter_by_status(ds, status);
    if view.is_empty() {
        writeln!(out, "No jobs found")?;
        return Ok(());
    }

    let header: Vec<String> = LIST_COLUMNS
        .iter()
        .map(|(name, w)| format!("{:<w$}", clip(name, *w), w = *w))
        .collect();
    writeln!(out, "{}", header.join(" ").trim_end())?;

    for i in 0..view.row_count() {
        let line: Vec<String> = LIST_COLUMNS
            .iter()
            .map(|(name, w)| format!("{:<w$}", clip(view.cell(i, name).unwrap_or(""), *w), w = *w))
            .collect();
        writeln!(out, "{}", line.join(" ").trim_end())?;
    }
    writeln!(out, "\nTotal: {} jobs", view.row_count())
}

/// Progress on stderr, one line per event.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.failed = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, job_id: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {job_id}", self.done + self.failed, self.total);
    }
    fn item_failed(&mut self, job_id: &str) {
        self.failed += 1;
        eprintln!("[{}/{}] {job_id} failed", self.done + self.failed, self.total);
    }
    fn finish(&mut self) {
        if self.failed > 0 {
            eprintln!("Done: {} fetched, {} failed", self.done, self.failed);
        }
    }
}
