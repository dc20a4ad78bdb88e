// src/scrape.rs
//
// Search pipeline: result pages → job ids → detail pages → records → CSV.
// Strictly sequential. Every page and every posting fails on its own.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use rand::Rng;
use url::Url;

use crate::config::consts::{
    BASE_URL, DETAIL_PATH, DETAIL_PAUSE_SECS, PAGE_PAUSE_SECS, PAGE_SIZE, SEARCH_PATH,
};
use crate::config::options::{recency_code, SearchOptions};
use crate::core::net::{Fetch, FetchError};
use crate::extract::{extract_job_ids, extract_record};
use crate::progress::Progress;
use crate::record::JobRecord;
use crate::store::{self, StoreError};

/// Random pauses between requests, in seconds.
#[derive(Clone, Copy, Debug)]
pub struct Pacing {
    pub page: (f64, f64),
    pub detail: (f64, f64),
}

impl Pacing {
    pub fn polite() -> Self {
        Self { page: PAGE_PAUSE_SECS, detail: DETAIL_PAUSE_SECS }
    }

    /// No sleeping at all (tests, benches).
    pub fn none() -> Self {
        Self { page: (0.0, 0.0), detail: (0.0, 0.0) }
    }
}

impl Default for Pacing {
    fn default() -> Self { Self::polite() }
}

fn pause((lo, hi): (f64, f64)) {
    if hi <= 0.0 {
        return;
    }
    let secs = if hi > lo { rand::thread_rng().gen_range(lo..=hi) } else { hi };
    thread::sleep(Duration::from_secs_f64(secs));
}

pub fn search_url(opts: &SearchOptions, page: u32) -> Result<Url, FetchError> {
    let mut url = Url::parse(&join!(BASE_URL, SEARCH_PATH))?;
    {
        let mut q = url.query_pairs_mut();
        q.append_pair("keywords", &opts.title);
        q.append_pair("location", &opts.location);
        q.append_pair("start", &(page * PAGE_SIZE).to_string());
        if let Some(code) = opts.job_type.code() {
            q.append_pair("f_JT", code);
        }
        if let Some(code) = recency_code(opts.max_age_days) {
            q.append_pair("f_TPR", code);
        }
    }
    Ok(url)
}

pub fn detail_url(job_id: &str) -> String {
    join!(BASE_URL, DETAIL_PATH, job_id)
}

/// Collect job ids from `opts.pages` result pages, in page order.
/// A page that fails to load is logged and skipped.
pub fn search_job_ids(
    fetch: &dyn Fetch,
    opts: &SearchOptions,
    pacing: &Pacing,
    progress: &mut dyn Progress,
) -> Vec<String> {
    let mut ids = Vec::new();
    progress.begin(opts.pages as usize);

    for page in 0..opts.pages {
        if page > 0 {
            pause(pacing.page);
        }
        progress.log(&format!("Searching page {}/{}…", page + 1, opts.pages));

        let got = search_url(opts, page).and_then(|url| fetch.fetch(url.as_str()));
        match got {
            Ok(html) => {
                let found = extract_job_ids(&html);
                log::info!("Page {}: {} postings", page + 1, found.len());
                ids.extend(found);
            }
            Err(e) => log::warn!("Search page {} failed: {e}", page + 1),
        }
    }

    ids
}

/// Fetch and extract each posting. Failures are logged and skipped.
pub fn fetch_records(
    fetch: &dyn Fetch,
    ids: &[String],
    pacing: &Pacing,
    today: NaiveDate,
    progress: &mut dyn Progress,
) -> Vec<JobRecord> {
    let mut out = Vec::with_capacity(ids.len());
    progress.begin(ids.len());

    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            pause(pacing.detail);
        }
        match fetch.fetch(&detail_url(id)) {
            Ok(html) => {
                out.push(extract_record(id, &html, today));
                progress.item_done(id);
            }
            Err(e) => {
                log::warn!("Job {id} skipped: {e}");
                progress.item_failed(id);
            }
        }
    }

    out
}

#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub ids_found: usize,
    pub records: usize,
    pub file: Option<PathBuf>,
}

/// Whole search: ids → records → new CSV file in `data_dir`.
pub fn run_search(
    fetch: &dyn Fetch,
    opts: &SearchOptions,
    pacing: &Pacing,
    data_dir: &Path,
    progress: &mut dyn Progress,
) -> Result<RunSummary, StoreError> {
    log::info!("Search: '{}' in '{}' ({} pages)", opts.title, opts.location, opts.pages);

    let ids = search_job_ids(fetch, opts, pacing, progress);
    if ids.is_empty() {
        progress.log("No jobs found");
        progress.finish();
        return Ok(RunSummary::default());
    }
    progress.log(&format!("Found {} jobs, fetching details…", ids.len()));
    pause(pacing.page);

    let now = Local::now().naive_local();
    let records = fetch_records(fetch, &ids, pacing, now.date(), progress);
    let file = store::write_new(data_dir, &opts.title, &opts.location, &records, now);
    progress.finish();

    let file = file?;
    match &file {
        Some(p) => log::info!("Run finished: {} of {} postings saved to {}", records.len(), ids.len(), p.display()),
        None => log::warn!("Run finished: none of {} postings could be fetched", ids.len()),
    }
    Ok(RunSummary { ids_found: ids.len(), records: records.len(), file })
}
