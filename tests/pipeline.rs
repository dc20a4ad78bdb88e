// tests/pipeline.rs
//
// Search pipeline against canned pages: no network, no sleeping.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use job_tracker::config::options::SearchOptions;
use job_tracker::core::net::{Fetch, FetchError};
use job_tracker::progress::{NullProgress, Progress};
use job_tracker::scrape::{self, Pacing};
use job_tracker::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("job_tracker_pipeline_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Serves pages by URL substring; anything else is a 404.
struct FakeSite {
    pages: Vec<(String, String)>,
    hits: RefCell<Vec<String>>,
}

impl FakeSite {
    fn new(pages: &[(&str, String)]) -> Self {
        Self {
            pages: pages.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            hits: RefCell::new(Vec::new()),
        }
    }
}

impl Fetch for FakeSite {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.hits.borrow_mut().push(url.to_string());
        self.pages
            .iter()
            .find(|(k, _)| url.contains(k.as_str()))
            .map(|(_, v)| v.clone())
            .ok_or_else(|| FetchError::Status { status: 404, url: url.to_string() })
    }
}

fn card_list(ids: &[&str]) -> String {
    ids.iter()
        .map(|id| format!(r#"<li><div class="base-card" data-entity-urn="urn:li:jobPosting:{id}"></div></li>"#))
        .collect()
}

fn posting(title: &str, company: &str) -> String {
    format!(
        r#"<h2 class="topcard__title">{title}</h2>
           <a class="topcard__org-name-link">{company}</a>
           <span class="posted-time-ago__text">3 days ago</span>
           <div class="show-more-less-html__markup">Contract role. Mail hr@{company}.com</div>"#
    )
}

fn opts(pages: u32) -> SearchOptions {
    SearchOptions {
        title: "Rust Dev".into(),
        location: "Remote".into(),
        pages,
        ..SearchOptions::default()
    }
}

#[derive(Default)]
struct Counting {
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Counting {
    fn item_done(&mut self, job_id: &str) { self.done.push(job_id.to_string()); }
    fn item_failed(&mut self, job_id: &str) { self.failed.push(job_id.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn failed_search_page_is_skipped() {
    // page 2 (start=25) is missing
    let site = FakeSite::new(&[
        ("start=0", card_list(&["1", "2"])),
        ("start=50", card_list(&["3"])),
    ]);
    let ids = scrape::search_job_ids(&site, &opts(3), &Pacing::none(), &mut NullProgress);
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(site.hits.borrow().len(), 3);
}

#[test]
fn failed_detail_is_skipped() {
    let site = FakeSite::new(&[
        ("jobPosting/10", posting("Engineer", "acme")),
        ("jobPosting/30", posting("Lead", "globex")),
    ]);
    let ids: Vec<String> = ["10", "20", "30"].iter().map(|s| s.to_string()).collect();
    let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let mut progress = Counting::default();

    let records = scrape::fetch_records(&site, &ids, &Pacing::none(), today, &mut progress);

    let got: Vec<&str> = records.iter().map(|r| r.job_id.as_str()).collect();
    assert_eq!(got, vec!["10", "30"]);
    assert_eq!(progress.done, vec!["10", "30"]);
    assert_eq!(progress.failed, vec!["20"]);
    assert_eq!(records[0].posting_date.as_deref(), Some("2024-05-07"));
    assert_eq!(records[0].job_type.as_deref(), Some("Contract"));
    assert_eq!(records[1].email.as_deref(), Some("hr@globex.com"));
}

#[test]
fn run_search_writes_one_file() {
    let dir = tmp_dir("run");
    let site = FakeSite::new(&[
        ("seeMoreJobPostings", card_list(&["77", "88"])),
        ("jobPosting/77", posting("Platform Engineer", "initech")),
    ]);
    let mut progress = Counting::default();

    let summary = scrape::run_search(&site, &opts(1), &Pacing::none(), &dir, &mut progress).unwrap();
    assert_eq!(summary.ids_found, 2);
    assert_eq!(summary.records, 1);
    assert!(progress.finished);

    let path = summary.file.expect("file written");
    assert!(path.file_name().unwrap().to_string_lossy().starts_with("Rust_Dev_Remote_"));
    let ds = store::load(&path).unwrap();
    assert_eq!(ds.row_count(), 1);
    assert_eq!(ds.cell(0, "job_id"), Some("77"));
    assert_eq!(ds.cell(0, "job_title"), Some("Platform Engineer"));
    assert_eq!(ds.cell(0, "status"), Some("Not Applied"));
}

#[test]
fn empty_search_writes_nothing() {
    let dir = tmp_dir("empty");
    let site = FakeSite::new(&[("seeMoreJobPostings", String::from("<ul></ul>"))]);
    let summary = scrape::run_search(&site, &opts(2), &Pacing::none(), &dir, &mut NullProgress).unwrap();
    assert_eq!(summary.ids_found, 0);
    assert!(summary.file.is_none());
    assert!(store::list_files(&dir).unwrap().is_empty());
    assert_eq!(site.hits.borrow().len(), 2);
}
