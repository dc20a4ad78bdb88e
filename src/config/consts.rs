// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.linkedin.com";
pub const SEARCH_PATH: &str = "/jobs-guest/jobs/api/seeMoreJobPostings/search";
pub const DETAIL_PATH: &str = "/jobs-guest/jobs/api/jobPosting/";
pub const VIEW_PATH: &str = "/jobs/view/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Search
pub const PAGE_SIZE: u32 = 25; // postings per result page
pub const DEFAULT_PAGES: u32 = 3;
pub const MAX_PAGES: u32 = 10;

// Pacing (seconds, uniform random)
pub const PAGE_PAUSE_SECS: (f64, f64) = (2.0, 5.0);
pub const DETAIL_PAUSE_SECS: (f64, f64) = (1.0, 3.0);

// Local store
pub const DATA_DIR: &str = "job_tracker/data";
pub const LOG_FILE: &str = "job_tracker/debug.log";

// Tracking
pub const DEFAULT_PRUNE_DAYS: i64 = 30;
pub const DATE_FMT: &str = "%Y-%m-%d";
pub const STAMP_FMT: &str = "%Y%m%d_%H%M%S";
