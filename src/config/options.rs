// src/config/options.rs
use clap::ValueEnum;

use super::consts::DEFAULT_PAGES;

/// Employment-type filter sent as `f_JT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum JobType {
    #[default]
    Any,
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::Any,
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    pub fn code(self) -> Option<&'static str> {
        match self {
            JobType::Any        => None,
            JobType::FullTime   => Some("F"),
            JobType::PartTime   => Some("P"),
            JobType::Contract   => Some("C"),
            JobType::Internship => Some("I"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobType::Any        => "Any",
            JobType::FullTime   => "Full-time",
            JobType::PartTime   => "Part-time",
            JobType::Contract   => "Contract",
            JobType::Internship => "Internship",
        }
    }
}

/// Posting-age choices offered by the search form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AgeFilter {
    #[default]
    AnyTime,
    Past24Hours,
    PastWeek,
    PastMonth,
}

impl AgeFilter {
    pub const ALL: [AgeFilter; 4] = [
        AgeFilter::AnyTime,
        AgeFilter::Past24Hours,
        AgeFilter::PastWeek,
        AgeFilter::PastMonth,
    ];

    pub fn max_age_days(self) -> Option<u32> {
        match self {
            AgeFilter::AnyTime     => None,
            AgeFilter::Past24Hours => Some(1),
            AgeFilter::PastWeek    => Some(7),
            AgeFilter::PastMonth   => Some(30),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeFilter::AnyTime     => "Any Time",
            AgeFilter::Past24Hours => "Past 24 Hours",
            AgeFilter::PastWeek    => "Past Week",
            AgeFilter::PastMonth   => "Past Month",
        }
    }
}

/// Map a maximum posting age onto the endpoint's recency code (`f_TPR`).
/// Ages beyond a month have no code; the search is then unrestricted.
pub fn recency_code(max_age_days: Option<u32>) -> Option<&'static str> {
    match max_age_days? {
        0       => None,
        1       => Some("r86400"),
        2..=7   => Some("r604800"),
        8..=30  => Some("r2592000"),
        _       => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub title: String,
    pub location: String,
    pub job_type: JobType,
    pub pages: u32,
    pub max_age_days: Option<u32>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            title: s!("Python Developer"),
            location: s!("Toronto"),
            job_type: JobType::Any,
            pages: DEFAULT_PAGES,
            max_age_days: None,
        }
    }
}

impl SearchOptions {
    /// Title and location are both required to search.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.location.trim().is_empty()
    }
}
