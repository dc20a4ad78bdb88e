// src/record.rs
//
// One tracked posting, plus the CSV column vocabulary.
// Cells are free text on disk; `JobRecord` is the typed view used by
// extraction and by round-trips through the store.

use std::fmt;

use crate::config::consts::{BASE_URL, VIEW_PATH};

/// Column names as written in the CSV header.
pub mod col {
    pub const JOB_ID: &str = "job_id";
    pub const COMPANY: &str = "company";
    pub const JOB_TITLE: &str = "job_title";
    pub const STATUS: &str = "status";
    pub const DATE_APPLIED: &str = "date_applied";
    pub const DEADLINE: &str = "deadline";
    pub const TYPE: &str = "type";
    pub const CONTACT_PERSON: &str = "contact_person";
    pub const EMAIL: &str = "email";
    pub const APPLICATION_LINK: &str = "application_link";
    pub const RESUME_LINK: &str = "resume_link";
    pub const LOCATION: &str = "location";
    pub const TIME_POSTED: &str = "time_posted";
    pub const NUM_APPLICANTS: &str = "num_applicants";
    pub const POSTING_DATE: &str = "posting_date";
    pub const NOTES: &str = "notes";
    pub const DESCRIPTION: &str = "description";
}

/// Preferred leading column order for a fresh file.
pub const PREFERRED_COLUMNS: &[&str] = &[
    col::COMPANY,
    col::JOB_TITLE,
    col::STATUS,
    col::DATE_APPLIED,
    col::DEADLINE,
    col::TYPE,
    col::CONTACT_PERSON,
    col::EMAIL,
    col::APPLICATION_LINK,
    col::RESUME_LINK,
    col::LOCATION,
    col::TIME_POSTED,
    col::NUM_APPLICANTS,
    col::JOB_ID,
];

/// Extracted columns that trail the preferred ones. The description is
/// never written.
pub const EXTRA_COLUMNS: &[&str] = &[col::POSTING_DATE];

pub fn default_headers() -> Vec<String> {
    PREFERRED_COLUMNS
        .iter()
        .chain(EXTRA_COLUMNS)
        .map(|c| s!(*c))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    NotApplied,
    Applied,
    InterviewScheduled,
    Rejected,
    OfferReceived,
    Other(String),
}

impl Status {
    /// Statuses offered by the menus, in display order.
    pub const KNOWN: [Status; 5] = [
        Status::NotApplied,
        Status::Applied,
        Status::InterviewScheduled,
        Status::Rejected,
        Status::OfferReceived,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Status::NotApplied         => "Not Applied",
            Status::Applied            => "Applied",
            Status::InterviewScheduled => "Interview Scheduled",
            Status::Rejected           => "Rejected",
            Status::OfferReceived      => "Offer Received",
            Status::Other(s)           => s,
        }
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        let s = s.trim();
        Status::KNOWN
            .into_iter()
            .find(|k| k.as_str() == s)
            .unwrap_or_else(|| Status::Other(s!(s)))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn application_link_for(job_id: &str) -> String {
    join!(BASE_URL, VIEW_PATH, job_id)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobRecord {
    pub job_id: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub status: Status,
    pub date_applied: Option<String>,
    pub deadline: Option<String>,
    pub job_type: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub application_link: Option<String>,
    pub resume_link: Option<String>,
    pub location: Option<String>,
    pub time_posted: Option<String>,
    pub num_applicants: Option<String>,
    pub posting_date: Option<String>,
    pub notes: Option<String>,
    pub description: Option<String>,
}

impl JobRecord {
    /// Fresh record for a posting: not applied, linked to its public view page.
    pub fn new(job_id: &str) -> Self {
        Self {
            job_id: s!(job_id),
            status: Status::NotApplied,
            application_link: Some(application_link_for(job_id)),
            ..Self::default()
        }
    }

    /// Cell text for a column; `None` for empty fields and unknown columns.
    pub fn get(&self, column: &str) -> Option<String> {
        let v = match column {
            col::JOB_ID           => return Some(self.job_id.clone()),
            col::STATUS           => return Some(self.status.to_string()),
            col::COMPANY          => &self.company,
            col::JOB_TITLE        => &self.job_title,
            col::DATE_APPLIED     => &self.date_applied,
            col::DEADLINE         => &self.deadline,
            col::TYPE             => &self.job_type,
            col::CONTACT_PERSON   => &self.contact_person,
            col::EMAIL            => &self.email,
            col::APPLICATION_LINK => &self.application_link,
            col::RESUME_LINK      => &self.resume_link,
            col::LOCATION         => &self.location,
            col::TIME_POSTED      => &self.time_posted,
            col::NUM_APPLICANTS   => &self.num_applicants,
            col::POSTING_DATE     => &self.posting_date,
            col::NOTES            => &self.notes,
            col::DESCRIPTION      => &self.description,
            _ => return None,
        };
        v.clone()
    }

    /// Set a column from cell text. Empty text clears the field.
    /// Unknown columns are ignored.
    pub fn set(&mut self, column: &str, value: &str) {
        let opt = if value.is_empty() { None } else { Some(s!(value)) };
        match column {
            col::JOB_ID           => self.job_id = s!(value),
            col::STATUS           => self.status = Status::from(value),
            col::COMPANY          => self.company = opt,
            col::JOB_TITLE        => self.job_title = opt,
            col::DATE_APPLIED     => self.date_applied = opt,
            col::DEADLINE         => self.deadline = opt,
            col::TYPE             => self.job_type = opt,
            col::CONTACT_PERSON   => self.contact_person = opt,
            col::EMAIL            => self.email = opt,
            col::APPLICATION_LINK => self.application_link = opt,
            col::RESUME_LINK      => self.resume_link = opt,
            col::LOCATION         => self.location = opt,
            col::TIME_POSTED      => self.time_posted = opt,
            col::NUM_APPLICANTS   => self.num_applicants = opt,
            col::POSTING_DATE     => self.posting_date = opt,
            col::NOTES            => self.notes = opt,
            col::DESCRIPTION      => self.description = opt,
            _ => {}
        }
    }

    /// Lay the record out under `headers`; unknown columns become empty cells.
    pub fn to_row(&self, headers: &[String]) -> Vec<String> {
        headers
            .iter()
            .map(|h| self.get(h).unwrap_or_default())
            .collect()
    }

    pub fn from_row(headers: &[String], row: &[String]) -> Self {
        let mut rec = Self::default();
        for (h, cell) in headers.iter().zip(row) {
            rec.set(h, cell);
        }
        rec
    }
}
