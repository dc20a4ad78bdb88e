// src/extract/mod.rs
//
// Posting markup → JobRecord, and search-listing markup → job ids.
// Every field lookup is best effort; a missing element leaves the field empty.

pub mod dates;
pub mod fields;

use chrono::NaiveDate;
use scraper::Html;

use crate::core::html::{first_text, first_text_any, raw_text, select_all, select_first, select_within};
use crate::record::JobRecord;

const TITLE: &str = r#"h2[class*="topcard__title"]"#;
const COMPANY: &[&str] = &[
    r#"a[class*="topcard__org-name-link"]"#,
    r#"span[class*="topcard__org-name"]"#,
];
const LOCATION: &str = r#"span[class*="topcard__flavor--bullet"]"#;
const TIME_POSTED: &str = r#"span[class*="posted-time-ago__text"]"#;
const APPLICANTS: &[&str] = &[
    r#"span[class*="num-applicants__caption"]"#,
    r#"figcaption[class*="num-applicants__caption"]"#,
];
const DESCRIPTION: &str = "div.show-more-less-html__markup";

const CARD: &str = "div.base-card[data-entity-urn]";
const URN_ATTR: &str = "data-entity-urn";

/// Build a record from one posting's detail markup.
pub fn extract_record(job_id: &str, html: &str, today: NaiveDate) -> JobRecord {
    let doc = Html::parse_document(html);
    let mut rec = JobRecord::new(job_id);

    rec.job_title = first_text(&doc, TITLE);
    rec.company = first_text_any(&doc, COMPANY);
    rec.location = first_text(&doc, LOCATION);
    rec.num_applicants = first_text_any(&doc, APPLICANTS);

    rec.time_posted = first_text(&doc, TIME_POSTED);
    rec.posting_date = rec
        .time_posted
        .as_deref()
        .and_then(|t| dates::parse_relative_date(t, today))
        .map(dates::format_date);

    rec.description = select_first(&doc, DESCRIPTION)
        .map(raw_text)
        .filter(|t| !t.is_empty());

    let desc = rec.description.as_deref();
    rec.job_type = Some(fields::job_type(&doc, desc));
    if let Some(text) = desc {
        rec.email = fields::email(text);
        rec.deadline = fields::deadline(text);
        rec.contact_person = fields::contact_person(text);
    }

    rec
}

/// Job ids from a search-results page, in document order.
/// `urn:li:jobPosting:3912345678` → `3912345678`.
pub fn extract_job_ids(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    select_all(&doc, "li")
        .into_iter()
        .filter_map(|li| select_within(li, CARD))
        .filter_map(|card| card.value().attr(URN_ATTR))
        .filter_map(|urn| urn.rsplit(':').next())
        .filter(|id| !id.is_empty())
        .map(|id| s!(id))
        .collect()
}
