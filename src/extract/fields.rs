// src/extract/fields.rs
//
// Free-text lookups over a posting's description. Each one stands alone and
// returns None on a miss, so a bad field never costs the rest of the record.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::core::html::{select_all, select_within, text_of};

pub const NOT_SPECIFIED: &str = "Not specified";

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// `Month D[st|nd|rd|th][ ,]+YYYY`
const DATE_EXPR: &str = r"([A-Za-z]+\s+\d{1,2}(?:st|nd|rd|th)?[\s,]+\d{4})";

/// Tried in order; the first phrase that matches anywhere wins.
const DEADLINE_PHRASES: &[&str] = &[
    "application deadline",
    "apply by",
    "closing date",
    "applications close",
    "deadline",
    "applications due",
];

/// Two or three capitalized words.
const NAME_EXPR: &str = r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2})";

/// Lead-ins before a contact name, tried in order. Case-insensitive.
const CONTACT_LEADS: &[&str] = &[
    r"contact",
    r"reach out to",
    r"email",
    r"send.*resume.*to",
];

/// Description keywords → employment type, tried in order.
const TYPE_KEYWORDS: &[(&[&str], &str)] = &[
    (&["full-time", "full time"], "Full-time"),
    (&["part-time", "part time"], "Part-time"),
    (&["contract"], "Contract"),
    (&["co-op", "coop", "internship"], "Co-op/Internship"),
];

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

static DEADLINES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DEADLINE_PHRASES
        .iter()
        .filter_map(|p| Regex::new(&format!(r"(?i){p}[:\s]*{DATE_EXPR}")).ok())
        .collect()
});

static CONTACTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CONTACT_LEADS
        .iter()
        .filter_map(|lead| Regex::new(&format!(r"(?i:{lead})\s+{NAME_EXPR}")).ok())
        .collect()
});

/// First email address in document order.
pub fn email(text: &str) -> Option<String> {
    EMAIL.as_ref()?.find(text).map(|m| s!(m.as_str()))
}

/// Application deadline phrase, by pattern priority rather than text position.
pub fn deadline(text: &str) -> Option<String> {
    DEADLINES
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| s!(m.as_str()))
}

/// Named contact person, by pattern priority.
pub fn contact_person(text: &str) -> Option<String> {
    CONTACTS
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| s!(m.as_str()))
}

/// Employment type from the structured criteria list, falling back to
/// keywords in the description. Never empty.
pub fn job_type(doc: &Html, description: Option<&str>) -> String {
    criteria_employment_type(doc)
        .or_else(|| description.and_then(job_type_from_text))
        .unwrap_or_else(|| s!(NOT_SPECIFIED))
}

fn criteria_employment_type(doc: &Html) -> Option<String> {
    select_all(doc, "li.description__job-criteria-item")
        .into_iter()
        .find_map(|item| {
            let header = select_within(item, "h3.description__job-criteria-subheader")?;
            if !text_of(header).contains("Employment type") {
                return None;
            }
            let value = select_within(item, "span.description__job-criteria-text")?;
            Some(text_of(value)).filter(|t| !t.is_empty())
        })
}

pub fn job_type_from_text(text: &str) -> Option<String> {
    let lc = text.to_lowercase();
    TYPE_KEYWORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| lc.contains(w)))
        .map(|(_, label)| s!(*label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_email_in_document_order() {
        let text = "Questions? hr@acme.io or jobs@acme.io. Never bob@";
        assert_eq!(email(text).as_deref(), Some("hr@acme.io"));
        assert_eq!(email("no address here, just @ signs"), None);
        assert_eq!(email("first.last+cv@mail.example.co.uk!").as_deref(), Some("first.last+cv@mail.example.co.uk"));
    }

    #[test]
    fn deadline_uses_pattern_order_not_position() {
        // "deadline" appears first in the text, but "apply by" is earlier in the list.
        let text = "Deadline: June 30, 2024. Please apply by July 4th, 2024.";
        assert_eq!(deadline(text).as_deref(), Some("July 4th, 2024"));
    }

    #[test]
    fn deadline_variants() {
        assert_eq!(deadline("APPLICATION DEADLINE: March 3rd 2025").as_deref(), Some("March 3rd 2025"));
        assert_eq!(deadline("Applications due   October 1, 2024").as_deref(), Some("October 1, 2024"));
        assert_eq!(deadline("Closing date: soon"), None);
        assert_eq!(deadline(""), None);
    }

    #[test]
    fn contact_requires_capitalized_name() {
        assert_eq!(contact_person("Please contact Jane Smith for details").as_deref(), Some("Jane Smith"));
        assert_eq!(contact_person("Reach out to Mary Ann Lee today").as_deref(), Some("Mary Ann Lee"));
        assert_eq!(contact_person("contact us for more information"), None);
    }

    #[test]
    fn contact_pattern_priority() {
        let text = "Send your resume to John Doe. You may also contact Alice Wong.";
        // "contact" is tried before "send ... resume ... to"
        assert_eq!(contact_person(text).as_deref(), Some("Alice Wong"));
        assert_eq!(contact_person("send a resume and cover letter to Priya Patel").as_deref(), Some("Priya Patel"));
    }

    #[test]
    fn type_keywords_in_order() {
        assert_eq!(job_type_from_text("This is a Full Time contract role").as_deref(), Some("Full-time"));
        assert_eq!(job_type_from_text("part-time, contract possible").as_deref(), Some("Part-time"));
        assert_eq!(job_type_from_text("Summer internship").as_deref(), Some("Co-op/Internship"));
        assert_eq!(job_type_from_text("Remote friendly"), None);
    }

    #[test]
    fn criteria_list_beats_description() {
        let doc = Html::parse_document(r#"
            <ul>
              <li class="description__job-criteria-item">
                <h3 class="description__job-criteria-subheader">Seniority level</h3>
                <span class="description__job-criteria-text">Mid-Senior level</span>
              </li>
              <li class="description__job-criteria-item">
                <h3 class="description__job-criteria-subheader"> Employment type </h3>
                <span class="description__job-criteria-text">
                  Contract
                </span>
              </li>
            </ul>
        "#);
        assert_eq!(job_type(&doc, Some("full-time role")), "Contract");
        let empty = Html::parse_document("<p></p>");
        assert_eq!(job_type(&empty, Some("full-time role")), "Full-time");
        assert_eq!(job_type(&empty, None), NOT_SPECIFIED);
    }
}
