// src/core/html.rs
// Thin helpers over `scraper` for "first element matching a selector" lookups.
// A selector that fails to parse behaves like a selector that matches nothing.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

pub fn select_first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(css).ok()?;
    doc.select(&sel).next()
}

pub fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(sel) => doc.select(&sel).collect(),
        Err(_) => Vec::new(),
    }
}

/// First descendant of `el` matching `css`.
pub fn select_within<'a>(el: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(css).ok()?;
    el.select(&sel).next()
}

/// Raw concatenated text of an element, trimmed at both ends.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Element text with whitespace runs collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Collapsed text of the first match; empty text counts as missing.
pub fn first_text(doc: &Html, css: &str) -> Option<String> {
    select_first(doc, css)
        .map(text_of)
        .filter(|t| !t.is_empty())
}

/// Try each selector in order; first one yielding text wins.
pub fn first_text_any(doc: &Html, css_list: &[&str]) -> Option<String> {
    css_list.iter().find_map(|css| first_text(doc, css))
}
