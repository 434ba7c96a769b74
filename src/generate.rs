//! Markdown generation for parsed resume sections
//!
//! One generator per section pipeline. Each maps structured records to
//! Markdown list lines, running extracted fields through the inline
//! converter. Dates are emitted raw except for the award-specific
//! normalization.

use lazy_static::lazy_static;
use regex::Regex;

use crate::markup::latex_to_markdown;
use crate::parse::{AwardRecord, EntryRecord};

lazy_static! {
    static ref SUB_ITEM_INTRO: Regex = Regex::new(r"\\item\s+").unwrap();
    static ref SUB_ITEM_TERMINATOR: Regex = Regex::new(r"\\item|\\end").unwrap();
    static ref MONTH_YEAR: Regex = Regex::new(r"[A-Z][a-z]{2}\.\s*\d{4}").unwrap();
}

/// One `- item` line per publication blob.
pub fn publications_markdown(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", latex_to_markdown(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `- date, title, institution[, location]` line per education
/// entry. The location is dropped when it repeats the institution, and
/// the description is never shown.
pub fn education_markdown(entries: &[EntryRecord]) -> String {
    let mut lines = Vec::new();
    for entry in entries {
        let title = latex_to_markdown(&entry.title);
        let institution = latex_to_markdown(&entry.position);
        let location = latex_to_markdown(&entry.location);

        let mut parts = Vec::new();
        if !entry.date.is_empty() {
            parts.push(entry.date.clone());
        }
        if !title.is_empty() {
            parts.push(title);
        }
        if !institution.is_empty() {
            parts.push(institution.clone());
        }
        if !location.is_empty() && location != institution {
            parts.push(location);
        }
        lines.push(format!("- {}", parts.join(", ")));
    }
    lines.join("\n")
}

/// Experience entries: a header line per record (bold title, location,
/// parenthesized italic date, joined by ` - `), with any `\item`
/// bullets in the description emitted as an indented sub-list. Records
/// are separated by a blank line, trimmed from the very end.
pub fn experience_markdown(entries: &[EntryRecord]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for entry in entries {
        let title = latex_to_markdown(&entry.title);
        let location = latex_to_markdown(&entry.location);

        let mut header = Vec::new();
        if !title.is_empty() {
            header.push(format!("**{}**", title));
        }
        if !location.is_empty() {
            header.push(location);
        }
        if !entry.date.is_empty() {
            header.push(format!("*({})*", entry.date));
        }
        if header.is_empty() {
            continue;
        }
        lines.push(format!("- {}", header.join(" - ")));

        for sub_item in description_items(&entry.description) {
            let converted = latex_to_markdown(&sub_item);
            if !converted.is_empty() {
                lines.push(format!("  - {}", converted));
            }
        }
        lines.push(String::new());
    }
    lines.join("\n").trim_end().to_string()
}

/// One `- *date*, award_type, institution` line per award. The date is
/// stripped of the `\qquad\` spacing artifact and reduced to a bare
/// `Mon YYYY` form when it matches the abbreviated-month pattern.
pub fn awards_markdown(entries: &[AwardRecord]) -> String {
    let mut lines = Vec::new();
    for entry in entries {
        let award_type = latex_to_markdown(&entry.award_type);
        let institution = latex_to_markdown(&entry.institution);
        let date = format_award_date(&entry.date);

        let mut parts = Vec::new();
        if !date.is_empty() {
            parts.push(format!("*{}*", date));
        }
        parts.push(award_type);
        if !institution.is_empty() {
            parts.push(institution);
        }
        lines.push(format!("- {}", parts.join(", ")));
    }
    lines.join("\n")
}

/// Extract `\item` bullets embedded in a `cvitems` description block.
fn description_items(description: &str) -> Vec<String> {
    let mut items = Vec::new();
    for intro in SUB_ITEM_INTRO.find_iter(description) {
        let rest = &description[intro.end()..];
        let end = SUB_ITEM_TERMINATOR
            .find(rest)
            .map(|m| m.start())
            .unwrap_or(rest.len());
        let item = rest[..end].trim();
        if !item.is_empty() {
            items.push(item.to_string());
        }
    }
    items
}

fn format_award_date(raw: &str) -> String {
    let cleaned = raw.replace("\\qquad\\", "");
    let cleaned = cleaned.trim();
    match MONTH_YEAR.find(cleaned) {
        Some(m) => m.as_str().replace('.', ""),
        None => cleaned.to_string(),
    }
}
