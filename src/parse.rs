//! Section parsers for the four resume markup conventions
//!
//! Three parsers cover the four section pipelines: the `cvitemize2`
//! bulleted list (publications), the five-parameter `\cventry` command
//! (education and work/research experience), and the line-oriented
//! three-parameter `\cvhonor` command (awards).
//!
//! `\cventry` parameters nest braces, so those parsers go through
//! [`crate::scan`]; the itemize and honor conventions are flat and use
//! regex scanning.
//!
//! Known limitation: an item terminator (`\item`, `\vspace`,
//! `\end{cvitemize2}`) appearing inside an item's own math or braces
//! still terminates the item.

use lazy_static::lazy_static;
use regex::Regex;

use crate::scan::scan_parameters;

/// One education / work / research experience entry, the five
/// `\cventry` parameters in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    /// Institution or employer (first `\cventry` parameter)
    pub position: String,
    /// Degree or role title
    pub title: String,
    pub location: String,
    pub date: String,
    /// Free text, may embed a `cvitems` bulleted sub-list
    pub description: String,
}

/// One `\cvhonor` award line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardRecord {
    pub award_type: String,
    pub institution: String,
    pub date: String,
}

lazy_static! {
    static ref ITEM_INTRO: Regex = Regex::new(r"\\item\s+").unwrap();
    static ref ITEM_TERMINATOR: Regex =
        Regex::new(r"\\item|\\vspace|\\end\{cvitemize2\}").unwrap();
    static ref TRAILING_COMMENT: Regex = Regex::new(r"(?m)\s*%.*$").unwrap();
    static ref CVENTRY: Regex = Regex::new(r"\\cventry").unwrap();
}

/// Parse a `cvitemize2` publications section into one text blob per
/// `\item`.
///
/// Each item spans from its introducer to the next `\item`, a `\vspace`
/// directive, or the environment end. Items that are empty after
/// trimming or start with a comment marker are dropped; trailing
/// same-line comments are stripped from the rest.
pub fn parse_itemize(content: &str) -> Vec<String> {
    let mut items = Vec::new();
    for intro in ITEM_INTRO.find_iter(content) {
        let rest = &content[intro.end()..];
        let end = match ITEM_TERMINATOR.find(rest) {
            Some(term) => term.start(),
            // No terminator ahead: the environment never closes, drop it
            None => continue,
        };
        let raw = rest[..end].trim();
        if raw.is_empty() || raw.starts_with('%') {
            continue;
        }
        let cleaned = TRAILING_COMMENT.replace_all(raw, "").into_owned();
        items.push(cleaned);
    }
    items
}

/// Parse every `\cventry` invocation into an [`EntryRecord`].
///
/// Each occurrence must yield exactly five balanced-brace parameters;
/// a short read (missing or unbalanced parameter) discards the whole
/// invocation. Records with both `title` and `description` empty are
/// discarded. Output order matches source order.
pub fn parse_entries(content: &str) -> Vec<EntryRecord> {
    let mut entries = Vec::new();
    for m in CVENTRY.find_iter(content) {
        let params = scan_parameters(content, m.end(), 5);
        if params.len() != 5 {
            continue;
        }
        let entry = EntryRecord {
            position: params[0].trim().to_string(),
            title: params[1].trim().to_string(),
            location: params[2].trim().to_string(),
            date: params[3].trim().to_string(),
            description: params[4].trim().to_string(),
        };
        if entry.title.is_empty() && entry.description.is_empty() {
            continue;
        }
        entries.push(entry);
    }
    entries
}

/// Parse `\cvhonor` award lines into [`AwardRecord`]s.
///
/// A line qualifies only if it starts with `\cvhonor` after trimming;
/// commented-out lines are skipped. A qualifying line must yield three
/// balanced-brace parameters or it is dropped entirely, and records
/// with an empty `award_type` are discarded.
pub fn parse_honors(content: &str) -> Vec<AwardRecord> {
    let mut awards = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if !line.starts_with("\\cvhonor") {
            continue;
        }
        let params = scan_parameters(line, 0, 3);
        if params.len() != 3 {
            continue;
        }
        let award = AwardRecord {
            award_type: params[0].trim().to_string(),
            institution: params[1].trim().to_string(),
            date: params[2].trim().to_string(),
        };
        if award.award_type.is_empty() {
            continue;
        }
        awards.push(award);
    }
    awards
}
