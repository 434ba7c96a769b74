//! Per-section sync pipeline
//!
//! Wires a section's parser and generator together and injects the
//! rendered block into the target document. Each section is processed
//! independently; an error here never aborts the other sections.

use std::fs;
use std::path::Path;

use crate::config::{SectionConfig, SectionKind, SECTIONS};
use crate::error::{SyncError, SyncResult};
use crate::generate::{
    awards_markdown, education_markdown, experience_markdown, publications_markdown,
};
use crate::inject::{check_markers, inject, MarkerPresence};
use crate::parse::{parse_entries, parse_honors, parse_itemize};

/// Parse a section's LaTeX content and render its Markdown block.
/// Returns the block and the number of records behind it.
pub fn render_section(kind: SectionKind, content: &str) -> (String, usize) {
    match kind {
        SectionKind::Publications => {
            let items = parse_itemize(content);
            (publications_markdown(&items), items.len())
        }
        SectionKind::Education => {
            let entries = parse_entries(content);
            (education_markdown(&entries), entries.len())
        }
        SectionKind::Experience => {
            let entries = parse_entries(content);
            (experience_markdown(&entries), entries.len())
        }
        SectionKind::Awards => {
            let honors = parse_honors(content);
            (awards_markdown(&honors), honors.len())
        }
    }
}

/// Look up a section's configuration.
pub fn section_config(name: &str) -> SyncResult<&'static SectionConfig> {
    SECTIONS
        .get(name)
        .ok_or_else(|| SyncError::unknown_section(name))
}

/// Check whether a section's sentinel markers exist in the target
/// document. Used as a pre-flight so a section with no markers is
/// skipped rather than failed.
pub fn section_markers_present(
    root: &Path,
    name: &str,
    target_file: &Path,
) -> SyncResult<MarkerPresence> {
    let config = section_config(name)?;
    let target_path = root.join(target_file);
    let document = read_text(&target_path)?;
    Ok(check_markers(
        &document,
        config.comment_start,
        config.comment_end,
    ))
}

/// Sync one section: read its LaTeX source, render the Markdown block,
/// and rewrite the region between the section's sentinel markers in the
/// target document. Returns the number of records synced.
pub fn sync_section(root: &Path, name: &str, target_file: &Path) -> SyncResult<usize> {
    let config = section_config(name)?;

    let latex_path = root.join(config.latex_file);
    let content = read_text(&latex_path)?;

    let (block, count) = render_section(config.kind, &content);
    if count == 0 {
        return Err(SyncError::no_records(name));
    }

    let target_path = root.join(target_file);
    let document = read_text(&target_path)?;

    let presence = check_markers(&document, config.comment_start, config.comment_end);
    let updated = inject(&document, config.comment_start, config.comment_end, &block)
        .ok_or_else(|| SyncError::boundary_missing(name, presence.start, presence.end))?;

    fs::write(&target_path, updated)?;
    Ok(count)
}

fn read_text(path: &Path) -> SyncResult<String> {
    fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            SyncError::source_missing(path.display().to_string())
        } else {
            err.into()
        }
    })
}

/// Tally of one sync run over a set of requested sections.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyncSummary {
    pub total: usize,
    pub skipped: usize,
    pub succeeded: usize,
}

impl SyncSummary {
    pub fn attempted(&self) -> usize {
        self.total - self.skipped
    }

    /// True when every attempted section succeeded, or none were
    /// attempted at all.
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.attempted()
    }

    /// Process exit code: 0 on success, 1 when any attempted section
    /// failed.
    pub fn exit_code(&self) -> i32 {
        if self.all_succeeded() {
            0
        } else {
            1
        }
    }
}
