//! cvsync - Sync LaTeX resume sections into a Jekyll markdown page
//!
//! Parses moderncv-style resume sources (`\cventry`, `\cvhonor`,
//! `cvitemize2` item lists), converts the extracted fields to Markdown,
//! and rewrites the matching sentinel-delimited region of a target
//! page without disturbing anything around it.
//!
//! # Example
//!
//! ```
//! use cvsync::{render_section, SectionKind};
//!
//! let latex = r"\cventry{MIT}{PhD in CS}{Cambridge}{2020}{}";
//! let (block, count) = render_section(SectionKind::Education, latex);
//! assert_eq!(count, 1);
//! assert_eq!(block, "- 2020, PhD in CS, MIT, Cambridge");
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod inject;
pub mod markup;
pub mod parse;
pub mod scan;
pub mod sync;

pub use config::{SectionConfig, SectionKind, SECTIONS, TARGET_FILE};
pub use error::{SyncError, SyncResult};
pub use generate::{
    awards_markdown, education_markdown, experience_markdown, publications_markdown,
};
pub use inject::{check_markers, inject, MarkerPresence};
pub use markup::latex_to_markdown;
pub use parse::{parse_entries, parse_honors, parse_itemize, AwardRecord, EntryRecord};
pub use scan::{next_parameter, scan_parameters};
pub use sync::{render_section, section_markers_present, sync_section, SyncSummary};
