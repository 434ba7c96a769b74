//! Section configuration table
//!
//! Maps each section name to its LaTeX source file, sentinel marker
//! pair, and pipeline kind. Built once at startup and never mutated;
//! iteration order is the default sync order.

use indexmap::IndexMap;
use lazy_static::lazy_static;

/// Target markdown file, relative to the repository root.
pub const TARGET_FILE: &str = "_pages/about.md";

/// Which parse + generate pipeline a section runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// `cvitemize2` bulleted list
    Publications,
    /// `\cventry` records, compact one-line rendering
    Education,
    /// `\cventry` records, header + sub-list rendering
    Experience,
    /// `\cvhonor` lines
    Awards,
}

/// Per-section configuration, process-lifetime constant.
#[derive(Debug, Clone)]
pub struct SectionConfig {
    pub latex_file: &'static str,
    pub comment_start: &'static str,
    pub comment_end: &'static str,
    pub kind: SectionKind,
}

lazy_static! {
    /// All configured sections, in default sync order.
    pub static ref SECTIONS: IndexMap<&'static str, SectionConfig> = {
        let mut sections = IndexMap::new();
        sections.insert(
            "publications",
            SectionConfig {
                latex_file: "resume/resume/Publications.tex",
                comment_start: "<!-- AUTO_PUBLICATIONS_START -->",
                comment_end: "<!-- AUTO_PUBLICATIONS_END -->",
                kind: SectionKind::Publications,
            },
        );
        sections.insert(
            "education",
            SectionConfig {
                latex_file: "resume/resume/Education.tex",
                comment_start: "<!-- AUTO_EDUCATION_START -->",
                comment_end: "<!-- AUTO_EDUCATION_END -->",
                kind: SectionKind::Education,
            },
        );
        sections.insert(
            "work_experience",
            SectionConfig {
                latex_file: "resume/resume/Work Experience.tex",
                comment_start: "<!-- AUTO_WORK_EXPERIENCE_START -->",
                comment_end: "<!-- AUTO_WORK_EXPERIENCE_END -->",
                kind: SectionKind::Experience,
            },
        );
        sections.insert(
            "research_experience",
            SectionConfig {
                latex_file: "resume/resume/Research Experience.tex",
                comment_start: "<!-- AUTO_RESEARCH_EXPERIENCE_START -->",
                comment_end: "<!-- AUTO_RESEARCH_EXPERIENCE_END -->",
                kind: SectionKind::Experience,
            },
        );
        sections.insert(
            "awards",
            SectionConfig {
                latex_file: "resume/resume/Awards and Honors.tex",
                comment_start: "<!-- AUTO_AWARDS_START -->",
                comment_end: "<!-- AUTO_AWARDS_END -->",
                kind: SectionKind::Awards,
            },
        );
        sections
    };
}
