//! Integration tests for cvsync full section pipelines

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

use cvsync::{
    inject, latex_to_markdown, next_parameter, parse_entries, render_section, sync_section,
    SectionKind, SyncError,
};

// ============================================================================
// Scanner and converter properties
// ============================================================================

mod scanner {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_braces_round_trip() {
        let input = "{A{B}C} tail";
        let (content, next) = next_parameter(input, 0).unwrap();
        assert_eq!(content, "A{B}C");
        assert_eq!(&input[next..], " tail");
    }

    #[test]
    fn test_unmatched_brace_reports_no_parameter() {
        assert!(next_parameter("{A{B}C", 0).is_none());
    }
}

mod converter {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_idempotent_on_converted_text() {
        let source = "\\textbf{A Study}, \\textit{VLDB}, ``quoted''";
        let once = latex_to_markdown(source);
        let twice = latex_to_markdown(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_math_span_survives_whitespace_collapse() {
        assert_eq!(latex_to_markdown("Result   $x^2$   end"), "Result $x^2$ end");
    }

    #[test]
    fn test_publication_blob() {
        let blob = "\\textbf{Fast Parsing} (\\textit{Best Paper}$^\\text{*}$), \
                    \\href{https://doi.org/x}{\\textcolor{link}{DOI}}";
        assert_eq!(
            latex_to_markdown(blob),
            "**Fast Parsing** (_Best Paper_$^\\text{*}$), [DOI](https://doi.org/x)"
        );
    }
}

// ============================================================================
// End-to-end section rendering
// ============================================================================

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_publications_section() {
        let latex = "\\item First paper \\item Second paper % comment \\end{cvitemize2}";
        let (block, count) = render_section(SectionKind::Publications, latex);
        assert_eq!(count, 2);
        assert_eq!(block, "- First paper\n- Second paper");
    }

    #[test]
    fn test_education_section() {
        let latex = "\\cventry{MIT}{PhD in CS}{Cambridge}{2020}{}";
        let (block, _) = render_section(SectionKind::Education, latex);
        assert_eq!(block, "- 2020, PhD in CS, MIT, Cambridge");
    }

    #[test]
    fn test_experience_section_with_sub_items() {
        let latex = "\\cventry{ACME Corp}{Research Intern}{Berlin}{Summer 2022}{\n\
                     \\begin{cvitems}\n\
                     \\item Built the \\textit{fast} pipeline\n\
                     \\item Shipped it\n\
                     \\end{cvitems}}";
        let (block, _) = render_section(SectionKind::Experience, latex);
        assert_eq!(
            block,
            "- **Research Intern** - Berlin - *(Summer 2022)*\n  \
             - Built the _fast_ pipeline\n  - Shipped it"
        );
    }

    #[test]
    fn test_awards_section() {
        let latex = "\\cvhonor{Best Paper Award}{Great Conference}{\\qquad\\ Jun. 2023}\n\
                     %\\cvhonor{Hidden}{X}{2019}\n";
        let (block, count) = render_section(SectionKind::Awards, latex);
        assert_eq!(count, 1);
        assert_eq!(block, "- *Jun 2023*, Best Paper Award, Great Conference");
    }

    #[test]
    fn test_malformed_entry_contributes_nothing() {
        let latex = "\\cventry{a}{b}{c}\n\\cventry{MIT}{PhD}{Cambridge}{2020}{}";
        let entries = parse_entries(latex);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "PhD");
    }
}

// ============================================================================
// Injection
// ============================================================================

mod injection {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replaces_only_the_delimited_span() {
        let doc = "A\n<!--S-->\nold\n<!--E-->\nB";
        let result = inject(doc, "<!--S-->", "<!--E-->", "new").unwrap();
        assert_eq!(result, "A\n<!--S-->\nnew\n<!--E-->\nB");
    }

    #[test]
    fn test_missing_end_marker_is_reported() {
        let doc = "A\n<!--S-->\nold\nB";
        assert!(inject(doc, "<!--S-->", "<!--E-->", "new").is_none());
    }
}

// ============================================================================
// Full sync against a fixture tree
// ============================================================================

mod full_sync {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    const ABOUT: &str = "---\ntitle: About\n---\n\n\
        ## Publications\n\
        <!-- AUTO_PUBLICATIONS_START -->\nstale\n<!-- AUTO_PUBLICATIONS_END -->\n\n\
        ## Education\n\
        <!-- AUTO_EDUCATION_START -->\nstale\n<!-- AUTO_EDUCATION_END -->\n";

    #[test]
    fn test_two_sections_synced_independently() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "resume/resume/Publications.tex",
            "\\begin{cvitemize2}\n\
             \\item \\textbf{Paper One}, \\textit{ICML}, 2023\n\
             \\item Paper Two % draft\n\
             \\end{cvitemize2}\n",
        );
        write(
            root,
            "resume/resume/Education.tex",
            "\\cventry{MIT}{PhD in CS}{Cambridge}{2020}{}\n\
             \\cventry{Caltech}{BSc in Math}{Pasadena}{2015}{}\n",
        );
        write(root, "_pages/about.md", ABOUT);

        let target = Path::new("_pages/about.md");
        assert_eq!(sync_section(root, "publications", target).unwrap(), 2);
        assert_eq!(sync_section(root, "education", target).unwrap(), 2);

        let updated = fs::read_to_string(root.join("_pages/about.md")).unwrap();
        assert!(updated.starts_with("---\ntitle: About\n---\n"));
        assert!(updated.contains(
            "<!-- AUTO_PUBLICATIONS_START -->\n\
             - **Paper One**, _ICML_, 2023\n- Paper Two\n\
             <!-- AUTO_PUBLICATIONS_END -->"
        ));
        assert!(updated.contains(
            "<!-- AUTO_EDUCATION_START -->\n\
             - 2020, PhD in CS, MIT, Cambridge\n- 2015, BSc in Math, Caltech, Pasadena\n\
             <!-- AUTO_EDUCATION_END -->"
        ));
        assert!(!updated.contains("stale"));
    }

    #[test]
    fn test_rerun_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "resume/resume/Education.tex",
            "\\cventry{MIT}{PhD in CS}{Cambridge}{2020}{}\n",
        );
        write(root, "_pages/about.md", ABOUT);

        let target = Path::new("_pages/about.md");
        sync_section(root, "education", target).unwrap();
        let first = fs::read_to_string(root.join("_pages/about.md")).unwrap();
        sync_section(root, "education", target).unwrap();
        let second = fs::read_to_string(root.join("_pages/about.md")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failure_in_one_section_leaves_others_syncable() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        // No publications source on disk, education present
        write(
            root,
            "resume/resume/Education.tex",
            "\\cventry{MIT}{PhD in CS}{Cambridge}{2020}{}\n",
        );
        write(root, "_pages/about.md", ABOUT);

        let target = Path::new("_pages/about.md");
        let err = sync_section(root, "publications", target).unwrap_err();
        assert!(matches!(err, SyncError::SourceMissing { .. }));

        assert_eq!(sync_section(root, "education", target).unwrap(), 1);
    }
}
