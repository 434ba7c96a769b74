//! Inline LaTeX to Markdown conversion
//!
//! A pure text rewriter applied to one extracted field or item blob at
//! a time. Math spans (`$...$`) are carried through verbatim: the input
//! is segmented on them first and every rewrite except the recognized
//! superscript normalization operates only on the text between spans.
//! The final whitespace collapse applies to the whole result.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MATH_SPAN: Regex = Regex::new(r"\$[^$]*\$").unwrap();
    static ref BOLD: Regex = Regex::new(r"\\textbf\{([^}]+)\}").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\\textit\{([^}]+)\}").unwrap();
    static ref HREF_COLORED: Regex =
        Regex::new(r"\\href\{([^}]+)\}\{\\textcolor\{link\}\{([^}]+)\}\}").unwrap();
    static ref TEXTCOLOR: Regex = Regex::new(r"\\textcolor\{[^}]+\}\{([^}]+)\}").unwrap();
    static ref TEX_QUOTES: Regex = Regex::new(r"``(.*?)''").unwrap();
    static ref TEXT_SUPERSCRIPT: Regex = Regex::new(r"^\$\^\\text\{([^}]+)\}\$$").unwrap();
    static ref VSPACE: Regex = Regex::new(r"\\vspace\{[^}]+\}").unwrap();
    static ref QQUAD: Regex = Regex::new(r"\\qquad\\?").unwrap();
    static ref COMMAND_WITH_ARG: Regex = Regex::new(r"\\[a-zA-Z]+\{([^}]*)\}").unwrap();
    static ref BARE_COMMAND: Regex = Regex::new(r"\\[a-zA-Z]+\s*").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Convert inline LaTeX formatting in `input` to Markdown.
///
/// Bold, italic, colored hyperlinks, and TeX quotes become their
/// Markdown equivalents; color wrappers and spacing commands are
/// dropped; any other command is stripped down to its argument (or
/// removed when it has none); stray braces are removed; whitespace runs
/// collapse to single spaces. Idempotent on plain text.
pub fn latex_to_markdown(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for span in MATH_SPAN.find_iter(input) {
        out.push_str(&convert_text_segment(&input[last..span.start()]));
        out.push_str(&convert_math_span(span.as_str()));
        last = span.end();
    }
    out.push_str(&convert_text_segment(&input[last..]));

    let collapsed = WHITESPACE_RUN.replace_all(&out, " ");
    collapsed.trim().to_string()
}

/// Rewrite one non-math segment.
fn convert_text_segment(segment: &str) -> String {
    let text = BOLD.replace_all(segment, "**$1**");
    let text = ITALIC.replace_all(&text, "_${1}_");
    let text = HREF_COLORED.replace_all(&text, "[$2]($1)");
    let text = TEXTCOLOR.replace_all(&text, "$1");
    let text = TEX_QUOTES.replace_all(&text, "\"$1\"");
    let text = VSPACE.replace_all(&text, "");
    let text = QQUAD.replace_all(&text, "");
    // Remaining commands: keep the argument, drop the command
    let text = COMMAND_WITH_ARG.replace_all(&text, "$1");
    let text = BARE_COMMAND.replace_all(&text, "");
    text.replace(['{', '}'], "")
}

/// Carry a `$...$` span through, normalizing the one recognized
/// superscript-of-text construct (`$^\text{...}$`).
fn convert_math_span(span: &str) -> String {
    if let Some(caps) = TEXT_SUPERSCRIPT.captures(span) {
        return format!("$^\\text{{{}}}$", &caps[1]);
    }
    span.to_string()
}
