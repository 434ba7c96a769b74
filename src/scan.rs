//! Balanced-brace parameter scanning
//!
//! LaTeX command parameters nest braces arbitrarily (`{a \textbf{b} c}`),
//! so a regular expression cannot reliably delimit them. This module
//! implements the counter-based scanner used by the `\cventry` and
//! `\cvhonor` parsers: a single depth counter is enough because `{`/`}`
//! is the only bracket pair that ever nests.

/// Extract the next `{...}` parameter starting at byte offset `start`.
///
/// Skips whitespace, `%` line comments, and any other stray characters
/// (e.g. an optional `[...]` argument) until an opening brace is found,
/// then scans forward with a nesting counter. Returns the content
/// strictly between the outermost matching pair plus the offset just
/// past the closing brace.
///
/// Returns `None` when no opening brace remains or the braces never
/// balance; callers treat that as "no parameter" and stop consuming
/// further parameters for the invocation.
pub fn next_parameter(text: &str, start: usize) -> Option<(String, usize)> {
    let rest = text.get(start..)?;
    let mut open = None;
    let mut in_comment = false;
    for (idx, ch) in rest.char_indices() {
        if in_comment {
            if ch == '\n' {
                in_comment = false;
            }
            continue;
        }
        match ch {
            '{' => {
                open = Some(start + idx);
                break;
            }
            '%' => in_comment = true,
            _ => {}
        }
    }

    let open = open?;
    let mut depth = 0usize;
    for (idx, ch) in text[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let inner = &text[open + 1..open + idx];
                    return Some((inner.to_string(), open + idx + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract up to `max` consecutive `{...}` parameters starting at `start`.
///
/// Stops at the first position where [`next_parameter`] reports no
/// parameter; the caller decides whether a short read invalidates the
/// whole invocation.
pub fn scan_parameters(text: &str, start: usize, max: usize) -> Vec<String> {
    let mut params = Vec::with_capacity(max);
    let mut pos = start;
    while params.len() < max {
        match next_parameter(text, pos) {
            Some((content, next)) => {
                params.push(content);
                pos = next;
            }
            None => break,
        }
    }
    params
}
