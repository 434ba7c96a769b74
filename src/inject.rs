//! Sentinel-delimited section injection
//!
//! Replaces the text between a pair of literal marker strings inside a
//! target document, keeping the markers and everything around them
//! byte-for-byte intact.

/// Which of a section's two sentinel markers are present in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPresence {
    pub start: bool,
    pub end: bool,
}

impl MarkerPresence {
    pub fn both(&self) -> bool {
        self.start && self.end
    }
}

/// Check a document for both sentinel markers (exact literal match).
pub fn check_markers(document: &str, start_marker: &str, end_marker: &str) -> MarkerPresence {
    MarkerPresence {
        start: document.contains(start_marker),
        end: document.contains(end_marker),
    }
}

/// Replace the span between the first occurrence of each marker with
/// `\n<block>\n`, keeping the markers themselves. Returns `None` when
/// either marker is absent; the document is then left untouched.
pub fn inject(
    document: &str,
    start_marker: &str,
    end_marker: &str,
    block: &str,
) -> Option<String> {
    let start = document.find(start_marker)?;
    let end = document.find(end_marker)?;

    let before = &document[..start + start_marker.len()];
    let after = &document[end..];

    let mut result = String::with_capacity(before.len() + block.len() + after.len() + 2);
    result.push_str(before);
    result.push('\n');
    result.push_str(block);
    result.push('\n');
    result.push_str(after);
    Some(result)
}
