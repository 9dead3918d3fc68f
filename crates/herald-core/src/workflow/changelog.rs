//! Changelog document assembly

use tracing::debug;

use crate::config::DEFAULT_HEADER;

/// Assemble the full changelog document.
///
/// The header (custom, or the default title) appears exactly once, followed
/// by the new release fragment. When the previous document text is supplied
/// its own header is removed and its remaining body follows the fragment.
pub fn compose_document(header: Option<&str>, fragment: &str, existing: Option<&str>) -> String {
    let header = header.unwrap_or(DEFAULT_HEADER).trim_end();

    let mut output = String::new();
    output.push_str(header);
    output.push_str("\n\n");
    output.push_str(fragment.trim_end());
    output.push('\n');

    if let Some(existing) = existing {
        let body = strip_header(existing, header);
        if !body.is_empty() {
            output.push('\n');
            output.push_str(body);
            output.push('\n');
        }
    }

    debug!(document_len = output.len(), "changelog document composed");
    output
}

/// Remove a leading header from a previously rendered document.
///
/// When the current header does not open the document, everything above the
/// first release heading (`## `) is taken to be an older header.
fn strip_header<'a>(existing: &'a str, header: &str) -> &'a str {
    let trimmed = existing.trim_start();

    if let Some(rest) = trimmed.strip_prefix(header) {
        if rest.is_empty() || rest.starts_with('\n') {
            return rest.trim();
        }
    }

    if let Some(start) = first_release_heading(trimmed) {
        return trimmed[start..].trim_end();
    }

    // No release yet: drop a lone top-level title
    match trimmed.split_once('\n') {
        Some((first, rest)) if first.starts_with("# ") => rest.trim(),
        None if trimmed.starts_with("# ") => "",
        _ => trimmed.trim_end(),
    }
}

/// Byte offset of the first line starting with `## `
fn first_release_heading(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.starts_with("## ") {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}
