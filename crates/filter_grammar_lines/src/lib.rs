// crates/filter_grammar_lines/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Marker that flags an embedded grammar documentation line, **without**
/// the separating character that follows it.
pub const GRAMMAR_MARKER: &str = "//>";

/// The form a grammar line normally opens with (marker plus separating
/// space).
pub const GRAMMAR_MARKER_WS: &str = "//> ";

/// Processes file content by outputting only the embedded grammar
/// documentation lines.
///
/// A grammar line is a line that, once trimmed, starts with `//>`. The
/// marker and the single separating character after it are removed, and the
/// remainder is emitted followed by a newline. A remainder whose first
/// character after leading whitespace is `;` terminates a rule, so one extra
/// blank line is emitted after it. All other lines are discarded.
pub fn filter_grammar_lines(content: &str) -> String {
    let mut output = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(after_marker) = trimmed.strip_prefix(GRAMMAR_MARKER) {
            // Drop the separating character, counting in chars rather than
            // bytes: a bare "//>" (or a multi-byte character in the
            // separator position) leaves an empty remainder, never a broken
            // slice. An empty remainder is still a valid grammar line.
            let mut chars = after_marker.chars();
            chars.next();
            let rest = chars.as_str();
            output.push_str(rest);
            output.push('\n');
            if rest.trim_start().starts_with(';') {
                output.push('\n');
            }
        }
    }
    output
}

/// Reads the given source file and returns its embedded grammar
/// documentation as plain text.
///
/// # Arguments
///
/// * `file_path` - Path to the source file to scan.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn extract_grammar_from_file<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path_ref = file_path.as_ref();
    let content = fs::read_to_string(file_path_ref)
        .with_context(|| format!("Error reading file {}", file_path_ref.display()))?;
    Ok(filter_grammar_lines(&content))
}
