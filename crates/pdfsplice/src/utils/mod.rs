//! Utilities for input path collection, output naming and display.

use crate::error::{PdfSpliceError, Result};
use std::path::PathBuf;

/// Expand multiple glob patterns into filesystem paths.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.:
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`.
///
/// Matches of one pattern are sorted; patterns keep the order they were given
/// in. A pattern that matches nothing is kept as a literal path, so a missing
/// file is reported by the reader rather than silently dropped.
///
/// # Errors
///
/// Returns [`PdfSpliceError::InvalidConfig`] for a malformed pattern or an
/// unreadable match.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns {
        resolved_paths.extend(collect_paths_for_pattern(pattern.as_ref())?);
    }

    Ok(resolved_paths)
}

/// Expand a single glob pattern into filesystem paths.
///
/// Pattern examples:
/// - `"scans/*.pdf"`
/// - `"./docs/**/*.pdf"`
fn collect_paths_for_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|err| {
        PdfSpliceError::invalid_config(format!("Invalid input pattern '{pattern}': {err}"))
    })?;

    let mut resolved_paths = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| PdfSpliceError::invalid_config(err.to_string()))?;
        resolved_paths.push(path);
    }

    if resolved_paths.is_empty() {
        resolved_paths.push(PathBuf::from(pattern));
    } else {
        resolved_paths.sort();
    }

    Ok(resolved_paths)
}

/// `name` without a trailing `.pdf` (any case).
pub fn pdf_stem(name: &str) -> &str {
    let split = name.len().saturating_sub(4);
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case(".pdf") => stem,
        _ => name,
    }
}

/// Output name for a compressed copy of `name`: `report.pdf` -> `report_compressed.pdf`.
pub fn compressed_name(name: &str) -> String {
    format!("{}_compressed.pdf", pdf_stem(name))
}

/// Output name for a reordered copy of `name`: `report.pdf` -> `report_reordered.pdf`.
pub fn reordered_name(name: &str) -> String {
    format!("{}_reordered.pdf", pdf_stem(name))
}

/// Format a byte count as a human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
