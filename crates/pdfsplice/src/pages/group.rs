//! Page index groups and the interval split policy.

use serde::Serialize;

use crate::error::{PdfSpliceError, Result};

/// An ordered run of zero-based page indices that becomes one output document.
///
/// Order is significant and duplicates are allowed: the assembler copies the
/// pages exactly as listed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PageIndexGroup(Vec<usize>);

impl PageIndexGroup {
    /// Create a group from zero-based indices.
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Contiguous group covering `start..=end`.
    pub fn contiguous(start: usize, end: usize) -> Self {
        Self((start..=end).collect())
    }

    /// The zero-based indices, in output order.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of pages in the group.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the group selects no pages.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// 1-based page numbers, for display.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.0.iter().map(|index| index + 1).collect()
    }
}

impl From<Vec<usize>> for PageIndexGroup {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl<'a> IntoIterator for &'a PageIndexGroup {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Split `total_pages` into consecutive chunks of `pages_per_file` pages.
///
/// Produces `ceil(total_pages / pages_per_file)` groups; every page appears in
/// exactly one group and the last group holds the remainder.
///
/// # Errors
///
/// Returns [`PdfSpliceError::InvalidConfig`] if `pages_per_file` is zero.
///
/// # Examples
///
/// ```
/// use pdfsplice::pages::interval_groups;
///
/// let groups = interval_groups(10, 3).unwrap();
/// let sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
/// assert_eq!(sizes, vec![3, 3, 3, 1]);
/// ```
pub fn interval_groups(total_pages: usize, pages_per_file: usize) -> Result<Vec<PageIndexGroup>> {
    if pages_per_file == 0 {
        return Err(PdfSpliceError::invalid_config(
            "Pages per file must be at least 1",
        ));
    }

    let groups = (0..total_pages)
        .step_by(pages_per_file)
        .map(|start| {
            let end = (start + pages_per_file).min(total_pages) - 1;
            PageIndexGroup::contiguous(start, end)
        })
        .collect();

    Ok(groups)
}
