//! Page selection.
//!
//! This module turns user input into ordered groups of zero-based page
//! indices, one group per output document:
//! - Page range expressions (`"1-3, 5-7, 10"`)
//! - Interval splits (every N pages)
//!
//! # Examples
//!
//! ```
//! use pdfsplice::pages::{SelectionPolicy, SplitPlan};
//!
//! let plan = SplitPlan::Intervals { pages_per_file: 4 };
//! let groups = plan.groups(10, SelectionPolicy::Strict).unwrap();
//! assert_eq!(groups.len(), 3);
//! assert_eq!(plan.output_name(1), "split_part_1.pdf");
//! ```

pub mod group;
pub mod range;

pub use group::{PageIndexGroup, interval_groups};
pub use range::{PageRangeExpression, PageRangeSelector, RangeToken, SelectionPolicy};

use crate::error::Result;

/// How a single document is cut into several outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitPlan {
    /// One output per token of a page range expression.
    Ranges(String),
    /// Consecutive chunks of a fixed number of pages.
    Intervals {
        /// Pages in each output (the last one may be shorter).
        pages_per_file: usize,
    },
}

impl SplitPlan {
    /// Resolve the plan against a document with `total_pages` pages.
    ///
    /// # Errors
    ///
    /// Propagates selection errors from [`PageRangeSelector::select`] and
    /// [`interval_groups`].
    pub fn groups(&self, total_pages: usize, policy: SelectionPolicy) -> Result<Vec<PageIndexGroup>> {
        match self {
            Self::Ranges(expression) => PageRangeSelector::new(policy).select(expression, total_pages),
            Self::Intervals { pages_per_file } => interval_groups(total_pages, *pages_per_file),
        }
    }

    /// File name of the `n`-th output (1-based, in emission order).
    pub fn output_name(&self, n: usize) -> String {
        match self {
            Self::Ranges(_) => format!("split_{n}.pdf"),
            Self::Intervals { .. } => format!("split_part_{n}.pdf"),
        }
    }
}
