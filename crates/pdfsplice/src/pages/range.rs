//! Page range expressions.
//!
//! An expression is a comma-separated list of tokens, each either a single
//! 1-based page number (`"10"`) or an inclusive range (`"1-3"`). Whitespace
//! around tokens and around the numbers of a range is ignored.
//!
//! Resolving an expression against a page count yields one
//! [`PageIndexGroup`] per token, in token order, with zero-based indices.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{PdfSpliceError, Result};
use crate::pages::PageIndexGroup;

/// How tokens that cannot be used are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Fail on the first malformed or out-of-range token.
    #[default]
    Strict,
    /// Skip unusable tokens and keep going.
    Lenient,
}

impl FromStr for SelectionPolicy {
    type Err = PdfSpliceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(PdfSpliceError::invalid_config(format!(
                "Invalid selection policy: {s}. Must be one of: strict, lenient"
            ))),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Lenient => f.write_str("lenient"),
        }
    }
}

/// One parsed token of a page range expression, in 1-based page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    /// A single page, e.g. `10`.
    Single(u32),
    /// An inclusive range, e.g. `1-3`.
    Span {
        /// First page.
        start: u32,
        /// Last page.
        end: u32,
    },
}

impl RangeToken {
    /// Parse a single (already trimmed) token.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::MalformedRange`] if the token is empty, is not
    /// made of digits, has more than one hyphen, or is a range whose start is
    /// after its end.
    pub fn parse(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(PdfSpliceError::malformed_range(token, "empty token"));
        }

        match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_page_number(token, start.trim())?;
                let end = parse_page_number(token, end.trim())?;

                if start > end {
                    return Err(PdfSpliceError::malformed_range(
                        token,
                        format!("start page {start} is after end page {end}"),
                    ));
                }

                Ok(Self::Span { start, end })
            }
            None => Ok(Self::Single(parse_page_number(token, token)?)),
        }
    }

    /// Resolve against a page count, or `None` if any page is outside
    /// `1..=total_pages`.
    pub fn resolve(&self, total_pages: usize) -> Option<PageIndexGroup> {
        let in_bounds = |page: u32| page >= 1 && (page as usize) <= total_pages;

        match *self {
            Self::Single(page) if in_bounds(page) => {
                Some(PageIndexGroup::new(vec![page as usize - 1]))
            }
            Self::Span { start, end } if in_bounds(start) && in_bounds(end) => Some(
                PageIndexGroup::contiguous(start as usize - 1, end as usize - 1),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(page) => write!(f, "{page}"),
            Self::Span { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

fn parse_page_number(token: &str, digits: &str) -> Result<u32> {
    // `u32::from_str` accepts a leading '+', which is not a page number.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PdfSpliceError::malformed_range(
            token,
            format!("'{digits}' is not a page number"),
        ));
    }

    digits
        .parse()
        .map_err(|_| PdfSpliceError::malformed_range(token, format!("'{digits}' is too large")))
}

fn tokens(expression: &str) -> impl Iterator<Item = &str> {
    expression.split(',').map(str::trim)
}

/// A syntactically valid page range expression.
///
/// Parsing checks syntax only; page bounds are checked when the expression
/// is resolved against a document.
///
/// # Examples
///
/// ```
/// use pdfsplice::pages::PageRangeExpression;
///
/// let expr: PageRangeExpression = "1-3, 5-7, 10".parse().unwrap();
/// assert_eq!(expr.len(), 3);
/// assert_eq!(expr.to_string(), "1-3,5-7,10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRangeExpression {
    tokens: Vec<RangeToken>,
}

impl PageRangeExpression {
    /// Parse an expression, rejecting any malformed token.
    pub fn parse(expression: &str) -> Result<Self> {
        let tokens = tokens(expression)
            .map(RangeToken::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tokens })
    }

    /// The parsed tokens, in order.
    pub fn tokens(&self) -> &[RangeToken] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the expression has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromStr for PageRangeExpression {
    type Err = PdfSpliceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PageRangeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Resolves page range expressions into page index groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRangeSelector {
    policy: SelectionPolicy,
}

impl PageRangeSelector {
    /// Create a selector with the given policy.
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    /// Create a selector that skips unusable tokens.
    pub fn lenient() -> Self {
        Self::new(SelectionPolicy::Lenient)
    }

    /// The policy in effect.
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Resolve `expression` against a document of `total_pages` pages.
    ///
    /// Returns one group per usable token, in token order. Groups are neither
    /// sorted nor deduplicated.
    ///
    /// # Errors
    ///
    /// Under [`SelectionPolicy::Strict`], returns
    /// [`PdfSpliceError::MalformedRange`] for a token that does not parse and
    /// [`PdfSpliceError::OutOfRange`] for one that references a page outside
    /// `1..=total_pages`. Under [`SelectionPolicy::Lenient`] such tokens are
    /// skipped and this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfsplice::pages::{PageRangeSelector, SelectionPolicy};
    ///
    /// let selector = PageRangeSelector::new(SelectionPolicy::Strict);
    /// let groups = selector.select("1-3, 5-7", 10).unwrap();
    /// assert_eq!(groups[0].indices(), &[0, 1, 2]);
    /// assert_eq!(groups[1].indices(), &[4, 5, 6]);
    ///
    /// assert!(selector.select("1-3, 5-7", 4).is_err());
    /// assert_eq!(PageRangeSelector::lenient().select("1-3, 5-7", 4).unwrap().len(), 1);
    /// ```
    pub fn select(&self, expression: &str, total_pages: usize) -> Result<Vec<PageIndexGroup>> {
        let mut groups = Vec::new();

        for token in tokens(expression) {
            let resolved = RangeToken::parse(token).and_then(|parsed| {
                parsed
                    .resolve(total_pages)
                    .ok_or_else(|| PdfSpliceError::out_of_range(token, total_pages))
            });

            match resolved {
                Ok(group) => groups.push(group),
                Err(err) if self.policy == SelectionPolicy::Lenient => {
                    log::warn!("Skipping page range token: {err}");
                }
                Err(err) => return Err(err),
            }
        }

        log::debug!(
            "Resolved '{}' against {} page(s) into {} group(s)",
            expression,
            total_pages,
            groups.len()
        );

        Ok(groups)
    }
}
