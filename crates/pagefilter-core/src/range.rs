//! Exclusion ranges and the page retention predicate

use crate::error::PageFilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How out-of-bounds or inverted ranges are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Apply the retention predicate as-is; pages outside the document and
    /// inverted ranges simply match nothing.
    #[default]
    Clamp,
    /// Refuse page 0, inverted ranges and ranges past the last page.
    Reject,
}

/// A 1-based inclusive range of pages to drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "String")]
pub struct ExclusionRange {
    pub start: u32,
    pub end: u32,
}

/// Accepted config spellings: `[25, 39]` or `"25-39"`
#[derive(Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Pair(u32, u32),
    Text(String),
}

impl TryFrom<RangeRepr> for ExclusionRange {
    type Error = PageFilterError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        match repr {
            RangeRepr::Pair(start, end) => Ok(Self::new(start, end)),
            RangeRepr::Text(text) => text.parse(),
        }
    }
}

impl ExclusionRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether the page at 0-based `index` survives the filter.
    ///
    /// Computed in signed arithmetic so `start = 0` cannot underflow; it
    /// then behaves like `start = 1`.
    pub fn retains(&self, index: usize) -> bool {
        let i = index as i64;
        i < i64::from(self.start) - 1 || i > i64::from(self.end) - 1
    }

    /// Number of pages of a `page_count`-page document this range drops
    pub fn excluded_count(&self, page_count: usize) -> usize {
        (0..page_count).filter(|&i| !self.retains(i)).count()
    }

    /// Strict validation used by [`RangePolicy::Reject`]
    pub fn validate(&self, page_count: usize) -> Result<(), PageFilterError> {
        if self.start == 0 {
            return Err(PageFilterError::InvalidRange(
                "Page numbers must be >= 1".into(),
            ));
        }
        if self.start > self.end {
            return Err(PageFilterError::InvalidRange(format!(
                "Start {} > end {}",
                self.start, self.end
            )));
        }
        if self.end as usize > page_count {
            return Err(PageFilterError::InvalidRange(format!(
                "Page {} does not exist (document has {} pages)",
                self.end, page_count
            )));
        }
        Ok(())
    }
}

impl From<ExclusionRange> for String {
    fn from(range: ExclusionRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for ExclusionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parse `"S-E"` or a single page `"N"`
impl FromStr for ExclusionRange {
    type Err = PageFilterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PageFilterError::InvalidRange("Empty range".into()));
        }

        if let Some((start, end)) = input.split_once('-') {
            let start: u32 = start
                .trim()
                .parse()
                .map_err(|_| PageFilterError::InvalidRange(format!("Invalid start: {}", start)))?;
            let end: u32 = end
                .trim()
                .parse()
                .map_err(|_| PageFilterError::InvalidRange(format!("Invalid end: {}", end)))?;
            Ok(Self::new(start, end))
        } else {
            let page: u32 = input
                .parse()
                .map_err(|_| PageFilterError::InvalidRange(format!("Invalid page: {}", input)))?;
            Ok(Self::new(page, page))
        }
    }
}

/// 0-based indices of the pages kept, in original order
pub fn retained_indices(
    page_count: usize,
    range: ExclusionRange,
    policy: RangePolicy,
) -> Result<Vec<usize>, PageFilterError> {
    if policy == RangePolicy::Reject {
        range.validate(page_count)?;
    }
    Ok((0..page_count).filter(|&i| range.retains(i)).collect())
}
