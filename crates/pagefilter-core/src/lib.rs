//! PDF page-range removal
//!
//! Reads a PDF, drops a contiguous 1-based inclusive page range and writes
//! the remaining pages, in their original order, to a new file using lopdf.
//!
//! - [`remove_pages`]: path to path, tolerant of out-of-bounds ranges
//! - [`remove_pages_with`]: same, with an explicit [`RangePolicy`]
//! - [`remove_pages_from_bytes`]: in memory

pub mod error;
pub mod range;
pub mod remove;

pub use error::PageFilterError;
pub use range::{retained_indices, ExclusionRange, RangePolicy};
pub use remove::{remove_pages_from_bytes, remove_pages_with, FilterReport};

use std::path::Path;

/// Drop pages `start_page..=end_page` (1-based) from `input` into `output`.
///
/// Uses [`RangePolicy::Clamp`]: pages outside the document and inverted
/// ranges are ignored rather than rejected.
pub fn remove_pages<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    start_page: u32,
    end_page: u32,
) -> Result<FilterReport, PageFilterError> {
    remove_pages_with(
        input,
        output,
        ExclusionRange::new(start_page, end_page),
        RangePolicy::Clamp,
    )
}

/// Parse PDF bytes and return page count
pub fn page_count(bytes: &[u8]) -> Result<u32, PageFilterError> {
    let doc =
        lopdf::Document::load_mem(bytes).map_err(|e| PageFilterError::ParseError(e.to_string()))?;
    Ok(doc.get_pages().len() as u32)
}
