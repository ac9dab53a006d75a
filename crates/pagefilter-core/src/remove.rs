//! PDF page removal
//!
//! Drops an exclusion range from a document and keeps every other page in
//! its original order.

use crate::error::PageFilterError;
use crate::range::{retained_indices, ExclusionRange, RangePolicy};
use lopdf::Document;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Summary of one page removal run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub range: ExclusionRange,
    pub input_pages: u32,
    pub output_pages: u32,
    pub removed_pages: u32,
}

/// Page counts before and after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageCounts {
    before: u32,
    after: u32,
}

/// Delete the excluded pages from `doc` in place
fn filter_document(
    doc: &mut Document,
    range: ExclusionRange,
    policy: RangePolicy,
) -> Result<PageCounts, PageFilterError> {
    let page_count = doc.get_pages().len();
    let keep: HashSet<usize> = retained_indices(page_count, range, policy)?
        .into_iter()
        .collect();

    // lopdf numbers pages from 1
    let mut pages_to_delete: Vec<u32> = (0..page_count)
        .filter(|i| !keep.contains(i))
        .map(|i| i as u32 + 1)
        .collect();

    tracing::debug!(
        "Excluding {} of {} pages ({})",
        pages_to_delete.len(),
        page_count,
        range
    );

    // Highest page first so the remaining numbers stay valid
    pages_to_delete.reverse();
    for page_num in pages_to_delete {
        doc.delete_pages(&[page_num]);
    }

    doc.prune_objects();
    doc.compress();

    Ok(PageCounts {
        before: page_count as u32,
        after: doc.get_pages().len() as u32,
    })
}

fn save_document(doc: &mut Document) -> Result<Vec<u8>, PageFilterError> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| PageFilterError::OperationError(format!("Save failed: {}", e)))?;
    Ok(buffer)
}

fn load_document(bytes: &[u8]) -> Result<Document, PageFilterError> {
    Document::load_mem(bytes).map_err(|e| PageFilterError::ParseError(e.to_string()))
}

/// Remove `range` from an in-memory PDF and return the new PDF bytes
pub fn remove_pages_from_bytes(
    bytes: &[u8],
    range: ExclusionRange,
    policy: RangePolicy,
) -> Result<Vec<u8>, PageFilterError> {
    let mut doc = load_document(bytes)?;
    filter_document(&mut doc, range, policy)?;
    save_document(&mut doc)
}

/// Read `input`, drop `range` and write the result to `output`.
///
/// The source file is never modified. `output` is created or overwritten
/// only after the new document has been fully serialized.
pub fn remove_pages_with<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    range: ExclusionRange,
    policy: RangePolicy,
) -> Result<FilterReport, PageFilterError> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.is_file() {
        return Err(PageFilterError::NotFound(input.to_path_buf()));
    }
    let bytes = std::fs::read(input).map_err(|e| {
        tracing::debug!("Reading {} failed: {}", input.display(), e);
        PageFilterError::NotFound(input.to_path_buf())
    })?;

    let mut doc = load_document(&bytes)?;
    let counts = filter_document(&mut doc, range, policy)?;
    if counts.after == 0 {
        tracing::warn!(
            "Range {} removes every page of {}; writing an empty document",
            range,
            input.display()
        );
    }

    let buffer = save_document(&mut doc)?;
    shared_output::write_atomic(output, &buffer)?;

    tracing::debug!(
        "Wrote {} ({} of {} pages kept)",
        output.display(),
        counts.after,
        counts.before
    );

    Ok(FilterReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        range,
        input_pages: counts.before,
        output_pages: counts.after,
        removed_pages: counts.before - counts.after,
    })
}
