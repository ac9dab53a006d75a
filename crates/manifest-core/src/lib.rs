//! PDF manifest generation
//!
//! Scans a directory for PDF files and writes their sorted names to a JSON
//! array, e.g. `["A.PDF", "b.pdf"]`.

pub mod error;
pub mod scan;

pub use error::ManifestError;
pub use scan::{is_pdf_name, render_manifest, scan_directory};

use std::path::{Path, PathBuf};

/// Summary of one manifest run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestReport {
    pub output: PathBuf,
    pub count: usize,
}

/// Write the manifest of `directory` to `output_file`.
///
/// A missing directory yields [`ManifestError::DirectoryNotFound`] before
/// anything is written, so an existing `output_file` keeps its content.
pub fn generate_manifest<P: AsRef<Path>, Q: AsRef<Path>>(
    directory: P,
    output_file: Q,
) -> Result<ManifestReport, ManifestError> {
    let output = output_file.as_ref();

    let entries = scan_directory(directory.as_ref())?;
    let json = render_manifest(&entries)?;
    shared_output::write_atomic(output, json.as_bytes())?;

    tracing::debug!(
        "Manifest generated with {} files at {}",
        entries.len(),
        output.display()
    );

    Ok(ManifestReport {
        output: output.to_path_buf(),
        count: entries.len(),
    })
}
