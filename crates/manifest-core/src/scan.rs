//! Directory scanning and manifest rendering

use crate::error::ManifestError;
use std::fs;
use std::path::Path;

const PDF_SUFFIX: &str = ".pdf";

/// Case-insensitive `.pdf` suffix check
pub fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(PDF_SUFFIX)
}

/// List the PDF files directly inside `dir`, sorted ascending.
///
/// Only regular files count (symlinks are followed). Subdirectories are
/// never entered, even when their name ends in `.pdf`.
pub fn scan_directory<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, ManifestError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ManifestError::DirectoryNotFound(dir.to_path_buf()));
    }

    let io_err = |source| ManifestError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!("Skipping non UTF-8 file name {:?}", raw);
                continue;
            }
        };

        if !is_pdf_name(&name) {
            continue;
        }

        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => names.push(name),
            Ok(_) => tracing::debug!("Skipping {}: not a regular file", path.display()),
            Err(e) => tracing::debug!("Skipping {}: {}", path.display(), e),
        }
    }

    names.sort();
    Ok(names)
}

/// Render entries as a pretty JSON array (2-space indent, non-ASCII kept)
pub fn render_manifest(entries: &[String]) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(entries)?)
}
