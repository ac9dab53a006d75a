//! Output file handling shared by the exercise tools
//!
//! Both the page filter and the manifest builder create or overwrite a
//! single output file per run. Writes go through a temporary file in the
//! destination directory which is flushed, synced and then renamed over the
//! destination, so a failed write never leaves a half-written file behind.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create temporary file in {}: {source}", .dir.display())]
    Create {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Directory the temporary file must live in so the final rename stays on
/// one filesystem.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write `bytes` to `path`, creating or overwriting it.
///
/// The temporary handle is flushed and synced before the rename and is
/// closed on every exit path. On error the destination keeps whatever
/// content it had before the call.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), OutputError> {
    let path = path.as_ref();
    let dir = parent_dir(path);

    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| OutputError::Create {
        dir: dir.to_path_buf(),
        source,
    })?;

    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    {
        let mut writer = BufWriter::new(&mut tmp);
        writer.write_all(bytes).map_err(write_err)?;
        writer
            .into_inner()
            .map_err(|e| write_err(e.into_error()))?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;

    tmp.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
