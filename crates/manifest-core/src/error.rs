use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Directory '{}' does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    Output(#[from] shared_output::OutputError),
}

impl ManifestError {
    /// Errors caused by what the user asked for rather than by the
    /// environment; callers report these without a backtrace.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::DirectoryNotFound(_))
    }
}
