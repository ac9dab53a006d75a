use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageFilterError {
    #[error("Input document not found or unreadable: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("Invalid page range: {0}")]
    InvalidRange(String),

    #[error("PDF operation failed: {0}")]
    OperationError(String),

    #[error(transparent)]
    Output(#[from] shared_output::OutputError),
}

impl PageFilterError {
    /// Errors caused by what the user asked for rather than by the
    /// environment; callers report these without a backtrace.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidRange(_))
    }
}
