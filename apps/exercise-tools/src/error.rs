//! Error contract shared by every subcommand

use manifest_core::ManifestError;
use pagefilter_core::PageFilterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    PageFilter(#[from] PageFilterError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

impl ToolError {
    /// Missing inputs and bad ranges; reported as a message with exit code 2.
    /// Everything else is fatal and exits with code 1.
    pub fn is_user_error(&self) -> bool {
        match self {
            ToolError::PageFilter(e) => e.is_user_error(),
            ToolError::Manifest(e) => e.is_user_error(),
        }
    }
}
