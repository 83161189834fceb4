//! Error types for patch application.

use std::path::PathBuf;

/// Errors that can occur while applying patches.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// The directory to patch does not exist.
    #[error("target directory not found: {}", path.display())]
    TargetNotFound { path: PathBuf },

    /// The patches directory does not exist.
    #[error("patches directory not found: {}", path.display())]
    PatchesDirNotFound { path: PathBuf },

    /// The patch tool could not be started.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The patch tool exited unsuccessfully.
    #[error("applying {} failed ({})", patch.display(), describe_status(*status))]
    PatchFailed {
        /// The patch being applied.
        patch: PathBuf,
        /// Exit code, if the tool exited normally.
        status: Option<i32>,
    },

    /// I/O error reading the patches directory or a patch file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_status(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Result type for patch operations.
pub type Result<T> = std::result::Result<T, PatchError>;
