//! Error types for build host and target lookups.

/// Errors that can occur while resolving hosts and targets.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// The build host name is not one of the known hosts.
    #[error("unknown build host: '{name}' (expected one of: linux, linux-musl, darwin, windows)")]
    UnknownHost {
        /// The name that failed to parse.
        name: String,
    },

    /// No descriptor is registered under the given property key.
    #[error("unknown target key: '{key}'")]
    UnknownTarget {
        /// The key that was looked up.
        key: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
