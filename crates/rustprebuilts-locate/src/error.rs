//! Error types for prebuilt discovery.

/// Errors that can occur while locating prebuilts.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    /// Zero or several files matched a pattern that must match exactly once.
    #[error("unexpected number of matches for prebuilt libraries at path \"{pattern}\", found {count} matches")]
    UnexpectedMatchCount {
        /// The search pattern, unescaped.
        pattern: String,
        /// How many entries matched.
        count: usize,
    },

    /// The search pattern could not be compiled.
    #[error("invalid glob pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A directory entry could not be read while globbing.
    #[error("reading glob match: {0}")]
    Glob(#[from] glob::GlobError),

    /// The static and dynamic forms of a library carry different hashes.
    #[error("suffix mismatch for {lib}: rlib has '{rlib}', dylib has '{dylib}'")]
    SuffixMismatch {
        lib: String,
        rlib: String,
        dylib: String,
    },

    /// I/O error listing toolchain directories.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for locate operations.
pub type Result<T> = std::result::Result<T, LocateError>;
