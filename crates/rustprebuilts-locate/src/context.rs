//! Per-module load context.

use std::path::{Path, PathBuf};

use rustprebuilts_targets::BuildOs;

/// Everything a load hook may consult about the module being configured.
///
/// Built fresh for each module; hooks never share one.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// Directory the module was declared in. Artifact paths are relative to it.
    pub module_dir: PathBuf,
    /// Declared module name, before normalization.
    pub module_name: String,
    /// Host the build is being configured on.
    pub host: BuildOs,
    /// Resolved toolchain version.
    pub version: String,
}

impl LoadContext {
    pub fn new(
        module_dir: impl Into<PathBuf>,
        module_name: impl Into<String>,
        host: BuildOs,
        version: impl Into<String>,
    ) -> Self {
        Self {
            module_dir: module_dir.into(),
            module_name: module_name.into(),
            host,
            version: version.into(),
        }
    }

    pub fn module_dir(&self) -> &Path {
        &self.module_dir
    }
}
