//! Running the external patch tool over a target directory.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::info;

use crate::discover::discover_patches;
use crate::error::{PatchError, Result};

/// Path components stripped from file names inside each patch.
pub const STRIP_LEVEL: u32 = 1;

/// Patches directory used when none is configured.
pub const DEFAULT_PATCHES_DIR: &str = "patches";

/// Program used when none is configured.
pub const DEFAULT_PATCH_PROGRAM: &str = "patch";

/// How to apply a patches directory.
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// Directory holding the patch files.
    pub patches_dir: PathBuf,
    /// Patch tool to run.
    pub program: String,
    /// Pass `--dry-run` to the patch tool.
    pub dry_run: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            patches_dir: PathBuf::from(DEFAULT_PATCHES_DIR),
            program: DEFAULT_PATCH_PROGRAM.to_string(),
            dry_run: false,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Patches applied, in order.
    pub applied: Vec<PathBuf>,
}

/// Apply every patch in `options.patches_dir` to `target_dir`, in order.
///
/// Stops at the first patch the tool rejects. Patches applied before that
/// point are left in place.
pub fn apply_patches(target_dir: &Path, options: &PatchOptions) -> Result<ApplyReport> {
    if !target_dir.is_dir() {
        return Err(PatchError::TargetNotFound {
            path: target_dir.to_path_buf(),
        });
    }

    let patches = discover_patches(&options.patches_dir)?;
    let mut report = ApplyReport::default();
    for patch in patches {
        info!("Applying {}", patch.display());
        apply_one(target_dir, &patch, options)?;
        report.applied.push(patch);
    }
    Ok(report)
}

fn apply_one(target_dir: &Path, patch: &Path, options: &PatchOptions) -> Result<()> {
    let input = File::open(patch)?;

    let mut cmd = Command::new(&options.program);
    cmd.arg(format!("-p{STRIP_LEVEL}"));
    if options.dry_run {
        cmd.arg("--dry-run");
    }
    let status = cmd
        .current_dir(target_dir)
        .stdin(Stdio::from(input))
        .status()
        .map_err(|source| PatchError::Spawn {
            program: options.program.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(PatchError::PatchFailed {
            patch: patch.to_path_buf(),
            status: status.code(),
        })
    }
}
