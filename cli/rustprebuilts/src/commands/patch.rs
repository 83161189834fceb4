//! `rustprebuilts apply-patches`: apply the patches directory to a source tree.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use rustprebuilts_patch::{apply_patches, PatchOptions};

/// Usage shown when no target directory is given.
pub const USAGE: &str = "usage: rustprebuilts apply-patches <TARGET_DIR>";

/// Environment variable naming the patch program.
pub const PATCH_PROGRAM_ENV: &str = "PATCH";

/// Apply every patch to `target`.
///
/// A missing target is a usage error; nothing is applied.
pub fn run(
    target: Option<&Path>,
    patches_dir: Option<PathBuf>,
    program: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let Some(target) = target else {
        bail!(USAGE);
    };

    let mut options = PatchOptions {
        dry_run,
        ..PatchOptions::default()
    };
    if let Some(dir) = patches_dir {
        options.patches_dir = dir;
    }
    if let Some(program) = program.or_else(|| env::var(PATCH_PROGRAM_ENV).ok()) {
        options.program = program;
    }

    let report = apply_patches(target, &options)
        .with_context(|| format!("patching {}", target.display()))?;
    println!(
        "Applied {} patch(es) to {}",
        report.applied.len(),
        target.display()
    );
    Ok(())
}
