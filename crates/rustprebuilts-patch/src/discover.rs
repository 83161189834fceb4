//! Patch file discovery and ordering.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PatchError, Result};

/// File extensions recognized as patches.
pub const PATCH_EXTENSIONS: [&str; 2] = ["patch", "diff"];

/// Find all patch files in `patches_dir`, in application order.
///
/// Hidden files, directories and files without a patch extension are
/// skipped. Files are ordered by their leading number (missing counts as
/// zero), then by name.
pub fn discover_patches(patches_dir: &Path) -> Result<Vec<PathBuf>> {
    if !patches_dir.is_dir() {
        return Err(PatchError::PatchesDirNotFound {
            path: patches_dir.to_path_buf(),
        });
    }

    let mut patches = Vec::new();
    for entry in fs::read_dir(patches_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let is_patch = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| PATCH_EXTENSIONS.contains(&e));
        if !is_patch {
            debug!(file = %name, "skipping non-patch file");
            continue;
        }
        patches.push(path);
    }

    patches.sort_by(|a, b| compare_names(file_name(a), file_name(b)));
    Ok(patches)
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

/// Leading decimal digits with leading zeros trimmed; empty counts as 0.
fn leading_number(name: &str) -> &str {
    let end = name.find(|c: char| !c.is_ascii_digit()).unwrap_or(name.len());
    name[..end].trim_start_matches('0')
}

/// Numeric comparison of leading digits, falling back to byte order.
///
/// Digit runs are compared by length, then lexically, so prefixes of any
/// width order as numbers.
fn compare_names(a: &str, b: &str) -> Ordering {
    let (na, nb) = (leading_number(a), leading_number(b));
    na.len()
        .cmp(&nb.len())
        .then_with(|| na.cmp(nb))
        .then_with(|| a.cmp(b))
}
