//! Listing of toolchain releases checked in for a host.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use semver::Version;
use tracing::warn;

use rustprebuilts_targets::BuildOs;

use crate::error::Result;

/// Toolchain versions present under `<root>/<host-tag>/`.
///
/// Semver names come first in ascending order, followed by any other
/// directory names in lexical order. A missing host directory yields an
/// empty list.
pub fn installed_versions(root: &Path, host: BuildOs) -> Result<Vec<String>> {
    let host_dir = root.join(host.prebuilt_tag());
    if !host_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut versions = Vec::new();
    for entry in fs::read_dir(&host_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if !name.starts_with('.') => versions.push(name),
            Ok(_) => {}
            Err(name) => warn!(?name, "skipping non-UTF-8 toolchain directory"),
        }
    }
    versions.sort_by(|a, b| compare_versions(a, b));
    Ok(versions)
}

fn compare_versions(a: &str, b: &str) -> Ordering {
    match (Version::parse(a), Version::parse(b)) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
