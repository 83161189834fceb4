//! `rustprebuilts versions`: list toolchain releases checked in for a host.

use std::path::Path;

use anyhow::{Context, Result};

use rustprebuilts_locate::version::resolve_version;
use rustprebuilts_locate::versions::installed_versions;
use rustprebuilts_targets::BuildOs;

/// Print installed versions under `root`, marking the one that would be used.
pub fn run(root: &Path, host: BuildOs, configured: Option<&str>) -> Result<()> {
    let selected = resolve_version(None, configured);
    let versions = installed_versions(root, host)
        .with_context(|| format!("listing toolchains in {}", root.display()))?;

    if versions.is_empty() {
        println!("No toolchains found under {}", root.join(host.prebuilt_tag()).display());
        return Ok(());
    }
    for v in &versions {
        let marker = if *v == selected { "*" } else { " " };
        println!("{marker} {v}");
    }
    if !versions.contains(&selected) {
        println!();
        println!("Selected version {selected} is not installed for {host}.");
    }
    Ok(())
}
