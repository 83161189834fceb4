//! `rustprebuilts locate`: run the bare locator.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use rustprebuilts_locate::locate;

use crate::OutputFormat;

#[derive(Debug, Serialize)]
struct Located {
    path: String,
    suffix: String,
}

/// Locate `<root>/<dir>/<lib>-*<ext>` and print its relative path and suffix.
pub fn run(root: &Path, dir: &str, lib: &str, ext: &str, format: OutputFormat) -> Result<()> {
    print!("{}", render(root, dir, lib, ext, format)?);
    Ok(())
}

fn render(root: &Path, dir: &str, lib: &str, ext: &str, format: OutputFormat) -> Result<String> {
    let found = locate(root, dir, lib, ext).with_context(|| format!("locating {lib}"))?;
    let located = Located {
        path: found.rel_path,
        suffix: found.suffix,
    };
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&located)? + "\n",
        OutputFormat::Toml => toml::to_string_pretty(&located)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_path_and_suffix() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("lib")).unwrap();
        std::fs::write(dir.path().join("lib/libtest-0f0f.so"), b"").unwrap();

        let out = render(dir.path(), "lib", "libtest", ".so", OutputFormat::Toml).unwrap();
        assert!(out.contains("path = \"lib/libtest-0f0f.so\""), "{out}");
        assert!(out.contains("suffix = \"0f0f\""), "{out}");
    }

    #[test]
    fn no_match_names_the_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let err = render(dir.path(), "lib", "libtest", ".so", OutputFormat::Json).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("libtest-*.so"), "{msg}");
        assert!(msg.contains("found 0 matches"), "{msg}");
    }
}
