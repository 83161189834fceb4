//! Unique-match lookup of a prebuilt library file.
//!
//! Toolchains publish libraries with a build hash embedded in the file name
//! (`libstd-8f3a2c1d.rlib`). The locator finds the single file matching
//! `<lib>-*<ext>` in a directory and splits that hash back out.

use std::path::{Component, Path};

use glob::Pattern;
use tracing::debug;

use crate::error::{LocateError, Result};

/// A uniquely matched library file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryMatch {
    /// Path of the match relative to the module directory, `/`-separated.
    pub rel_path: String,
    /// Text between `<lib>-` and the extension.
    pub suffix: String,
}

/// Find the one file matching `<module_dir>/<dir>/<lib>-*<extension>`.
///
/// Anything other than exactly one match is an error naming the pattern and
/// the number of matches found.
pub fn locate(module_dir: &Path, dir: &str, lib: &str, extension: &str) -> Result<LibraryMatch> {
    let module_str = module_dir.to_string_lossy();
    let shown = format!("{}-*{}", join(&[module_str.as_ref(), dir, lib]), extension);
    let escaped = format!(
        "{}-*{}",
        join(&[
            Pattern::escape(&module_str),
            Pattern::escape(dir),
            Pattern::escape(lib),
        ]),
        Pattern::escape(extension)
    );
    debug!(pattern = %shown, "globbing for prebuilt");

    let paths = glob::glob(&escaped).map_err(|source| LocateError::InvalidPattern {
        pattern: shown.clone(),
        source,
    })?;
    let matches = paths.collect::<std::result::Result<Vec<_>, _>>()?;

    if matches.len() != 1 {
        return Err(LocateError::UnexpectedMatchCount {
            pattern: shown,
            count: matches.len(),
        });
    }
    let found = &matches[0];

    let file_name = found
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = file_name
        .strip_suffix(extension)
        .and_then(|stem| stem.get(lib.len() + 1..))
        .unwrap_or_default()
        .to_string();

    let relative = found.strip_prefix(module_dir).unwrap_or(found);
    let rel_path = to_slash(relative);
    debug!(path = %rel_path, suffix = %suffix, "located prebuilt");

    Ok(LibraryMatch { rel_path, suffix })
}

fn join<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| !p.is_empty())
        .map(|p| p.trim_end_matches('/'))
        .collect::<Vec<_>>()
        .join("/")
}

/// Render a relative path with `/` separators regardless of platform.
fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn unique_match_yields_path_and_suffix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "lib/libstd-abc123.rlib");

        let m = locate(dir.path(), "lib", "libstd", ".rlib").unwrap();
        assert_eq!(m.rel_path, "lib/libstd-abc123.rlib");
        assert_eq!(m.suffix, "abc123");
    }

    #[test]
    fn nested_directory_is_slash_joined() {
        let dir = tempfile::tempdir().unwrap();
        touch(
            dir.path(),
            "linux-x86/1.73.0/lib/rustlib/x86_64-unknown-linux-gnu/lib/libcore-9f8e.rlib",
        );

        let m = locate(
            dir.path(),
            "linux-x86/1.73.0/lib/rustlib/x86_64-unknown-linux-gnu/lib",
            "libcore",
            ".rlib",
        )
        .unwrap();
        assert_eq!(
            m.rel_path,
            "linux-x86/1.73.0/lib/rustlib/x86_64-unknown-linux-gnu/lib/libcore-9f8e.rlib"
        );
        assert_eq!(m.suffix, "9f8e");
    }

    #[test]
    fn zero_matches_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("lib")).unwrap();

        let err = locate(dir.path(), "lib", "libstd", ".rlib").unwrap_err();
        match err {
            LocateError::UnexpectedMatchCount { pattern, count } => {
                assert_eq!(count, 0);
                assert!(pattern.ends_with("lib/libstd-*.rlib"), "{pattern}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn two_matches_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "lib/libstd-aaa.rlib");
        touch(dir.path(), "lib/libstd-bbb.rlib");

        let err = locate(dir.path(), "lib", "libstd", ".rlib").unwrap_err();
        assert!(matches!(err, LocateError::UnexpectedMatchCount { count: 2, .. }));
        assert!(err.to_string().contains("found 2 matches"));
    }

    #[test]
    fn other_extensions_and_names_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "lib/libstd-abc.rlib");
        touch(dir.path(), "lib/libstd-abc.so");
        touch(dir.path(), "lib/libstdx-abc.rlib");
        touch(dir.path(), "lib/libcore-abc.rlib");

        let m = locate(dir.path(), "lib", "libstd", ".so").unwrap();
        assert_eq!(m.rel_path, "lib/libstd-abc.so");
        let m = locate(dir.path(), "lib", "libstd", ".rlib").unwrap();
        assert_eq!(m.rel_path, "lib/libstd-abc.rlib");
    }

    #[cfg(unix)]
    #[test]
    fn metacharacters_in_names_match_literally() {
        let dir = tempfile::tempdir().unwrap();
        let module = dir.path().join("mod[1]");
        touch(&module, "lib/lib?x-h1.rlib");
        touch(&module, "lib/libax-h2.rlib");

        let m = locate(&module, "lib", "lib?x", ".rlib").unwrap();
        assert_eq!(m.rel_path, "lib/lib?x-h1.rlib");
        assert_eq!(m.suffix, "h1");
    }

    #[test]
    fn empty_hash_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "lib/libstd-.rlib");

        let m = locate(dir.path(), "lib", "libstd", ".rlib").unwrap();
        assert_eq!(m.suffix, "");
    }

    #[test]
    fn to_slash_drops_current_dir() {
        assert_eq!(to_slash(Path::new("./a/b/c.rlib")), "a/b/c.rlib");
    }
}
