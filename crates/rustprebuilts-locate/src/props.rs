//! Property records appended to prebuilt library modules.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use rustprebuilts_targets::{TargetDescriptor, RLIB_EXTENSION};

use crate::error::{LocateError, Result};
use crate::locator::locate;

/// A list of source files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Srcs {
    pub srcs: Vec<String>,
}

/// Properties for one target variant of a prebuilt library.
///
/// The default value is the disabled, empty record left in place for
/// variants the build host does not populate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProps {
    /// Hash suffix shared by the rlib and dylib.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default)]
    pub link_dirs: Vec<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub dylib: Srcs,
    #[serde(default)]
    pub rlib: Srcs,
}

impl TargetProps {
    /// Locate the requested artifact forms for `target` and fill in this record.
    ///
    /// Artifacts are searched under `<family>/<rustlib_dir>/<triple>/lib`
    /// relative to `module_dir`.
    pub fn add_prebuilt(
        &mut self,
        module_dir: &Path,
        lib: &str,
        rustlib_dir: &str,
        target: &TargetDescriptor,
        rlib: bool,
        dylib: bool,
    ) -> Result<()> {
        let dir = format!("{}/{}/{}/lib", target.family, rustlib_dir, target.triple);
        debug!(variant = target.key, %dir, lib, "adding prebuilt");
        self.link_dirs = vec![dir.clone()];
        self.enabled = true;

        let mut rlib_suffix = None;
        if rlib {
            let found = locate(module_dir, &dir, lib, RLIB_EXTENSION)?;
            self.rlib.srcs = vec![found.rel_path];
            rlib_suffix = Some(found.suffix.clone());
            self.suffix = Some(found.suffix);
        }
        if dylib {
            let found = locate(module_dir, &dir, lib, target.dylib_extension())?;
            if let Some(rlib_suffix) = rlib_suffix {
                if rlib_suffix != found.suffix {
                    return Err(LocateError::SuffixMismatch {
                        lib: lib.to_string(),
                        rlib: rlib_suffix,
                        dylib: found.suffix,
                    });
                }
            }
            self.dylib.srcs = vec![found.rel_path];
            self.suffix = Some(found.suffix);
        }
        Ok(())
    }
}

/// Per-target records, one field per known descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSet {
    #[serde(default)]
    pub linux_glibc_x86_64: TargetProps,
    #[serde(default)]
    pub linux_glibc_x86: TargetProps,
    #[serde(default)]
    pub linux_musl_x86_64: TargetProps,
    #[serde(default)]
    pub linux_musl_x86: TargetProps,
    #[serde(default)]
    pub darwin_x86_64: TargetProps,
}

impl TargetSet {
    /// The record for a descriptor key.
    pub fn get(&self, key: &str) -> Option<&TargetProps> {
        match key {
            "linux_glibc_x86_64" => Some(&self.linux_glibc_x86_64),
            "linux_glibc_x86" => Some(&self.linux_glibc_x86),
            "linux_musl_x86_64" => Some(&self.linux_musl_x86_64),
            "linux_musl_x86" => Some(&self.linux_musl_x86),
            "darwin_x86_64" => Some(&self.darwin_x86_64),
            _ => None,
        }
    }

    /// Mutable access to the record for a descriptor key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut TargetProps> {
        match key {
            "linux_glibc_x86_64" => Some(&mut self.linux_glibc_x86_64),
            "linux_glibc_x86" => Some(&mut self.linux_glibc_x86),
            "linux_musl_x86_64" => Some(&mut self.linux_musl_x86_64),
            "linux_musl_x86" => Some(&mut self.linux_musl_x86),
            "darwin_x86_64" => Some(&mut self.darwin_x86_64),
            _ => None,
        }
    }

    /// Records that were turned on, keyed by descriptor.
    pub fn enabled(&self) -> impl Iterator<Item = (&'static str, &TargetProps)> {
        rustprebuilts_targets::TARGETS
            .iter()
            .filter_map(move |t| self.get(t.key).map(|p| (t.key, p)))
            .filter(|(_, p)| p.enabled)
    }
}

/// The full record appended to a prebuilt library module.
///
/// The module itself stays disabled; only the host's target variants are
/// switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibProps {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub target: TargetSet,
}
