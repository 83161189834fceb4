//! `prebuilts.toml` manifest parsing and module declarations.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use rustprebuilts_locate::ModuleKind;

/// File name searched for when no manifest path is given.
pub const MANIFEST_FILE: &str = "prebuilts.toml";

/// The top-level manifest for a prebuilts directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrebuiltsManifest {
    /// Toolchain defaults.
    #[serde(default)]
    pub toolchain: Option<ToolchainConfig>,
    /// Declared modules, in declaration order.
    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleDecl>,
}

/// Toolchain section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolchainConfig {
    /// Toolchain release used when no override is set.
    #[serde(default)]
    pub version: Option<String>,
    /// Patches directory, relative to the manifest.
    #[serde(default)]
    pub patches_dir: Option<String>,
}

/// One declared module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleDecl {
    /// Module name as declared (may carry build-system decoration).
    pub name: String,
    /// Module type.
    pub kind: ModuleKind,
    /// Toolchain-relative sources (filegroups only).
    #[serde(default)]
    pub toolchain_srcs: Vec<String>,
}

impl PrebuiltsManifest {
    /// Search upward from `start_dir` for a `prebuilts.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let manifest = Self::load(&candidate)?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Load and validate a manifest from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let manifest = Self::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(manifest)
    }

    /// Parse and validate a manifest from a TOML string.
    pub fn from_str(s: &str) -> Result<Self> {
        let manifest: PrebuiltsManifest = toml::from_str(s)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for module in &self.modules {
            if !seen.insert(module.name.as_str()) {
                bail!("module '{}' is declared more than once", module.name);
            }
            if !module.toolchain_srcs.is_empty()
                && module.kind != ModuleKind::StdlibPrebuiltFilegroupHost
            {
                bail!(
                    "module '{}': toolchain-srcs is only valid for {} modules",
                    module.name,
                    ModuleKind::StdlibPrebuiltFilegroupHost
                );
            }
        }
        Ok(())
    }

    /// The configured toolchain version, if any.
    pub fn toolchain_version(&self) -> Option<&str> {
        self.toolchain.as_ref().and_then(|t| t.version.as_deref())
    }

    /// The configured patches directory, if any.
    pub fn patches_dir(&self) -> Option<&str> {
        self.toolchain.as_ref().and_then(|t| t.patches_dir.as_deref())
    }

    /// Look up a declared module by name.
    pub fn module(&self, name: &str) -> Option<&ModuleDecl> {
        self.modules.iter().find(|m| m.name == name)
    }
}
