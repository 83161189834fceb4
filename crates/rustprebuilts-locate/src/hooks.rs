//! Module kinds and their load hooks.
//!
//! A load hook runs once per declared module, after its declared
//! properties are known, and returns the properties to append to it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rustprebuilts_targets::TargetDescriptor;

use crate::context::LoadContext;
use crate::error::Result;
use crate::naming::normalize_module_name;
use crate::props::LibProps;
use crate::version::rustlib_dir;

/// The module types this tool knows how to enrich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    /// Host sysroot library shipped as both rlib and dylib.
    StdlibPrebuiltHost,
    /// Host sysroot library shipped as an rlib only.
    StdlibPrebuiltHostStatic,
    /// Files from the host toolchain's rustlib directory.
    StdlibPrebuiltFilegroupHost,
}

impl ModuleKind {
    /// Canonical name, as written in the manifest.
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::StdlibPrebuiltHost => "stdlib-prebuilt-host",
            ModuleKind::StdlibPrebuiltHostStatic => "stdlib-prebuilt-host-static",
            ModuleKind::StdlibPrebuiltFilegroupHost => "stdlib-prebuilt-filegroup-host",
        }
    }

    /// Run this kind's load hook.
    ///
    /// `toolchain_srcs` is only consulted by filegroups.
    pub fn load(self, ctx: &LoadContext, toolchain_srcs: &[String]) -> Result<ModuleProps> {
        match self {
            ModuleKind::StdlibPrebuiltHost => library_props(ctx, true, true).map(ModuleProps::Library),
            ModuleKind::StdlibPrebuiltHostStatic => {
                library_props(ctx, true, false).map(ModuleProps::Library)
            }
            ModuleKind::StdlibPrebuiltFilegroupHost => {
                Ok(ModuleProps::Filegroup(filegroup_props(ctx, toolchain_srcs)))
            }
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties produced by a load hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ModuleProps {
    Library(LibProps),
    Filegroup(FilegroupProps),
}

/// Properties appended to a toolchain filegroup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilegroupProps {
    pub srcs: Vec<String>,
}

/// Build the library record for `ctx`, locating the requested forms for
/// every target variant of the build host.
///
/// Variants of other hosts are left disabled and never searched.
pub fn library_props(ctx: &LoadContext, rlib: bool, dylib: bool) -> Result<LibProps> {
    let rustlib = rustlib_dir(&ctx.version);
    let name = normalize_module_name(&ctx.module_name);
    debug!(module = %ctx.module_name, lib = name, host = %ctx.host, "loading prebuilt library");

    let mut props = LibProps::default();
    for target in TargetDescriptor::for_host(ctx.host) {
        if let Some(slot) = props.target.get_mut(target.key) {
            slot.add_prebuilt(ctx.module_dir(), name, &rustlib, target, rlib, dylib)?;
        }
    }

    let enabled = props.target.enabled().count();
    info!(module = %ctx.module_name, targets = enabled, "prebuilt library configured");
    Ok(props)
}

/// Rewrite toolchain-relative sources into paths under the host's rustlib
/// directory: `<host-tag>/<version>/lib/rustlib/<host-triple>/<src>`.
///
/// Hosts without a source triple drop that segment. Each path is cleaned
/// lexically.
pub fn filegroup_props(ctx: &LoadContext, toolchain_srcs: &[String]) -> FilegroupProps {
    let rustlib = rustlib_dir(&ctx.version);
    let mut prefix = vec![ctx.host.prebuilt_tag(), rustlib.as_str()];
    prefix.extend(ctx.host.rustlib_src_triple());

    let srcs = toolchain_srcs
        .iter()
        .map(|s| {
            let mut parts = prefix.clone();
            parts.push(s.as_str());
            clean_join(&parts)
        })
        .collect();
    FilegroupProps { srcs }
}

/// Join `/`-separated parts, dropping empty and `.` segments and folding
/// `..` into the preceding segment where there is one.
fn clean_join(parts: &[&str]) -> String {
    let mut out: Vec<&str> = Vec::new();
    for seg in parts.iter().flat_map(|p| p.split('/')) {
        match seg {
            "" | "." => {}
            ".." => match out.last() {
                Some(&last) if last != ".." => {
                    out.pop();
                }
                _ => out.push(".."),
            },
            _ => out.push(seg),
        }
    }
    if out.is_empty() {
        ".".to_string()
    } else {
        out.join("/")
    }
}
