//! `rustprebuilts describe`: run each module's load hook and print the
//! properties it appends.

use std::path::Path;

use anyhow::{bail, Result};
use serde::Serialize;

use rustprebuilts_locate::version::resolve_version;
use rustprebuilts_locate::{LoadContext, ModuleKind, ModuleProps};
use rustprebuilts_targets::BuildOs;

use crate::manifest::{ModuleDecl, PrebuiltsManifest};
use crate::OutputFormat;

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct Described<'a> {
    toolchain_version: String,
    host: BuildOs,
    module: Vec<DescribedModule<'a>>,
}

#[derive(Debug, Serialize)]
struct DescribedModule<'a> {
    name: &'a str,
    kind: ModuleKind,
    properties: ModuleProps,
}

/// Describe the named modules (all if `names` is empty) and print the result.
pub fn run(
    manifest: &PrebuiltsManifest,
    module_dir: &Path,
    names: &[String],
    host: BuildOs,
    version_override: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let out = render(manifest, module_dir, names, host, version_override, format)?;
    print!("{out}");
    Ok(())
}

pub(crate) fn render(
    manifest: &PrebuiltsManifest,
    module_dir: &Path,
    names: &[String],
    host: BuildOs,
    version_override: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let version = resolve_version(version_override, manifest.toolchain_version());
    let selected = select(manifest, names)?;

    let mut described = Vec::with_capacity(selected.len());
    let mut failures = Vec::new();
    for decl in selected {
        let ctx = LoadContext::new(module_dir, &decl.name, host, &version);
        match decl.kind.load(&ctx, &decl.toolchain_srcs) {
            Ok(properties) => described.push(DescribedModule {
                name: &decl.name,
                kind: decl.kind,
                properties,
            }),
            Err(e) => failures.push(format!("  {}: {e}", decl.name)),
        }
    }
    if !failures.is_empty() {
        bail!(
            "{} module(s) failed to configure:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }

    let doc = Described {
        toolchain_version: version,
        host,
        module: described,
    };
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&doc)? + "\n",
        OutputFormat::Toml => toml::to_string_pretty(&doc)?,
    };
    Ok(text)
}

fn select<'a>(manifest: &'a PrebuiltsManifest, names: &[String]) -> Result<Vec<&'a ModuleDecl>> {
    if names.is_empty() {
        return Ok(manifest.modules.iter().collect());
    }
    names
        .iter()
        .map(|name| match manifest.module(name) {
            Some(decl) => Ok(decl),
            None => bail!("unknown module: '{name}'"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MANIFEST: &str = r#"
[toolchain]
version = "1.73.0"

[[module]]
name = "prebuilt_libstd.rust_sysroot"
kind = "stdlib-prebuilt-host"

[[module]]
name = "rust_toolchain_srcs"
kind = "stdlib-prebuilt-filegroup-host"
toolchain-srcs = ["lib/libstd.so"]
"#;

    fn populate(root: &Path) {
        for triple in ["x86_64-unknown-linux-gnu", "i686-unknown-linux-gnu"] {
            let dir = root.join(format!("linux-x86/1.73.0/lib/rustlib/{triple}/lib"));
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("libstd-abc123.rlib"), b"").unwrap();
            fs::write(dir.join("libstd-abc123.so"), b"").unwrap();
        }
    }

    #[test]
    fn describes_all_modules_as_json() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        let manifest = PrebuiltsManifest::from_str(MANIFEST).unwrap();

        let out = render(
            &manifest,
            dir.path(),
            &[],
            BuildOs::Linux,
            Some("1.73.0"),
            OutputFormat::Json,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["toolchain-version"], "1.73.0");
        assert_eq!(json["host"], "linux");
        let lib = &json["module"][0];
        assert_eq!(lib["name"], "prebuilt_libstd.rust_sysroot");
        let x86_64 = &lib["properties"]["target"]["linux_glibc_x86_64"];
        assert_eq!(x86_64["enabled"], true);
        assert_eq!(x86_64["suffix"], "abc123");
        assert_eq!(
            x86_64["rlib"]["srcs"][0],
            "linux-x86/1.73.0/lib/rustlib/x86_64-unknown-linux-gnu/lib/libstd-abc123.rlib"
        );
        assert_eq!(lib["properties"]["target"]["darwin_x86_64"]["enabled"], false);

        let fg = &json["module"][1];
        assert_eq!(
            fg["properties"]["srcs"][0],
            "linux-x86/1.73.0/lib/rustlib/i686-unknown-linux-gnu/lib/libstd.so"
        );
    }

    #[test]
    fn describes_selected_module_as_toml() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = PrebuiltsManifest::from_str(MANIFEST).unwrap();

        let out = render(
            &manifest,
            dir.path(),
            &["rust_toolchain_srcs".to_string()],
            BuildOs::Darwin,
            Some("1.80.0"),
            OutputFormat::Toml,
        )
        .unwrap();
        assert!(out.contains("toolchain-version = \"1.80.0\""), "{out}");
        assert!(out.contains("darwin-x86/1.80.0/lib/rustlib/x86_64-apple-darwin/lib/libstd.so"));
        assert!(!out.contains("prebuilt_libstd"));
    }

    #[test]
    fn missing_artifacts_fail() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = PrebuiltsManifest::from_str(MANIFEST).unwrap();

        let err = render(
            &manifest,
            dir.path(),
            &[],
            BuildOs::Linux,
            Some("1.73.0"),
            OutputFormat::Json,
        )
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("1 module(s) failed"), "{msg}");
        assert!(msg.contains("prebuilt_libstd.rust_sysroot: "), "{msg}");
        assert!(msg.contains("libstd-*.rlib"), "{msg}");
        assert!(msg.contains("found 0 matches"), "{msg}");
    }

    #[test]
    fn every_failing_module_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = PrebuiltsManifest::from_str(
            r#"
[[module]]
name = "libstd.rust_sysroot"
kind = "stdlib-prebuilt-host"

[[module]]
name = "libcore.static.rust_sysroot"
kind = "stdlib-prebuilt-host-static"
"#,
        )
        .unwrap();

        let err = render(
            &manifest,
            dir.path(),
            &[],
            BuildOs::Darwin,
            Some("1.73.0"),
            OutputFormat::Json,
        )
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("2 module(s) failed"), "{msg}");
        assert!(msg.contains("libstd-*.rlib"), "{msg}");
        assert!(msg.contains("libcore-*.rlib"), "{msg}");
    }

    #[test]
    fn unknown_module_name() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = PrebuiltsManifest::from_str(MANIFEST).unwrap();

        let err = render(
            &manifest,
            dir.path(),
            &["libnope".to_string()],
            BuildOs::Linux,
            None,
            OutputFormat::Json,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown module"));
    }
}
