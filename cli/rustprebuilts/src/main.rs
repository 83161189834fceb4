//! rustprebuilts: locate prebuilt Rust sysroot libraries and apply
//! toolchain source patches.

mod commands;
mod logging;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use rustprebuilts_patch::PatchError;
use rustprebuilts_targets::BuildOs;

use manifest::PrebuiltsManifest;

#[derive(Parser)]
#[command(
    name = "rustprebuilts",
    version,
    about = "Locate prebuilt Rust sysroot libraries and apply toolchain patches"
)]
struct Cli {
    /// Path to prebuilts.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the properties each declared module receives
    Describe {
        /// Modules to describe (all if omitted)
        names: Vec<String>,
        /// Build host (linux, linux-musl, darwin, windows; default: this machine)
        #[arg(long)]
        host: Option<BuildOs>,
        /// Toolchain version (overrides RUST_PREBUILTS_VERSION)
        #[arg(long)]
        toolchain_version: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Find the single `<lib>-*<ext>` file in a directory
    Locate {
        /// Directory to search, relative to --root
        #[arg(long)]
        dir: String,
        /// Library base name (e.g., libstd)
        #[arg(long)]
        lib: String,
        /// File extension including the dot (e.g., .rlib)
        #[arg(long)]
        ext: String,
        /// Root directory paths are reported relative to (default: current directory)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List prebuilt target variants
    Targets,
    /// List toolchain versions checked in for a host
    Versions {
        /// Build host (default: this machine)
        #[arg(long)]
        host: Option<BuildOs>,
    },
    /// Apply every patch in the patches directory to a source tree
    ApplyPatches {
        /// Directory to patch
        target: Option<PathBuf>,
        /// Directory holding the patches (default: from prebuilts.toml, else ./patches)
        #[arg(long)]
        patches_dir: Option<PathBuf>,
        /// Patch program (default: $PATCH, else `patch`)
        #[arg(long)]
        patch_program: Option<String>,
        /// Check that patches apply without changing any files
        #[arg(long)]
        dry_run: bool,
    },
}

/// Serialization format for property output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(exit_code(&e));
    }
}

/// Patch tool failures propagate the tool's own exit status.
fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<PatchError>() {
        Some(PatchError::PatchFailed {
            status: Some(code), ..
        }) if *code != 0 => *code,
        _ => 1,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Describe {
            names,
            host,
            toolchain_version,
            format,
        } => {
            let (manifest, manifest_dir) = load_manifest_required(&cwd, cli.manifest.as_deref())?;
            commands::describe::run(
                &manifest,
                &manifest_dir,
                &names,
                host.unwrap_or_else(BuildOs::detect),
                toolchain_version.as_deref(),
                format,
            )
        }

        Commands::Locate {
            dir,
            lib,
            ext,
            root,
            format,
        } => {
            let root = root.unwrap_or(cwd);
            commands::locate::run(&root, &dir, &lib, &ext, format)
        }

        Commands::Targets => commands::targets::run(BuildOs::detect()),

        Commands::Versions { host } => {
            let (manifest, root) = load_manifest_optional(&cwd, cli.manifest.as_deref())?;
            let root = root.unwrap_or(cwd);
            commands::versions::run(
                &root,
                host.unwrap_or_else(BuildOs::detect),
                manifest.as_ref().and_then(|m| m.toolchain_version()),
            )
        }

        Commands::ApplyPatches {
            target,
            patches_dir,
            patch_program,
            dry_run,
        } => {
            let (manifest, manifest_dir) = load_manifest_optional(&cwd, cli.manifest.as_deref())?;
            let configured = manifest
                .as_ref()
                .and_then(|m| m.patches_dir())
                .zip(manifest_dir.as_deref())
                .map(|(p, dir)| dir.join(p));
            commands::patch::run(
                target.as_deref(),
                patches_dir.or(configured),
                patch_program,
                dry_run,
            )
        }
    }
}

/// Load manifest, returning error if not found.
fn load_manifest_required(
    cwd: &Path,
    explicit: Option<&Path>,
) -> anyhow::Result<(PrebuiltsManifest, PathBuf)> {
    match load_manifest_optional(cwd, explicit)? {
        (Some(manifest), Some(dir)) => Ok((manifest, dir)),
        _ => anyhow::bail!("no {} found", manifest::MANIFEST_FILE),
    }
}

/// Load the manifest from `explicit`, or search upward from `cwd`.
/// Returns (None, None) if no manifest is found.
fn load_manifest_optional(
    cwd: &Path,
    explicit: Option<&Path>,
) -> anyhow::Result<(Option<PrebuiltsManifest>, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let manifest = PrebuiltsManifest::load(path)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => cwd.to_path_buf(),
        };
        return Ok((Some(manifest), Some(dir)));
    }
    match PrebuiltsManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((Some(manifest), Some(dir))),
        None => Ok((None, None)),
    }
}
