//! Toolchain version resolution.

use std::env;

/// Environment variable selecting the prebuilt toolchain release.
pub const VERSION_ENV: &str = "RUST_PREBUILTS_VERSION";

/// Release used when nothing overrides it.
pub const DEFAULT_RUST_VERSION: &str = "1.73.0";

/// Resolve the toolchain version.
///
/// Precedence, highest first: explicit override, [`VERSION_ENV`], the
/// manifest's configured version, [`DEFAULT_RUST_VERSION`].
pub fn resolve_version(explicit: Option<&str>, configured: Option<&str>) -> String {
    let from_env = env::var(VERSION_ENV).ok();
    pick_version(explicit, from_env.as_deref(), configured)
}

fn pick_version(explicit: Option<&str>, from_env: Option<&str>, configured: Option<&str>) -> String {
    [explicit, from_env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_RUST_VERSION)
        .to_string()
}

/// The `lib/rustlib` directory of a toolchain release, relative to its
/// platform family directory.
pub fn rustlib_dir(version: &str) -> String {
    format!("{version}/lib/rustlib")
}
