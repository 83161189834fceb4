//! Module name normalization.
//!
//! Declared module names carry build-system decoration that the files on
//! disk do not: `prebuilt_libstd.rust_sysroot` names `libstd-*.rlib`.

/// Prefix marking a module as the prebuilt half of a source/prebuilt pair.
pub const PREBUILT_PREFIX: &str = "prebuilt_";

/// Trailing tokens identifying sysroot module flavors. Longest first.
pub const SYSROOT_SUFFIXES: [&str; 2] = [".static.rust_sysroot", ".rust_sysroot"];

/// Strip at most one recognized prefix and one recognized suffix token.
pub fn normalize_module_name(name: &str) -> &str {
    let name = name.strip_prefix(PREBUILT_PREFIX).unwrap_or(name);
    SYSROOT_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_suffix() {
        assert_eq!(normalize_module_name("prebuilt_libstd.rust_sysroot"), "libstd");
    }

    #[test]
    fn strips_static_suffix() {
        assert_eq!(
            normalize_module_name("libcore.static.rust_sysroot"),
            "libcore"
        );
    }

    #[test]
    fn strips_only_one_of_each() {
        assert_eq!(
            normalize_module_name("prebuilt_prebuilt_libx.rust_sysroot.rust_sysroot"),
            "prebuilt_libx.rust_sysroot"
        );
    }

    #[test]
    fn plain_name_is_unchanged() {
        assert_eq!(normalize_module_name("libtest"), "libtest");
    }

    #[test]
    fn token_in_the_middle_is_kept() {
        assert_eq!(
            normalize_module_name("lib.rust_sysroot_extra"),
            "lib.rust_sysroot_extra"
        );
    }
}
