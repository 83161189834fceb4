//! Build host model.
//!
//! The build host selects which prebuilt variants are populated. Only
//! descriptors belonging to the current host are ever searched on disk.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// The operating system (and libc flavor) the build is configured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildOs {
    /// Linux with glibc.
    Linux,
    /// Linux with musl.
    LinuxMusl,
    Darwin,
    Windows,
}

impl BuildOs {
    /// All known build hosts.
    pub const ALL: [BuildOs; 4] = [
        BuildOs::Linux,
        BuildOs::LinuxMusl,
        BuildOs::Darwin,
        BuildOs::Windows,
    ];

    /// Detect the host this binary was compiled for.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            BuildOs::Darwin
        } else if cfg!(target_os = "windows") {
            BuildOs::Windows
        } else if cfg!(all(target_os = "linux", target_env = "musl")) {
            BuildOs::LinuxMusl
        } else {
            BuildOs::Linux
        }
    }

    /// Canonical short name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            BuildOs::Linux => "linux",
            BuildOs::LinuxMusl => "linux-musl",
            BuildOs::Darwin => "darwin",
            BuildOs::Windows => "windows",
        }
    }

    /// Directory tag that host prebuilts are checked in under.
    pub fn prebuilt_tag(self) -> &'static str {
        match self {
            BuildOs::Linux => "linux-x86",
            BuildOs::LinuxMusl => "linux-musl-x86",
            BuildOs::Darwin => "darwin-x86",
            BuildOs::Windows => "windows-x86",
        }
    }

    /// Triple whose rustlib directory holds the toolchain sources shipped
    /// for this host. Windows prebuilts carry no triple directory.
    pub fn rustlib_src_triple(self) -> Option<&'static str> {
        match self {
            BuildOs::Linux => Some("i686-unknown-linux-gnu"),
            BuildOs::LinuxMusl => Some("i686-unknown-linux-musl"),
            BuildOs::Darwin => Some("x86_64-apple-darwin"),
            BuildOs::Windows => None,
        }
    }
}

impl fmt::Display for BuildOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildOs {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" | "linux-glibc" | "linux_glibc" => Ok(BuildOs::Linux),
            "linux-musl" | "linux_musl" | "musl" => Ok(BuildOs::LinuxMusl),
            "darwin" | "macos" => Ok(BuildOs::Darwin),
            "windows" => Ok(BuildOs::Windows),
            _ => Err(TargetError::UnknownHost { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_canonical_names() {
        for host in BuildOs::ALL {
            assert_eq!(host.as_str().parse::<BuildOs>().unwrap(), host);
        }
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("macos".parse::<BuildOs>().unwrap(), BuildOs::Darwin);
        assert_eq!("Linux_Glibc".parse::<BuildOs>().unwrap(), BuildOs::Linux);
        assert_eq!("musl".parse::<BuildOs>().unwrap(), BuildOs::LinuxMusl);
    }

    #[test]
    fn parse_unknown_host() {
        let err = "plan9".parse::<BuildOs>().unwrap_err();
        assert!(matches!(err, TargetError::UnknownHost { ref name } if name == "plan9"));
        assert!(err.to_string().contains("plan9"));
    }

    #[test]
    fn prebuilt_tags() {
        assert_eq!(BuildOs::Linux.prebuilt_tag(), "linux-x86");
        assert_eq!(BuildOs::LinuxMusl.prebuilt_tag(), "linux-musl-x86");
        assert_eq!(BuildOs::Darwin.prebuilt_tag(), "darwin-x86");
        assert_eq!(BuildOs::Windows.prebuilt_tag(), "windows-x86");
    }

    #[test]
    fn rustlib_src_triples() {
        assert_eq!(BuildOs::Linux.rustlib_src_triple(), Some("i686-unknown-linux-gnu"));
        assert_eq!(
            BuildOs::LinuxMusl.rustlib_src_triple(),
            Some("i686-unknown-linux-musl")
        );
        assert_eq!(BuildOs::Darwin.rustlib_src_triple(), Some("x86_64-apple-darwin"));
        assert_eq!(BuildOs::Windows.rustlib_src_triple(), None);
    }

    #[test]
    fn detect_matches_compile_target() {
        let host = BuildOs::detect();
        if cfg!(target_os = "macos") {
            assert_eq!(host, BuildOs::Darwin);
        } else if cfg!(target_os = "windows") {
            assert_eq!(host, BuildOs::Windows);
        } else {
            assert!(matches!(host, BuildOs::Linux | BuildOs::LinuxMusl));
        }
    }
}
