//! Prebuilt target descriptors.
//!
//! Each descriptor names the platform family directory and architecture
//! triple one prebuilt variant lives under, and the property key the
//! external builder knows that variant by.

use serde::Serialize;

use crate::error::{Result, TargetError};
use crate::host::BuildOs;

/// One (platform family, architecture triple) pair that prebuilts ship for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetDescriptor {
    /// Property key (e.g., "linux_glibc_x86_64").
    pub key: &'static str,
    /// Build host this variant is populated for.
    pub host: BuildOs,
    /// Platform family directory (e.g., "linux-x86").
    pub family: &'static str,
    /// Architecture triple (e.g., "x86_64-unknown-linux-gnu").
    pub triple: &'static str,
}

/// Every descriptor the locator understands, in property order.
pub static TARGETS: [TargetDescriptor; 5] = [
    TargetDescriptor {
        key: "linux_glibc_x86_64",
        host: BuildOs::Linux,
        family: "linux-x86",
        triple: "x86_64-unknown-linux-gnu",
    },
    TargetDescriptor {
        key: "linux_glibc_x86",
        host: BuildOs::Linux,
        family: "linux-x86",
        triple: "i686-unknown-linux-gnu",
    },
    TargetDescriptor {
        key: "linux_musl_x86_64",
        host: BuildOs::LinuxMusl,
        family: "linux-musl-x86",
        triple: "x86_64-unknown-linux-musl",
    },
    TargetDescriptor {
        key: "linux_musl_x86",
        host: BuildOs::LinuxMusl,
        family: "linux-musl-x86",
        triple: "i686-unknown-linux-musl",
    },
    TargetDescriptor {
        key: "darwin_x86_64",
        host: BuildOs::Darwin,
        family: "darwin-x86",
        triple: "x86_64-apple-darwin",
    },
];

/// Static archive extension.
pub const RLIB_EXTENSION: &str = ".rlib";

impl TargetDescriptor {
    /// Whether this descriptor belongs to the Darwin family.
    pub fn is_darwin(&self) -> bool {
        self.family.contains("darwin")
    }

    /// Shared-library extension for this platform family.
    pub fn dylib_extension(&self) -> &'static str {
        if self.is_darwin() {
            ".dylib"
        } else {
            ".so"
        }
    }

    /// Look up a descriptor by property key.
    pub fn by_key(key: &str) -> Result<&'static TargetDescriptor> {
        TARGETS
            .iter()
            .find(|t| t.key == key)
            .ok_or_else(|| TargetError::UnknownTarget {
                key: key.to_string(),
            })
    }

    /// Descriptors populated when building on `host`.
    pub fn for_host(host: BuildOs) -> impl Iterator<Item = &'static TargetDescriptor> {
        TARGETS.iter().filter(move |t| t.host == host)
    }
}
