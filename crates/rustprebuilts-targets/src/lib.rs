//! Build host and target descriptor tables for prebuilt Rust toolchains.
//!
//! Two layers make up a prebuilt target:
//! - **Build host:** the OS/libc flavor the build is configured on
//! - **Target descriptor:** a platform family directory plus an architecture
//!   triple, one per prebuilt variant the host ships

pub mod descriptor;
pub mod error;
pub mod host;

pub use descriptor::{TargetDescriptor, RLIB_EXTENSION, TARGETS};
pub use error::{Result, TargetError};
pub use host::BuildOs;
