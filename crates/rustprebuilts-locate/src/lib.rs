//! Discovery of prebuilt Rust sysroot libraries.
//!
//! For every declared module, a load hook resolves the toolchain directory
//! for the current build host, finds the one `<lib>-<hash>.<ext>` file per
//! requested artifact form, and produces the property record the external
//! builder appends to the module.

pub mod context;
pub mod error;
pub mod hooks;
pub mod locator;
pub mod naming;
pub mod props;
pub mod version;
pub mod versions;

pub use context::LoadContext;
pub use error::{LocateError, Result};
pub use hooks::{FilegroupProps, ModuleKind, ModuleProps};
pub use locator::{locate, LibraryMatch};
pub use props::{LibProps, TargetProps};
