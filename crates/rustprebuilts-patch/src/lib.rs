//! Ordered application of patches to a toolchain source drop.
//!
//! Every patch in a patches directory is applied, in numeric-then-lexical
//! file name order, with the external `patch` tool at a fixed strip level.
//! There is no rollback: the first failing patch stops the run.

pub mod apply;
pub mod discover;
pub mod error;

pub use apply::{apply_patches, ApplyReport, PatchOptions, DEFAULT_PATCHES_DIR, STRIP_LEVEL};
pub use discover::discover_patches;
pub use error::{PatchError, Result};
