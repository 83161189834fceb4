//! CLI command implementations.

pub mod describe;
pub mod locate;
pub mod patch;
pub mod targets;
pub mod versions;
