//! Type-safe wrappers and enums for OpenDota data and CLI options.

pub mod format;
pub mod ids;
