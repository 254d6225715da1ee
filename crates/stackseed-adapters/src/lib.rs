//! Infrastructure adapters for stackseed.
//!
//! This crate implements the ports defined in `stackseed-core::application::ports`
//! and ships the built-in blueprint. It contains all process and filesystem I/O.

pub mod blueprint;
pub mod filesystem;
pub mod runner;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use runner::{RecordedCommand, RecordingRunner, ShellRunner};
