//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `stackseed-adapters` and the CLI implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `Filesystem`: file operations
//!   - `CommandRunner`: external program execution
//!   - `SetupObserver`: progress notifications

pub mod output;

pub use output::{CommandRunner, Filesystem, NoopObserver, SetupObserver};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem};
