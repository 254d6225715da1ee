//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::{CommandOutcome, CommandSpec, Phase, StepReport};
use crate::error::StackseedResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackseed_adapters::filesystem::LocalFilesystem` (production)
/// - `stackseed_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> StackseedResult<()>;

    /// Write content to a file, truncating it.
    fn write_file(&self, path: &Path, content: &str) -> StackseedResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> StackseedResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for running external programs.
///
/// Implemented by:
/// - `stackseed_adapters::runner::ShellRunner` (production)
/// - `stackseed_adapters::runner::RecordingRunner` (testing, dry runs)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `cwd` as working directory and wait for it.
    ///
    /// `Ok` with an unsuccessful outcome means the program ran and failed;
    /// `Err` means it could not be started at all.
    fn run(&self, command: &CommandSpec, cwd: &Path) -> StackseedResult<CommandOutcome>;
}

/// Port for progress reporting while a setup runs.
pub trait SetupObserver: Send + Sync {
    fn step_started(&self, _phase: Phase, _name: &str) {}

    fn step_finished(&self, _report: &StepReport) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SetupObserver for NoopObserver {}
