//! Runner that records commands instead of executing them.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use stackseed_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandOutcome, CommandSpec},
    error::StackseedResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: CommandSpec,
    pub cwd: PathBuf,
}

/// Used for `--dry-run` and tests. Every command succeeds. Clones share
/// the log.
#[derive(Debug, Clone)]
pub struct RecordingRunner {
    log: Arc<RwLock<Vec<RecordedCommand>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn recorded(&self) -> Vec<RecordedCommand> {
        self.log.read().map(|log| log.clone()).unwrap_or_default()
    }

    /// Masked display strings, in call order.
    pub fn command_lines(&self) -> Vec<String> {
        self.recorded()
            .iter()
            .map(|r| r.command.to_string())
            .collect()
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> StackseedResult<CommandOutcome> {
        self.log
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(RecordedCommand {
                command: command.clone(),
                cwd: cwd.to_path_buf(),
            });
        Ok(CommandOutcome::success())
    }
}
