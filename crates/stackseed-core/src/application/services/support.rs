//! In-memory fakes shared by the service tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::application::{ApplicationError, CommandRunner, Filesystem, SetupObserver};
use crate::domain::{CommandOutcome, CommandSpec, Phase, StepReport};
use crate::error::StackseedResult;

#[derive(Clone, Default)]
pub(crate) struct FakeFilesystem {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl FakeFilesystem {
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn put(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> StackseedResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StackseedResult<()> {
        self.put(path, content);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> StackseedResult<String> {
        self.file(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }
}

/// Records every invocation and fails programs listed in `failing`.
#[derive(Clone, Default)]
pub(crate) struct FakeRunner {
    calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
    failing: Vec<String>,
    missing: Vec<String>,
}

impl FakeRunner {
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    pub fn missing(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> StackseedResult<CommandOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push((command.command_line(), cwd.to_path_buf()));

        if self.missing.contains(&command.program) {
            return Err(ApplicationError::CommandSpawn {
                command: command.command_line(),
                reason: "No such file or directory".into(),
            }
            .into());
        }
        if self.failing.contains(&command.program) {
            return Ok(CommandOutcome::failure(1));
        }
        Ok(CommandOutcome::success())
    }
}

/// Observer that keeps the event stream for assertions.
#[derive(Default)]
pub(crate) struct RecordingObserver {
    pub started: Mutex<Vec<(Phase, String)>>,
    pub finished: Mutex<Vec<StepReport>>,
}

impl SetupObserver for RecordingObserver {
    fn step_started(&self, phase: Phase, name: &str) {
        self.started.lock().unwrap().push((phase, name.to_string()));
    }

    fn step_finished(&self, report: &StepReport) {
        self.finished.lock().unwrap().push(report.clone());
    }
}
