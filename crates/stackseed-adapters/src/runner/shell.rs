//! Runs external programs with `std::process::Command`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use stackseed_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandOutcome, CommandSpec},
    error::StackseedResult,
};

/// Production runner. Blocks until the child exits.
#[derive(Debug, Clone, Copy)]
pub struct ShellRunner {
    inherit_output: bool,
}

impl ShellRunner {
    /// Child output goes straight to the terminal.
    pub fn new() -> Self {
        Self {
            inherit_output: true,
        }
    }

    /// Discard child stdout; stderr is kept and logged at DEBUG on failure.
    pub fn captured() -> Self {
        Self {
            inherit_output: false,
        }
    }

    /// True when `tool --version` can be spawned and exits successfully.
    pub fn is_installed(tool: &str) -> bool {
        Command::new(resolve_program(tool))
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> StackseedResult<CommandOutcome> {
        debug!(cwd = %cwd.display(), "Running {command}");

        let mut process = Command::new(program_path(&command.program, cwd));
        process
            .args(&command.args)
            .current_dir(cwd)
            .envs(command.env.iter().map(|var| (&var.key, &var.value)));

        let spawn_error = |e: std::io::Error| ApplicationError::CommandSpawn {
            command: command.command_line(),
            reason: e.to_string(),
        };

        let status = if self.inherit_output {
            process.status().map_err(spawn_error)?
        } else {
            let output = process
                .stdout(Stdio::null())
                .stderr(Stdio::piped())
                .output()
                .map_err(spawn_error)?;
            if !output.status.success() {
                debug!(
                    stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                    "{} failed",
                    command.program
                );
            }
            output.status
        };

        trace!(?status, "{} exited", command.program);
        Ok(CommandOutcome {
            status_code: status.code(),
            success: status.success(),
        })
    }
}

/// npm and npx ship as `.cmd` shims on Windows.
fn resolve_program(program: &str) -> String {
    if cfg!(windows) && matches!(program, "npm" | "npx") {
        format!("{program}.cmd")
    } else {
        program.to_string()
    }
}

/// Relative programs with a directory part (`venv/bin/pip`) resolve
/// against the command's working directory and are made absolute.
fn program_path(program: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(program);
    if path.is_relative() && path.components().count() > 1 {
        let joined = cwd.join(path);
        std::path::absolute(&joined).unwrap_or(joined)
    } else {
        PathBuf::from(resolve_program(program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellRunner::captured()
            .run(&CommandSpec::new("stackseed-no-such-program"), dir.path())
            .unwrap_err();

        assert!(err.to_string().contains("Could not run 'stackseed-no-such-program'"));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ShellRunner::captured();

        let ok = runner.run(&CommandSpec::new("true"), dir.path()).unwrap();
        assert!(ok.success);

        let failed = runner
            .run(&CommandSpec::new("sh").args(["-c", "exit 3"]), dir.path())
            .unwrap();
        assert_eq!(failed, CommandOutcome::failure(3));
    }

    #[test]
    fn nested_relative_program_resolves_in_cwd() {
        let cwd = Path::new("site/ml-service");
        let pip = program_path("venv/bin/pip", cwd);
        assert!(pip.is_absolute());
        assert!(pip.ends_with("site/ml-service/venv/bin/pip"));
        assert_eq!(program_path("git", cwd), PathBuf::from(resolve_program("git")));
    }

    #[cfg(unix)]
    #[test]
    fn env_and_cwd_reach_the_child() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CommandSpec::new("sh")
            .args(["-c", "printf %s \"$STACKSEED_TEST\" > out.txt"])
            .secret_env("STACKSEED_TEST", "hidden");

        ShellRunner::captured().run(&cmd, dir.path()).unwrap();

        let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(written, "hidden");
    }
}
