//! External command descriptions.
//!
//! Commands are opaque to the core: a program, its arguments, a working
//! directory relative to the project root, and the messages to log on
//! success or failure.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;


const MASK: &str = "****";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
    pub secret: bool,
}

impl fmt::Display for EnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.secret {
            write!(f, "{}={MASK}", self.key)
        } else {
            write!(f, "{}={}", self.key, self.value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Relative to the project root; empty means the root itself.
    pub working_dir: PathBuf,
    #[serde(skip)]
    pub env: Vec<EnvVar>,
    pub success_message: String,
    pub failure_message: String,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            success_message: format!("{program} finished"),
            failure_message: format!("{program} failed"),
            program,
            args: Vec::new(),
            working_dir: PathBuf::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push(EnvVar {
            key: key.into(),
            value: value.into(),
            secret: false,
        });
        self
    }

    /// Environment variable whose value is masked in every rendering.
    pub fn secret_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push(EnvVar {
            key: key.into(),
            value: value.into(),
            secret: true,
        });
        self
    }

    pub fn messages(mut self, success: impl Into<String>, failure: impl Into<String>) -> Self {
        self.success_message = success.into();
        self.failure_message = failure.into();
        self
    }

    /// `program arg1 arg2`, without environment.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.env {
            write!(f, "{var} ")?;
        }
        write!(f, "{}", self.command_line())?;
        if !self.working_dir.as_os_str().is_empty() {
            write!(f, " (in {})", self.working_dir.display())?;
        }
        Ok(())
    }
}

/// Exit information for a command that was spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// `None` when the process was terminated by a signal.
    pub status_code: Option<i32>,
    pub success: bool,
}

impl CommandOutcome {
    pub const fn success() -> Self {
        Self {
            status_code: Some(0),
            success: true,
        }
    }

    pub const fn failure(code: i32) -> Self {
        Self {
            status_code: Some(code),
            success: false,
        }
    }

    pub fn describe(&self) -> String {
        match self.status_code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".into(),
        }
    }
}
