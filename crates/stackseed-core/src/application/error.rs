//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external program could not be started.
    #[error("Could not run '{command}': {reason}")]
    CommandSpawn { command: String, reason: String },

    /// An external program ran and reported failure.
    #[error("'{command}' failed with {status}")]
    CommandFailed { command: String, status: String },

    /// A required provisioning step failed; the run was aborted.
    #[error("Required step '{step}' failed: {reason}")]
    StepFailed { step: String, reason: String },

    /// Shared state lock poisoned.
    #[error("Internal lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::CommandSpawn { command, .. } => vec![
                format!("'{command}' could not be started"),
                "Ensure the program is installed and in your PATH".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("'{command}' exited unsuccessfully"),
                "Check the command output above for details".into(),
            ],
            Self::StepFailed { step, .. } => vec![
                format!("The '{step}' step writes files the rest of the setup depends on"),
                "Fix the cause above and re-run; completed steps are safe to repeat".into(),
            ],
            Self::LockPoisoned => vec!["Re-run the command".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. }
            | Self::CommandSpawn { .. }
            | Self::CommandFailed { .. }
            | Self::StepFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
