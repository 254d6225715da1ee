//! CLI errors, their suggestions, and the exit codes they map to.
//!
//! Setup-file problems (missing file, bad YAML, missing keys) all exit with
//! 4 so scripts can tell them apart from a failed run.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use stackseed_core::error::StackseedError;

use stackseed_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The project directory argument cannot name a project.
    #[error("Invalid project directory '{}': {reason}", path.display())]
    InvalidProjectDir { path: PathBuf, reason: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// No setup file was found at any of the searched locations.
    #[error("No setup file found")]
    ConfigNotFound { searched: Vec<PathBuf> },

    /// The setup file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `stackseed-core`.
    #[error("Setup failed: {0}")]
    Core(#[from] StackseedError),

    // ── System errors ──────────────────────────────────────────────────────
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user declined the confirmation prompt.
    #[error("Setup cancelled")]
    Cancelled,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::InvalidProjectDir { path, reason } => vec![
                format!("'{}' cannot be used: {}", path.display(), reason),
                "The last path component becomes the project name".into(),
                "Examples: real-estate-website, ./sites/estate, ../estate".into(),
            ],

            Self::ConfigNotFound { searched } => {
                let mut out = vec!["Looked for a setup file at:".to_string()];
                out.extend(searched.iter().map(|p| format!("  • {}", p.display())));
                out.push("Run 'stackseed init' to write a sample stackseed.yaml".into());
                out.push("Or point at one with --config FILE / STACKSEED_CONFIG".into());
                out
            }

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check the YAML syntax and value types in your setup file".into(),
                "Environment overrides use STACKSEED__SECTION__KEY".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                message.clone(),
                "Check that the target directory is writable".into(),
            ],

            Self::Cancelled => vec![
                "Nothing was written".into(),
                "Pass --yes to skip the prompt".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::InvalidProjectDir { .. } => ErrorCategory::UserError,
            Self::ConfigNotFound { .. } => ErrorCategory::Configuration,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] with no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Emit the error as a tracing event, level chosen by category.
    pub fn log(&self) {
        let code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError => {
                tracing::warn!(exit_code = code, error = %self, "stackseed stopped");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = code, error = %self, "stackseed failed");
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "underlying error");
        }
    }
}

/// Exit-code buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments or a declined prompt.
    UserError,
    /// Setup file missing, unreadable, or incomplete.
    Configuration,
    Internal,
}

/// Attach a context message to an I/O failure.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
