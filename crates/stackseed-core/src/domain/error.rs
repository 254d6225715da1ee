// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside step reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("missing required configuration keys: {}", keys.join(", "))]
    MissingConfigKeys { keys: Vec<String> },

    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidConfigValue { key: String, reason: String },

    // ========================================================================
    // Layout Errors
    // ========================================================================
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Duplicate path in layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingConfigKeys { keys } => {
                let mut out = vec!["Add the following keys to your setup file:".to_string()];
                out.extend(keys.iter().map(|k| format!("  • {k}")));
                out.push("Run 'stackseed init' to write a sample stackseed.yaml".into());
                out
            }
            Self::InvalidConfigValue { key, reason } => vec![
                format!("Fix '{key}' in your setup file: {reason}"),
                "Validate the file with 'stackseed check'".into(),
            ],
            Self::DuplicatePath { path } | Self::AbsolutePathNotAllowed { path } => vec![
                format!("The blueprint entry '{path}' is malformed"),
                "This is a bug in the built-in blueprint, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingConfigKeys { .. } | Self::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvalidLayout(_)
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_message_lists_every_key() {
        let err = DomainError::MissingConfigKeys {
            keys: vec!["ssl.email".into(), "cloud.aws.access_key".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("ssl.email"));
        assert!(msg.contains("cloud.aws.access_key"));
    }

    #[test]
    fn missing_keys_suggest_init() {
        let err = DomainError::MissingConfigKeys {
            keys: vec!["ssl.email".into()],
        };
        let s = err.suggestions();
        assert!(s.iter().any(|l| l.contains("• ssl.email")));
        assert!(s.iter().any(|l| l.contains("stackseed init")));
    }

    #[test]
    fn config_errors_are_configuration_category() {
        let err = DomainError::InvalidConfigValue {
            key: "database.port".into(),
            reason: "must be non-zero".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
