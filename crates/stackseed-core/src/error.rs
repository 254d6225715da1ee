//! Unified error handling for stackseed core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for stackseed core operations.
#[derive(Debug, Error, Clone)]
pub enum StackseedError {
    /// Errors from the domain layer (invalid config, malformed layout).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, steps).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl StackseedError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad or incomplete setup file.
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StackseedResult<T> = Result<T, StackseedError>;
