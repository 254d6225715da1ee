//! Application layer for stackseed.
//!
//! This layer contains:
//! - **Services**: use case orchestration (scaffold, provision, bootstrap, setup)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rules of its own. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    BootstrapService, ProvisionService, ScaffoldService, ScaffoldSummary, SetupOptions,
    SetupRequest, SetupService,
};

pub use ports::{CommandRunner, Filesystem, NoopObserver, SetupObserver};

pub use error::ApplicationError;
