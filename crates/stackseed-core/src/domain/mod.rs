//! Core domain layer for stackseed.
//!
//! Pure data and rules with no I/O: the declarative project layout, the
//! typed setup configuration, external command descriptions, compose
//! fragments, and the provisioning plan built from the configuration.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or process calls
//! - **Immutable inputs**: plans are built once and only read afterwards

pub mod command;
pub mod compose;
pub mod config;
pub mod entities;
pub mod error;
pub mod provisioning;
pub mod render;

mod validation;

pub use command::{CommandOutcome, CommandSpec, EnvVar};
pub use compose::{COMPOSE_HEADER, ComposeFragment};
pub use config::{KeyLookup, REQUIRED_KEYS, SetupConfig};
pub use entities::{
    DirectoryToCreate, FileToWrite, LayoutEntry, Phase, ProjectLayout, SetupReport, StepReport,
    StepStatus, WriteMode,
};
pub use error::{DomainError, ErrorCategory};
pub use provisioning::{Criticality, ProvisionStep, ProvisioningPlan, StepAction, StepKind};
pub use render::RenderContext;
pub use validation::DomainValidator;
