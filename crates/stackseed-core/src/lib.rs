//! Stackseed Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the stackseed
//! project bootstrapper, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stackseed-cli (CLI)            │
//! │   (config loading, output, exit codes)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Setup, Scaffold, Provision, Bootstrap)│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Observer)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stackseed-adapters (Infrastructure)   │
//! │ (LocalFilesystem, ShellRunner, blueprint)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectLayout, SetupConfig, Plan)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stackseed_core::prelude::*;
//! # fn adapters() -> (Arc<dyn Filesystem>, Arc<dyn CommandRunner>) { unimplemented!() }
//! # fn layout() -> ProjectLayout { unimplemented!() }
//!
//! let config = SetupConfig::sample();
//! let (filesystem, runner) = adapters();
//!
//! let report = SetupService::new(filesystem, runner)
//!     .run(SetupRequest {
//!         project: config.project.name.clone(),
//!         layout: layout(),
//!         plan: ProvisioningPlan::from_config(&config).unwrap(),
//!         bootstrap: Vec::new(),
//!         options: SetupOptions::default(),
//!     })
//!     .unwrap();
//! println!("{} steps succeeded", report.succeeded());
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BootstrapService, ProvisionService, ScaffoldService, ScaffoldSummary, SetupOptions,
        SetupRequest, SetupService,
        ports::{CommandRunner, Filesystem, NoopObserver, SetupObserver},
    };
    pub use crate::domain::{
        CommandOutcome, CommandSpec, DomainValidator, KeyLookup, Phase, ProjectLayout,
        ProvisioningPlan, SetupConfig, SetupReport, StepReport, StepStatus,
    };
    pub use crate::error::{StackseedError, StackseedResult};
}
