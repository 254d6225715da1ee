//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports: materialize a layout,
//! run the provisioning plan, run bootstrap commands, and tie the three
//! together into one setup run.

pub mod bootstrap_service;
pub mod provision_service;
pub mod scaffold_service;
pub mod setup_service;

#[cfg(test)]
pub(crate) mod support;

pub use bootstrap_service::BootstrapService;
pub use provision_service::ProvisionService;
pub use scaffold_service::{ScaffoldService, ScaffoldSummary};
pub use setup_service::{SetupOptions, SetupRequest, SetupService};
