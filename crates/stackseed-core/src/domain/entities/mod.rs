//! Domain entities.

pub mod layout;
pub mod report;

pub use layout::{DirectoryToCreate, FileToWrite, LayoutEntry, ProjectLayout, WriteMode};
pub use report::{Phase, SetupReport, StepReport, StepStatus};
