use crate::domain::{
    config::{self, KeyLookup, SetupConfig},
    entities::ProjectLayout,
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    /// Every required dotted path must be present in the raw mapping.
    ///
    /// Runs before deserialisation, so a type error elsewhere in the file
    /// never hides the list of missing keys.
    pub fn validate_required_keys(source: &dyn KeyLookup) -> Result<(), DomainError> {
        config::validate_required(source)
    }

    /// Semantic checks on the typed config.
    pub fn validate_setup(setup: &SetupConfig) -> Result<(), DomainError> {
        setup.validate()
    }

    pub fn validate_layout(layout: &ProjectLayout) -> Result<(), DomainError> {
        layout.validate()
    }
}
