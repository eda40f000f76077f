//! Machine contract: declare settings, accept validated settings

use crate::contract::{ProposedValue, SettingDefinition, ValidationError};
use async_trait::async_trait;

use super::validation;

/// A configurable physical machine
///
/// Implementations own their setting definitions and decide what "apply"
/// means for them (persisting, pushing to a PLC, ...). The service layer
/// only ever sees this trait.
#[async_trait]
pub trait Machine: Send + Sync {
    /// Machine type name as used in the registry file
    fn machine_type(&self) -> &str;

    /// Ordered setting definitions; the machine's capability contract
    fn settings(&self) -> &[SettingDefinition];

    /// Validate proposals against this machine's definitions
    fn verify(&self, proposals: &[ProposedValue]) -> Vec<ValidationError> {
        validation::verify(self.settings(), proposals)
    }

    /// Validate and, when the batch is clean, apply it.
    ///
    /// Returns the validation errors when the batch is rejected; in that case
    /// nothing has been applied. `Err` is reserved for failures of the apply
    /// side effect itself.
    async fn apply_settings(
        &self,
        proposals: &[ProposedValue],
    ) -> anyhow::Result<Vec<ValidationError>>;
}
