//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with machine settings.
//! NO HTTP - direct function calls for performance.

use super::{
    error::MachineSettingsError,
    model::{MachineInfo, ProposedValue, SettingDefinition, ValidationError},
};
use async_trait::async_trait;

/// Machine settings API for inter-module communication
#[async_trait]
pub trait MachineSettingsApi: Send + Sync {
    /// List all registered machines
    async fn list_machines(&self) -> Result<Vec<MachineInfo>, MachineSettingsError>;

    /// Get the setting definitions a machine exposes
    async fn get_settings(&self, machine: &str)
        -> Result<Vec<SettingDefinition>, MachineSettingsError>;

    /// Validate proposals without applying them
    async fn verify_settings(
        &self,
        machine: &str,
        proposals: Vec<ProposedValue>,
    ) -> Result<Vec<ValidationError>, MachineSettingsError>;

    /// Validate and apply proposals; rejected batches return `Validation`
    async fn apply_settings(
        &self,
        machine: &str,
        proposals: Vec<ProposedValue>,
    ) -> Result<(), MachineSettingsError>;
}
