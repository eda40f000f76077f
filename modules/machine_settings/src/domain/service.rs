//! Domain service - business logic orchestration

use crate::contract::{
    MachineInfo, MachineSettingsError, ProposedValue, SettingDefinition, ValidationError,
};
use super::machine::Machine;
use super::registry::MachineRegistry;
use std::sync::Arc;

/// Domain service for machine settings
pub struct Service {
    registry: Arc<MachineRegistry>,
}

impl Service {
    /// Create a new service instance
    pub fn new(registry: Arc<MachineRegistry>) -> Self {
        Self { registry }
    }

    /// List all registered machines
    pub fn list_machines(&self) -> Vec<MachineInfo> {
        self.registry.list()
    }

    /// Get the setting definitions of a machine
    pub fn get_settings(&self, name: &str) -> Result<Vec<SettingDefinition>, MachineSettingsError> {
        Ok(self.machine(name)?.settings().to_vec())
    }

    /// Validate proposals against a machine without applying them
    pub fn verify_settings(
        &self,
        name: &str,
        proposals: &[ProposedValue],
    ) -> Result<Vec<ValidationError>, MachineSettingsError> {
        Ok(self.machine(name)?.verify(proposals))
    }

    /// Validate and apply proposals to a machine
    ///
    /// A rejected batch is returned as `Validation` and nothing is applied.
    pub async fn apply_settings(
        &self,
        name: &str,
        proposals: &[ProposedValue],
    ) -> Result<(), MachineSettingsError> {
        let machine = self.machine(name)?;

        let errors = machine.apply_settings(proposals).await.map_err(|e| {
            tracing::error!(machine = name, error = ?e, "Failed to apply settings");
            MachineSettingsError::Internal
        })?;

        if !errors.is_empty() {
            tracing::warn!(
                machine = name,
                error_count = errors.len(),
                "Settings rejected by validation"
            );
            return Err(MachineSettingsError::Validation { errors });
        }

        tracing::info!(
            machine = name,
            count = proposals.len(),
            "Settings applied"
        );
        Ok(())
    }

    // ===== Helper Methods =====

    fn machine(&self, name: &str) -> Result<Arc<dyn Machine>, MachineSettingsError> {
        self.registry
            .get(name)
            .ok_or_else(|| MachineSettingsError::MachineNotFound {
                name: name.to_string(),
            })
    }
}
