//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    MachineInfo, MachineSettingsApi, MachineSettingsError, ProposedValue, SettingDefinition,
    ValidationError,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MachineSettingsApi for NativeClient {
    async fn list_machines(&self) -> Result<Vec<MachineInfo>, MachineSettingsError> {
        Ok(self.service.list_machines())
    }

    async fn get_settings(
        &self,
        machine: &str,
    ) -> Result<Vec<SettingDefinition>, MachineSettingsError> {
        self.service.get_settings(machine)
    }

    async fn verify_settings(
        &self,
        machine: &str,
        proposals: Vec<ProposedValue>,
    ) -> Result<Vec<ValidationError>, MachineSettingsError> {
        self.service.verify_settings(machine, &proposals)
    }

    async fn apply_settings(
        &self,
        machine: &str,
        proposals: Vec<ProposedValue>,
    ) -> Result<(), MachineSettingsError> {
        self.service.apply_settings(machine, &proposals).await
    }
}
