//! Injection molder machine

use std::path::PathBuf;
use std::sync::Arc;

use crate::contract::{ProposedValue, SettingDefinition, UnitOfMeasure, ValidationError};
use crate::domain::machine::Machine;
use crate::domain::repository::SettingsStore;
use async_trait::async_trait;
use serde::Deserialize;

/// Registry type name
pub const INJECTION_MOLDER: &str = "InjectionMolder";

/// Per-machine configuration from the registry file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InjectionMolderConfig {
    /// Where accepted settings are written
    pub file_path: PathBuf,
}

pub struct InjectionMolder {
    config: InjectionMolderConfig,
    definitions: Vec<SettingDefinition>,
    store: Arc<dyn SettingsStore>,
}

impl InjectionMolder {
    pub fn new(config: InjectionMolderConfig, store: Arc<dyn SettingsStore>) -> Self {
        Self {
            config,
            definitions: definitions(),
            store,
        }
    }
}

fn definitions() -> Vec<SettingDefinition> {
    vec![
        SettingDefinition::string(
            "materialName",
            "Material name / resin grade used for the current job.",
        )
        .in_namespace("material")
        .with_default("PP"),
        SettingDefinition::boolean(
            "guardsClosedRequired",
            "Require safety guards to be closed before cycle start.",
        )
        .in_namespace("safety"),
        SettingDefinition::number("barrelTemperature", "Barrel (melt) temperature setpoint.")
            .in_namespace("process")
            .with_default(230.0)
            .with_unit(UnitOfMeasure::Celsius),
        SettingDefinition::number("moldTemperature", "Mold temperature setpoint.")
            .in_namespace("process")
            .with_default(60.0)
            .with_unit(UnitOfMeasure::Celsius),
        SettingDefinition::number("injectionPressure", "Peak injection pressure limit.")
            .in_namespace("process")
            .with_default(1200.0)
            .with_unit(UnitOfMeasure::Bar),
        SettingDefinition::number("screwSpeed", "Screw rotation speed during plasticizing.")
            .in_namespace("process")
            .with_default(80.0)
            .with_unit(UnitOfMeasure::Rpm),
        SettingDefinition::number(
            "coolingTime",
            "Cooling time before mold opening, no cooling if set to null.",
        )
        .in_namespace("process")
        .nullable()
        .with_unit(UnitOfMeasure::Second),
    ]
}

#[async_trait]
impl Machine for InjectionMolder {
    fn machine_type(&self) -> &str {
        INJECTION_MOLDER
    }

    fn settings(&self) -> &[SettingDefinition] {
        &self.definitions
    }

    async fn apply_settings(
        &self,
        proposals: &[ProposedValue],
    ) -> anyhow::Result<Vec<ValidationError>> {
        let errors = self.verify(proposals);
        if !errors.is_empty() {
            return Ok(errors);
        }

        self.store.save(proposals).await?;
        tracing::debug!(
            file = %self.config.file_path.display(),
            count = proposals.len(),
            "Injection molder settings stored"
        );
        Ok(Vec::new())
    }
}
