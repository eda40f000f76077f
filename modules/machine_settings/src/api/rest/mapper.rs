//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract;

// ===== Machine conversions =====

impl From<contract::MachineInfo> for MachineDto {
    fn from(info: contract::MachineInfo) -> Self {
        Self {
            name: info.name,
            machine_type: info.machine_type,
        }
    }
}

// ===== Setting definition conversions =====

impl From<contract::SettingDefinition> for SettingDefinitionDto {
    fn from(definition: contract::SettingDefinition) -> Self {
        Self {
            data_type: definition.data_type().as_str().to_string(),
            default_value: definition.default_value().map(|v| v.to_json()),
            uom: definition.unit_of_measure().map(|u| u.symbol().to_string()),
            min_value: definition.min_value(),
            max_value: definition.max_value(),
            nullable: definition.nullable,
            namespace: definition.namespace,
            identifier: definition.identifier,
            description: definition.description,
        }
    }
}

// ===== Proposal conversions =====

impl TryFrom<ProposedValueDto> for contract::ProposedValue {
    type Error = contract::MachineSettingsError;

    fn try_from(dto: ProposedValueDto) -> Result<Self, Self::Error> {
        let unit_of_measure = dto
            .uom
            .as_deref()
            .map(str::parse::<contract::UnitOfMeasure>)
            .transpose()?;

        Ok(Self {
            identifier: dto.identifier,
            value: dto.value.and_then(contract::SettingValue::from_json),
            unit_of_measure,
        })
    }
}

/// Convert a request body into contract proposals; the first bad unit fails the batch
pub fn proposals_from_request(
    req: ApplySettingsRequest,
) -> Result<Vec<contract::ProposedValue>, contract::MachineSettingsError> {
    req.settings.into_iter().map(TryFrom::try_from).collect()
}

// ===== Validation error conversions =====

impl From<contract::ValidationError> for ValidationErrorDto {
    fn from(error: contract::ValidationError) -> Self {
        Self {
            identifier: error.identifier,
            message: error.message,
        }
    }
}
