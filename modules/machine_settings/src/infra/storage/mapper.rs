//! Entity to model mappers
//!
//! Conversions between persisted records and contract models

use crate::contract::{MachineSettingsError, ProposedValue, SettingValue, UnitOfMeasure};
use super::entity::StoredSetting;

impl TryFrom<&ProposedValue> for StoredSetting {
    type Error = anyhow::Error;

    /// Fails for numbers with no JSON form (infinities) instead of writing `null`
    fn try_from(model: &ProposedValue) -> Result<Self, Self::Error> {
        if let Some(SettingValue::Number(n)) = &model.value {
            if !n.is_finite() {
                anyhow::bail!(
                    "setting '{}' has non-finite value {} that cannot be stored",
                    model.identifier,
                    n
                );
            }
        }

        Ok(Self {
            identifier: model.identifier.clone(),
            value: model.value.as_ref().map(SettingValue::to_json),
            uom: model.unit_of_measure.map(|u| u.symbol().to_string()),
        })
    }
}

impl TryFrom<StoredSetting> for ProposedValue {
    type Error = MachineSettingsError;

    fn try_from(entity: StoredSetting) -> Result<Self, Self::Error> {
        let unit_of_measure = entity
            .uom
            .as_deref()
            .map(str::parse::<UnitOfMeasure>)
            .transpose()?;

        Ok(Self {
            identifier: entity.identifier,
            value: entity.value.and_then(SettingValue::from_json),
            unit_of_measure,
        })
    }
}
