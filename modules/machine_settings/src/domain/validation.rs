//! Validation of proposed setting values against setting definitions

use std::collections::{HashMap, HashSet};

use crate::contract::{
    ProposedValue, SettingDefinition, SettingKind, SettingValue, UnitOfMeasure, ValidationError,
};

use super::units;

pub const MSG_DUPLICATE: &str = "Duplicate setting identifier provided";
pub const MSG_UNKNOWN: &str = "Unknown setting identifier";
pub const MSG_MISSING: &str = "Missing value (no default and not nullable)";
pub const MSG_UNIT_NOT_NUMERIC: &str = "Unit of measure is only allowed for numeric settings";
pub const MSG_NOT_STRING: &str = "Value must be a string";
pub const MSG_NOT_BOOLEAN: &str = "Value must be a boolean";
pub const MSG_NOT_NUMBER: &str = "Value must be a number";
pub const MSG_UNIT_NOT_SUPPORTED: &str = "Unit of measure is not supported for this setting";
pub const MSG_UNIT_NOT_CONVERTIBLE: &str = "Unit of measure is not convertible to required unit";

/// Check a batch of proposals against a machine's definitions.
///
/// Every applicable error is collected. An empty result means the batch is
/// acceptable and every non-nullable definition has a provided or default value.
///
/// Order: duplicates (by first occurrence), unknown identifiers (by proposal
/// order), then per-definition findings in definition order.
pub fn verify(
    definitions: &[SettingDefinition],
    proposals: &[ProposedValue],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let known: HashSet<&str> = definitions.iter().map(|d| d.identifier.as_str()).collect();

    // One error per duplicated identifier, however often it repeats
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for proposal in proposals {
        let id = proposal.identifier.as_str();
        if !seen.insert(id) && reported.insert(id) {
            errors.push(ValidationError::new(id, MSG_DUPLICATE));
        }
    }

    // First occurrence wins for every known identifier
    let mut provided: HashMap<&str, &ProposedValue> = HashMap::new();
    for proposal in proposals {
        let id = proposal.identifier.as_str();
        if !known.contains(id) {
            errors.push(ValidationError::new(id, MSG_UNKNOWN));
            continue;
        }
        provided.entry(id).or_insert(proposal);
    }

    for definition in definitions {
        let proposal = provided.get(definition.identifier.as_str()).copied();
        verify_definition(definition, proposal, &mut errors);
    }

    errors
}

fn verify_definition(
    definition: &SettingDefinition,
    proposal: Option<&ProposedValue>,
    errors: &mut Vec<ValidationError>,
) {
    let id = definition.identifier.as_str();
    let provided_value = proposal.and_then(|p| p.value.clone());
    let provided_uom = proposal.and_then(|p| p.unit_of_measure);

    let effective = provided_value.or_else(|| definition.default_value());

    if effective.is_none() && !definition.nullable {
        errors.push(ValidationError::new(id, MSG_MISSING));
        return;
    }

    // Fires even when a nullable setting ends up without a value
    if !matches!(definition.kind, SettingKind::Number { .. }) && provided_uom.is_some() {
        errors.push(ValidationError::new(id, MSG_UNIT_NOT_NUMERIC));
    }

    let Some(value) = effective else {
        return;
    };

    match &definition.kind {
        SettingKind::String { .. } => {
            if !matches!(value, SettingValue::String(_)) {
                errors.push(ValidationError::new(id, MSG_NOT_STRING));
            }
        }
        SettingKind::Boolean { .. } => {
            if !matches!(value, SettingValue::Boolean(_)) {
                errors.push(ValidationError::new(id, MSG_NOT_BOOLEAN));
            }
        }
        SettingKind::Number { unit, min, max, .. } => {
            let number = match value {
                SettingValue::Number(n) if !n.is_nan() => n,
                _ => {
                    errors.push(ValidationError::new(id, MSG_NOT_NUMBER));
                    return;
                }
            };

            let Some(canonical) = reconcile_unit(id, number, provided_uom, *unit, errors) else {
                return;
            };

            if let Some(min) = min {
                if canonical < *min {
                    errors.push(ValidationError::new(id, format!("Value must be >= {min}")));
                }
            }
            if let Some(max) = max {
                if canonical > *max {
                    errors.push(ValidationError::new(id, format!("Value must be <= {max}")));
                }
            }
        }
    }
}

/// Express `value` in the setting's unit. `None` means an error was recorded
/// and the range check must be skipped.
fn reconcile_unit(
    id: &str,
    value: f64,
    provided: Option<UnitOfMeasure>,
    setting: Option<UnitOfMeasure>,
    errors: &mut Vec<ValidationError>,
) -> Option<f64> {
    match (provided, setting) {
        (None, _) => Some(value),
        (Some(_), None) => {
            errors.push(ValidationError::new(id, MSG_UNIT_NOT_SUPPORTED));
            None
        }
        (Some(from), Some(to)) => {
            let converted = units::convert(value, from, to);
            if converted.is_none() {
                errors.push(ValidationError::new(id, MSG_UNIT_NOT_CONVERTIBLE));
            }
            converted
        }
    }
}
