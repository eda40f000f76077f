//! Contract models for machine settings
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use std::fmt;
use std::str::FromStr;

use super::error::MachineSettingsError;

/// Static definition of one configurable machine parameter
#[derive(Debug, Clone, PartialEq)]
pub struct SettingDefinition {
    /// Descriptive hierarchical grouping (e.g., "process"), never interpreted
    pub namespace: Option<String>,
    /// Unique key of the setting within one machine
    pub identifier: String,
    /// Human-readable description
    pub description: String,
    /// Whether the setting may be left without any value
    pub nullable: bool,
    /// Value type together with its type-specific attributes
    pub kind: SettingKind,
}

/// Type-specific part of a setting definition
#[derive(Debug, Clone, PartialEq)]
pub enum SettingKind {
    String {
        default: Option<String>,
    },
    Boolean {
        default: Option<bool>,
    },
    Number {
        default: Option<f64>,
        /// Canonical unit; bounds are expressed in this unit
        unit: Option<UnitOfMeasure>,
        /// Inclusive lower bound
        min: Option<f64>,
        /// Inclusive upper bound
        max: Option<f64>,
    },
}

/// Data type of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Number,
    Boolean,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SettingDefinition {
    /// String setting without default
    pub fn string(identifier: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(identifier, description, SettingKind::String { default: None })
    }

    /// Boolean setting without default
    pub fn boolean(identifier: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(identifier, description, SettingKind::Boolean { default: None })
    }

    /// Numeric setting without default, unit or bounds
    pub fn number(identifier: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_kind(
            identifier,
            description,
            SettingKind::Number {
                default: None,
                unit: None,
                min: None,
                max: None,
            },
        )
    }

    fn with_kind(
        identifier: impl Into<String>,
        description: impl Into<String>,
        kind: SettingKind,
    ) -> Self {
        Self {
            namespace: None,
            identifier: identifier.into(),
            description: description.into(),
            nullable: false,
            kind,
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the default value. A default whose type does not match the kind is ignored.
    pub fn with_default(mut self, value: impl Into<SettingValue>) -> Self {
        match (&mut self.kind, value.into()) {
            (SettingKind::String { default }, SettingValue::String(v)) => *default = Some(v),
            (SettingKind::Boolean { default }, SettingValue::Boolean(v)) => *default = Some(v),
            (SettingKind::Number { default, .. }, SettingValue::Number(v)) => *default = Some(v),
            _ => {}
        }
        self
    }

    /// Set the canonical unit (numeric settings only)
    pub fn with_unit(mut self, uom: UnitOfMeasure) -> Self {
        if let SettingKind::Number { unit, .. } = &mut self.kind {
            *unit = Some(uom);
        }
        self
    }

    /// Set inclusive bounds (numeric settings only)
    pub fn with_range(mut self, min_value: Option<f64>, max_value: Option<f64>) -> Self {
        if let SettingKind::Number { min, max, .. } = &mut self.kind {
            *min = min_value;
            *max = max_value;
        }
        self
    }

    pub fn data_type(&self) -> DataType {
        match self.kind {
            SettingKind::String { .. } => DataType::String,
            SettingKind::Boolean { .. } => DataType::Boolean,
            SettingKind::Number { .. } => DataType::Number,
        }
    }

    /// Default value, typed to the definition's data type
    pub fn default_value(&self) -> Option<SettingValue> {
        match &self.kind {
            SettingKind::String { default } => default.clone().map(SettingValue::String),
            SettingKind::Boolean { default } => default.map(SettingValue::Boolean),
            SettingKind::Number { default, .. } => default.map(SettingValue::Number),
        }
    }

    pub fn unit_of_measure(&self) -> Option<UnitOfMeasure> {
        match self.kind {
            SettingKind::Number { unit, .. } => unit,
            _ => None,
        }
    }

    pub fn min_value(&self) -> Option<f64> {
        match self.kind {
            SettingKind::Number { min, .. } => min,
            _ => None,
        }
    }

    pub fn max_value(&self) -> Option<f64> {
        match self.kind {
            SettingKind::Number { max, .. } => max,
            _ => None,
        }
    }
}

/// Untyped value carried by a proposal
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    String(String),
    Number(f64),
    Boolean(bool),
    /// Any structured value (array, object) that no setting type accepts
    Other(serde_json::Value),
}

impl SettingValue {
    /// Interpret a JSON value; `null` is the "absent" marker
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Boolean(b)),
            Value::String(s) => Some(Self::String(s)),
            Value::Number(n) => Some(match n.as_f64() {
                Some(f) => Self::Number(f),
                None => Self::Other(Value::Number(n)),
            }),
            other => Some(Self::Other(other)),
        }
    }

    /// JSON rendering; non-finite numbers have no JSON form and become `null`
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Boolean(b) => Value::Bool(*b),
            Self::Number(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Other(v) => v.clone(),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// One entry of a validation / apply request
#[derive(Debug, Clone, PartialEq)]
pub struct ProposedValue {
    /// Identifier of the targeted setting (may be unknown)
    pub identifier: String,
    /// Proposed value; `None` is the explicit "absent" marker
    pub value: Option<SettingValue>,
    /// Unit the value is expressed in
    pub unit_of_measure: Option<UnitOfMeasure>,
}

impl ProposedValue {
    pub fn new(identifier: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        Self {
            identifier: identifier.into(),
            value: Some(value.into()),
            unit_of_measure: None,
        }
    }

    /// Proposal carrying the "absent" marker
    pub fn absent(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            value: None,
            unit_of_measure: None,
        }
    }

    pub fn with_unit(mut self, uom: UnitOfMeasure) -> Self {
        self.unit_of_measure = Some(uom);
        self
    }
}

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    /// Offending setting, or the unknown identifier itself
    pub identifier: String,
    /// Stable category text, bounds interpolated where applicable
    pub message: String,
}

impl ValidationError {
    pub fn new(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.identifier, self.message)
    }
}

/// Closed set of supported units of measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitOfMeasure {
    Celsius,
    Fahrenheit,
    Bar,
    Psi,
    Rpm,
    Rps,
    Second,
    Minute,
}

/// Physical quantity a unit measures; conversion never crosses classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Temperature,
    Pressure,
    RotationRate,
    Duration,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 8] = [
        Self::Celsius,
        Self::Fahrenheit,
        Self::Bar,
        Self::Psi,
        Self::Rpm,
        Self::Rps,
        Self::Second,
        Self::Minute,
    ];

    /// Wire symbol (e.g., "°C")
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Bar => "bar",
            Self::Psi => "psi",
            Self::Rpm => "rpm",
            Self::Rps => "rps",
            Self::Second => "s",
            Self::Minute => "min",
        }
    }

    pub fn class(&self) -> UnitClass {
        match self {
            Self::Celsius | Self::Fahrenheit => UnitClass::Temperature,
            Self::Bar | Self::Psi => UnitClass::Pressure,
            Self::Rpm | Self::Rps => UnitClass::RotationRate,
            Self::Second | Self::Minute => UnitClass::Duration,
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitOfMeasure {
    type Err = MachineSettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|uom| uom.symbol() == s)
            .ok_or_else(|| MachineSettingsError::InvalidUnit {
                unit: s.to_string(),
            })
    }
}

/// Registered machine summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineInfo {
    /// Machine name from the registry file
    pub name: String,
    /// Machine type name (e.g., "InjectionMolder")
    pub machine_type: String,
}
