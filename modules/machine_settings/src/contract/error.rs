//! Contract error types for machine settings
//!
//! These errors are transport-agnostic and used for inter-module communication.

use super::model::ValidationError;

/// Machine settings domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MachineSettingsError {
    /// No machine registered under this name
    #[error("Machine '{name}' not found")]
    MachineNotFound { name: String },

    /// Registry entry references a machine type nobody can construct
    #[error("Machine type {machine_type} not found")]
    UnknownMachineType { machine_type: String },

    /// Unit symbol outside the supported set
    #[error("Invalid unit of measure: {unit}")]
    InvalidUnit { unit: String },

    /// Proposed settings were rejected; nothing was applied
    #[error("Settings validation failed ({} errors)", errors.len())]
    Validation { errors: Vec<ValidationError> },

    /// Internal error
    #[error("Internal error")]
    Internal,
}
