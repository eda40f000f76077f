//! Machine Settings Module
//!
//! Physical machines describe their configurable parameters as setting
//! definitions. Proposed values are validated against those definitions
//! (presence, type, unit of measure, range, duplicates) before a machine
//! applies them.

// Public exports
pub mod contract;
pub use contract::{
    client::MachineSettingsApi, error::MachineSettingsError, DataType, MachineInfo, ProposedValue,
    SettingDefinition, SettingKind, SettingValue, UnitClass, UnitOfMeasure, ValidationError,
};

pub mod module;
pub use module::MachineSettingsModule;

pub mod config;
pub use config::Config;

pub mod domain;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod infra;
