//! Domain layer - business logic and services

pub mod machine;
pub mod machines;
pub mod registry;
pub mod repository;
pub mod service;
pub mod units;
pub mod validation;

pub use machine::Machine;
pub use registry::{MachineFactory, MachineRegistry, MachineSpec};
pub use repository::SettingsStore;
pub use service::Service;
pub use validation::verify;
