//! Concrete machine kinds

pub mod injection_molder;

pub use injection_molder::{InjectionMolder, InjectionMolderConfig, INJECTION_MOLDER};
