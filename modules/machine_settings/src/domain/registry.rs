//! Machine registry and machine-type factory
//!
//! The registry is an explicit object built once at startup and handed to the
//! service. Machine kinds are resolved through a factory keyed by type name.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use anyhow::Context;

use crate::contract::{MachineInfo, MachineSettingsError};

use super::machine::Machine;

/// One entry of the machines file: `{ name: { type, config } }`
#[derive(Debug, Clone, PartialEq)]
pub struct MachineSpec {
    pub name: String,
    pub machine_type: String,
    /// Opaque, interpreted by the machine constructor only
    pub config: serde_json::Value,
}

/// Builds a machine from its registry entry
pub type MachineConstructor =
    Box<dyn Fn(&MachineSpec) -> anyhow::Result<Arc<dyn Machine>> + Send + Sync>;

/// Known machine constructors by type name
#[derive(Default)]
pub struct MachineFactory {
    constructors: HashMap<String, MachineConstructor>,
}

impl MachineFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor, replacing any previous one for the same type
    pub fn register<F>(&mut self, machine_type: impl Into<String>, constructor: F)
    where
        F: Fn(&MachineSpec) -> anyhow::Result<Arc<dyn Machine>> + Send + Sync + 'static,
    {
        self.constructors
            .insert(machine_type.into(), Box::new(constructor));
    }

    pub fn build(&self, spec: &MachineSpec) -> anyhow::Result<Arc<dyn Machine>> {
        let constructor = self.constructors.get(&spec.machine_type).ok_or_else(|| {
            MachineSettingsError::UnknownMachineType {
                machine_type: spec.machine_type.clone(),
            }
        })?;

        constructor(spec)
    }
}

/// Machines by name, iterated in name order
#[derive(Default, Clone)]
pub struct MachineRegistry {
    machines: BTreeMap<String, Arc<dyn Machine>>,
}

impl MachineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every machine in `specs`; the first failure aborts the load
    pub fn from_specs(factory: &MachineFactory, specs: &[MachineSpec]) -> anyhow::Result<Self> {
        let mut registry = Self::new();
        for spec in specs {
            let machine = factory
                .build(spec)
                .with_context(|| format!("failed to construct machine '{}'", spec.name))?;
            registry.insert(spec.name.clone(), machine);
        }
        Ok(registry)
    }

    pub fn insert(&mut self, name: impl Into<String>, machine: Arc<dyn Machine>) {
        self.machines.insert(name.into(), machine);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Machine>> {
        self.machines.get(name).cloned()
    }

    pub fn list(&self) -> Vec<MachineInfo> {
        self.machines
            .iter()
            .map(|(name, machine)| MachineInfo {
                name: name.clone(),
                machine_type: machine.machine_type().to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}
