//! Common test utilities: a test machine and in-memory settings stores
#![allow(dead_code)]

use async_trait::async_trait;
use machine_settings::domain::{Machine, MachineRegistry, SettingsStore};
use machine_settings::{ProposedValue, SettingDefinition, UnitOfMeasure, ValidationError};
use parking_lot::RwLock;
use std::sync::Arc;

pub const TEST_MACHINE: &str = "TestMachine";

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn print_errors(errors: &[ValidationError]) {
    if errors.is_empty() {
        println!("   ✅ no validation errors");
    }
    for e in errors {
        println!("   ❌ {}", e);
    }
}

/// Records every saved batch
#[derive(Clone, Default)]
pub struct MockSettingsStore {
    saved: Arc<RwLock<Vec<Vec<ProposedValue>>>>,
}

impl MockSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_count(&self) -> usize {
        self.saved.read().len()
    }

    pub fn last_saved(&self) -> Option<Vec<ProposedValue>> {
        self.saved.read().last().cloned()
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn save(&self, settings: &[ProposedValue]) -> anyhow::Result<()> {
        self.saved.write().push(settings.to_vec());
        Ok(())
    }
}

/// Store whose writes always fail
pub struct FailingSettingsStore;

#[async_trait]
impl SettingsStore for FailingSettingsStore {
    async fn save(&self, _settings: &[ProposedValue]) -> anyhow::Result<()> {
        anyhow::bail!("disk full")
    }
}

/// Machine exercising every setting shape
pub struct TestMachine {
    definitions: Vec<SettingDefinition>,
    store: Arc<dyn SettingsStore>,
}

impl TestMachine {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self {
            definitions: test_definitions(),
            store,
        }
    }
}

pub fn test_definitions() -> Vec<SettingDefinition> {
    vec![
        SettingDefinition::boolean("requiredNoDefault", "Required boolean without default")
            .in_namespace("req"),
        SettingDefinition::string("stringWithDefault", "String with default")
            .in_namespace("defaults")
            .with_default("hello"),
        SettingDefinition::number("tempC", "Temperature in °C")
            .in_namespace("numbers")
            .with_unit(UnitOfMeasure::Celsius)
            .with_range(Some(0.0), Some(100.0)),
        SettingDefinition::number("plainNumber", "Number without uom")
            .in_namespace("numbers")
            .with_range(Some(0.0), Some(10.0)),
        SettingDefinition::number("nullableNumber", "Nullable number without default")
            .in_namespace("nullable")
            .nullable(),
    ]
}

#[async_trait]
impl Machine for TestMachine {
    fn machine_type(&self) -> &str {
        TEST_MACHINE
    }

    fn settings(&self) -> &[SettingDefinition] {
        &self.definitions
    }

    async fn apply_settings(
        &self,
        proposals: &[ProposedValue],
    ) -> anyhow::Result<Vec<ValidationError>> {
        let errors = self.verify(proposals);
        if errors.is_empty() {
            self.store.save(proposals).await?;
        }
        Ok(errors)
    }
}

/// Registry with one test machine named `test_1` backed by `store`
pub fn registry_with(store: Arc<dyn SettingsStore>) -> MachineRegistry {
    let mut registry = MachineRegistry::new();
    registry.insert("test_1", Arc::new(TestMachine::new(store)));
    registry
}

/// Proposals that satisfy every definition of `TestMachine`
pub fn valid_proposals() -> Vec<ProposedValue> {
    vec![
        ProposedValue::new("requiredNoDefault", true),
        ProposedValue::new("tempC", 50).with_unit(UnitOfMeasure::Celsius),
        ProposedValue::new("plainNumber", 5),
    ]
}
