//! Machines file loader
//!
//! The machines file maps machine names to a machine type and an opaque
//! per-machine configuration:
//!
//! ```json
//! { "molder_1": { "type": "InjectionMolder", "config": { "file_path": "molder_1.json" } } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::MachineSpec;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MachineEntry {
    #[serde(rename = "type")]
    machine_type: String,
    #[serde(default)]
    config: serde_json::Value,
}

/// Parse machines-file JSON into specs, ordered by machine name
pub fn parse_machine_specs(json: &str) -> Result<Vec<MachineSpec>> {
    let entries: BTreeMap<String, MachineEntry> =
        serde_json::from_str(json).context("invalid machines file")?;

    Ok(entries
        .into_iter()
        .map(|(name, entry)| MachineSpec {
            name,
            machine_type: entry.machine_type,
            config: entry.config,
        })
        .collect())
}

/// Read and parse the machines file at `path`
pub async fn load_machine_specs(path: &Path) -> Result<Vec<MachineSpec>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read machines file {}", path.display()))?;

    let specs = parse_machine_specs(&json)
        .with_context(|| format!("failed to parse machines file {}", path.display()))?;

    tracing::info!(path = %path.display(), machines = specs.len(), "Machines file loaded");
    Ok(specs)
}
