//! Repository traits for data access
//!
//! These traits define the interface for persisting applied settings.
//! Implementations are in infra/storage/json_file.rs

use crate::contract::ProposedValue;
use anyhow::Result;
use async_trait::async_trait;

/// Store for the last accepted settings batch of one machine
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Replace the stored batch with `settings` (last write wins)
    async fn save(&self, settings: &[ProposedValue]) -> Result<()>;
}
