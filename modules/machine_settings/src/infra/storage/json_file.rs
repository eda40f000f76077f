//! JSON file settings store

use std::path::PathBuf;

use crate::contract::ProposedValue;
use crate::domain::repository::SettingsStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::entity::StoredSetting;

/// Writes the accepted batch of one machine to a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes writes to `path`
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read back the stored batch; `None` if nothing was stored yet
    pub async fn load(&self) -> Result<Option<Vec<ProposedValue>>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        let records: Vec<StoredSetting> = serde_json::from_slice(&bytes)
            .with_context(|| format!("malformed settings file {}", self.path.display()))?;

        let settings = records
            .into_iter()
            .map(ProposedValue::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(settings))
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    async fn save(&self, settings: &[ProposedValue]) -> Result<()> {
        let records = settings
            .iter()
            .map(StoredSetting::try_from)
            .collect::<Result<Vec<_>>>()?;
        let json = serde_json::to_vec_pretty(&records)?;

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "Settings file written");
        Ok(())
    }
}
