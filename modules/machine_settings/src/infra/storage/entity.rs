//! Persisted record shapes

use serde::{Deserialize, Serialize};

/// One accepted setting as written to the machine's settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSetting {
    pub identifier: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    /// Unit symbol (e.g., "°C")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,
}
