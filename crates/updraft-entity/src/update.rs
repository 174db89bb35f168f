use crate::types::ScopeKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Lifecycle status of a stored update.
///
/// This crate only ever records the initial status chosen by the manifest
/// variant that produced the update; later transitions belong to the launcher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UpdateStatus {
    Failed,
    Ready,
    Launched,
    Pending,
    Unused,
    Embedded,
    Development,
}

impl std::fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateStatus::Failed => write!(f, "failed"),
            UpdateStatus::Ready => write!(f, "ready"),
            UpdateStatus::Launched => write!(f, "launched"),
            UpdateStatus::Pending => write!(f, "pending"),
            UpdateStatus::Unused => write!(f, "unused"),
            UpdateStatus::Embedded => write!(f, "embedded"),
            UpdateStatus::Development => write!(f, "development"),
        }
    }
}

/// One fetched-or-embedded update, ready for persistence.
///
/// Constructed once per resolved manifest and never mutated by the resolution
/// subsystem afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateEntity {
    /// Globally unique update id, taken verbatim from the manifest.
    pub id: Uuid,
    pub scope_key: ScopeKey,
    /// Commit/creation time; orders updates newest-first.
    pub commit_time: DateTime<Utc>,
    /// Runtime compatibility tag. Always a single concrete version.
    pub runtime_version: String,
    /// Free-form manifest metadata, copied through unchanged if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    pub status: UpdateStatus,
}

impl UpdateEntity {
    /// Create an update record with no metadata and a `Pending` status.
    pub fn new(
        id: Uuid,
        commit_time: DateTime<Utc>,
        runtime_version: impl Into<String>,
        scope_key: ScopeKey,
    ) -> Self {
        Self {
            id,
            scope_key,
            commit_time,
            runtime_version: runtime_version.into(),
            metadata: None,
            status: UpdateStatus::Pending,
        }
    }
}
