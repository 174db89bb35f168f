use crate::error::ManifestError;
use updraft_entity::ScopeKey;

/// Fixed inputs supplied by the embedding application: which project updates
/// belong to and which runtime version the installed binary is compatible
/// with. Never read from the manifest itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatesConfig {
    scope_key: ScopeKey,
    runtime_version: String,
}

impl UpdatesConfig {
    pub fn new(scope_key: impl Into<ScopeKey>, runtime_version: impl Into<String>) -> Self {
        Self {
            scope_key: scope_key.into(),
            runtime_version: runtime_version.into(),
        }
    }

    pub fn scope_key(&self) -> &ScopeKey {
        &self.scope_key
    }

    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }

    /// Embedded manifests are only ever resolved in a single-runtime-version
    /// context; a comma-separated list here is a caller misconfiguration.
    pub fn ensure_single_runtime_version(&self) -> Result<(), ManifestError> {
        if self.runtime_version.contains(',') {
            return Err(ManifestError::MultipleRuntimeVersions(
                self.runtime_version.clone(),
            ));
        }
        Ok(())
    }
}
