//! Origin dispatch: turn a raw manifest document of a known origin into a
//! resolved [`UpdateManifest`].

use crate::bare::BareUpdateManifest;
use crate::config::UpdatesConfig;
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::str::FromStr;
use updraft_entity::{AssetEntity, UpdateEntity};

/// Where a manifest document came from. Closed set; each origin has exactly
/// one parsing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestOrigin {
    /// Bundled into the application binary at build time.
    Embedded,
}

impl FromStr for ManifestOrigin {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "embedded" | "bare" => Ok(ManifestOrigin::Embedded),
            other => Err(ManifestError::UnknownOrigin(other.to_owned())),
        }
    }
}

impl std::fmt::Display for ManifestOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestOrigin::Embedded => write!(f, "embedded"),
        }
    }
}

/// A resolved manifest of any origin, exposing the uniform contract the rest
/// of the update pipeline consumes.
///
/// One variant per origin so new origins are exhaustively handled at compile
/// time rather than through open-ended subclassing.
#[derive(Debug, Clone)]
pub enum UpdateManifest {
    Bare(BareUpdateManifest),
}

impl UpdateManifest {
    pub fn update_entity(&self) -> &UpdateEntity {
        match self {
            UpdateManifest::Bare(m) => m.update_entity(),
        }
    }

    /// Asset records in manifest order, launch asset first.
    pub fn asset_entities(&self) -> &[AssetEntity] {
        match self {
            UpdateManifest::Bare(m) => m.asset_entities(),
        }
    }

    /// Headers a server instructed the client to send on future requests.
    /// Only remote origins ever carry these.
    pub fn server_defined_headers(&self) -> Option<&Map<String, Value>> {
        match self {
            UpdateManifest::Bare(_) => None,
        }
    }

    /// Server-side filters constraining which updates apply. Only remote
    /// origins ever carry these.
    pub fn manifest_filters(&self) -> Option<&Map<String, Value>> {
        match self {
            UpdateManifest::Bare(_) => None,
        }
    }

    pub fn is_development_mode(&self) -> bool {
        match self {
            UpdateManifest::Bare(_) => false,
        }
    }

    /// Consume the manifest, yielding the records for persistence.
    pub fn into_records(self) -> (UpdateEntity, Vec<AssetEntity>) {
        match self {
            UpdateManifest::Bare(m) => m.into_records(),
        }
    }
}

/// Resolve a raw manifest document into its update and asset records.
///
/// The single-runtime-version precondition is checked here before dispatch so
/// a misconfigured caller gets a diagnostic naming the configuration rather
/// than a failure from deep inside variant construction. The bare variant
/// re-checks it and stays safe to construct directly.
pub fn resolve(
    raw: Value,
    origin: ManifestOrigin,
    config: &UpdatesConfig,
) -> Result<UpdateManifest, ManifestError> {
    config.ensure_single_runtime_version()?;
    match origin {
        ManifestOrigin::Embedded => Ok(UpdateManifest::Bare(BareUpdateManifest::from_json(
            raw, config,
        )?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use updraft_entity::UpdateStatus;

    fn config() -> UpdatesConfig {
        UpdatesConfig::new("proj", "1.0.0")
    }

    #[test]
    fn parses_known_origin_strings() {
        assert_eq!(
            "embedded".parse::<ManifestOrigin>().unwrap(),
            ManifestOrigin::Embedded
        );
        assert_eq!(
            "bare".parse::<ManifestOrigin>().unwrap(),
            ManifestOrigin::Embedded
        );
    }

    #[test]
    fn unknown_origin_is_fatal() {
        let err = "remote-v2".parse::<ManifestOrigin>().unwrap_err();
        assert!(matches!(err, ManifestError::UnknownOrigin(s) if s == "remote-v2"));
    }

    #[test]
    fn resolves_embedded_origin_to_bare_variant() {
        let manifest = resolve(
            json!({
                "id": "11111111-1111-1111-1111-111111111111",
                "commitTime": 1000
            }),
            ManifestOrigin::Embedded,
            &config(),
        )
        .unwrap();
        assert_eq!(manifest.update_entity().status, UpdateStatus::Embedded);
        assert!(manifest.asset_entities()[0].is_launch_asset);
    }

    #[test]
    fn bare_variant_has_no_descriptive_properties() {
        let manifest = resolve(
            json!({
                "id": "11111111-1111-1111-1111-111111111111",
                "commitTime": 1000
            }),
            ManifestOrigin::Embedded,
            &config(),
        )
        .unwrap();
        assert!(manifest.server_defined_headers().is_none());
        assert!(manifest.manifest_filters().is_none());
        assert!(!manifest.is_development_mode());
    }

    #[test]
    fn runtime_version_precondition_checked_before_dispatch() {
        let err = resolve(
            json!({"id": "not even looked at"}),
            ManifestOrigin::Embedded,
            &UpdatesConfig::new("proj", "1.0,2.0"),
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::MultipleRuntimeVersions(_)));
    }

    #[test]
    fn origin_display_roundtrips() {
        let origin: ManifestOrigin = ManifestOrigin::Embedded.to_string().parse().unwrap();
        assert_eq!(origin, ManifestOrigin::Embedded);
    }
}
