//! The bare/embedded manifest variant: describes the update compiled into the
//! application binary at build time.

use crate::config::UpdatesConfig;
use crate::error::ManifestError;
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;
use updraft_entity::{AssetEntity, AssetKey, UpdateEntity, UpdateStatus};
use uuid::Uuid;

/// Filename of the bundle compiled into the application binary.
pub const BARE_BUNDLE_FILENAME: &str = "app.bundle";

/// A parsed bare manifest with its records built eagerly at construction.
///
/// The raw document is retained for diagnostics; nothing reads it again after
/// construction.
#[derive(Debug, Clone)]
pub struct BareUpdateManifest {
    raw: Value,
    update: UpdateEntity,
    assets: Vec<AssetEntity>,
}

/// Shape of one entry in the manifest's `assets` array. Entries that fail to
/// deserialize into this are skipped, not fatal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BareAssetEntry {
    #[serde(rename = "type")]
    asset_type: String,
    packager_hash: String,
    #[serde(default)]
    resources_filename: String,
    #[serde(default)]
    resources_folder: String,
    scale: Option<f64>,
    #[serde(default)]
    scales: Vec<f64>,
}

impl BareUpdateManifest {
    /// Parse a bare manifest document into its update and asset records.
    ///
    /// Fatal on a missing/invalid `id` or `commitTime` and on a
    /// multi-version runtime configuration. Malformed entries in `assets`
    /// are logged and skipped.
    pub fn from_json(raw: Value, config: &UpdatesConfig) -> Result<Self, ManifestError> {
        config.ensure_single_runtime_version()?;

        let id_value = raw
            .get("id")
            .ok_or(ManifestError::MissingField { field: "id" })?;
        let raw_id = id_value
            .as_str()
            .ok_or_else(|| ManifestError::InvalidField {
                field: "id",
                reason: "expected a UUID string".to_owned(),
            })?;
        let id = Uuid::parse_str(raw_id)?;

        let commit_value = raw
            .get("commitTime")
            .ok_or(ManifestError::MissingField { field: "commitTime" })?;
        let commit_ms = commit_value
            .as_i64()
            .ok_or_else(|| ManifestError::InvalidField {
                field: "commitTime",
                reason: "expected integer epoch milliseconds".to_owned(),
            })?;
        let commit_time = Utc.timestamp_millis_opt(commit_ms).single().ok_or_else(|| {
            ManifestError::InvalidField {
                field: "commitTime",
                reason: "epoch milliseconds out of range".to_owned(),
            }
        })?;

        let mut update = UpdateEntity::new(
            id,
            commit_time,
            config.runtime_version(),
            config.scope_key().clone(),
        );
        update.metadata = raw.get("metadata").and_then(Value::as_object).cloned();
        update.status = UpdateStatus::Embedded;

        let assets = build_asset_entities(&raw, id);

        Ok(Self {
            raw,
            update,
            assets,
        })
    }

    /// The raw parsed manifest document.
    pub fn raw_json(&self) -> &Value {
        &self.raw
    }

    pub fn update_entity(&self) -> &UpdateEntity {
        &self.update
    }

    /// Asset records in manifest order, launch asset first.
    pub fn asset_entities(&self) -> &[AssetEntity] {
        &self.assets
    }

    /// Consume the manifest, yielding the records for persistence.
    pub fn into_records(self) -> (UpdateEntity, Vec<AssetEntity>) {
        (self.update, self.assets)
    }
}

/// Derive the launch asset's key from the manifest's unsanitized `id` string.
///
/// The raw string keeps any formatting quirks from the original document, so
/// the key stays stable even where UUID normalization would change the
/// representation. The parsed id is the fallback when the raw field is gone.
fn bundle_key(raw: &Value, id: Uuid) -> AssetKey {
    let raw_id = raw
        .get("id")
        .and_then(Value::as_str)
        .map_or_else(|| id.to_string(), str::to_owned);
    AssetKey::new(format!("bundle-{raw_id}"))
}

fn build_asset_entities(raw: &Value, id: Uuid) -> Vec<AssetEntity> {
    let mut assets = Vec::new();
    let mut seen: HashSet<AssetKey> = HashSet::new();

    let mut bundle = AssetEntity::new(bundle_key(raw, id), "js");
    bundle.is_launch_asset = true;
    bundle.embedded_filename = Some(BARE_BUNDLE_FILENAME.to_owned());
    seen.insert(bundle.key.clone());
    assets.push(bundle);

    let Some(entries) = raw.get("assets").and_then(Value::as_array) else {
        return assets;
    };
    for entry in entries {
        let parsed: BareAssetEntry = match serde_json::from_value(entry.clone()) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("could not read asset from manifest: {e}");
                continue;
            }
        };
        let key = AssetKey::new(format!("{}.{}", parsed.packager_hash, parsed.asset_type));
        if !seen.insert(key.clone()) {
            warn!("duplicate asset key '{key}' in manifest; keeping first occurrence");
            continue;
        }
        let mut asset = AssetEntity::new(key, parsed.asset_type);
        asset.resources_filename = parsed.resources_filename;
        asset.resources_folder = parsed.resources_folder;
        // A single scale leaves nothing to disambiguate later, so neither
        // field is stored.
        if parsed.scales.len() > 1 {
            asset.scale = parsed.scale.map(|s| s as f32);
            asset.scales = Some(parsed.scales.iter().map(|s| *s as f32).collect());
        }
        assets.push(asset);
    }
    assets
}
