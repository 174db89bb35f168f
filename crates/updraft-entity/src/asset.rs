use crate::types::AssetKey;
use serde::{Deserialize, Serialize};

/// One asset (bundle, image, font) needed to run an update.
///
/// Assets are associated with their update by the caller at persistence time;
/// the record itself carries no back-reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetEntity {
    /// Content-addressable key; lets storage detect an asset already on disk
    /// and skip re-downloading it.
    pub key: AssetKey,
    /// File-extension-like classifier (`"js"`, `"png"`, ...).
    #[serde(rename = "type")]
    pub asset_type: String,
    /// True for exactly one asset per update: the JS bundle.
    pub is_launch_asset: bool,
    /// Set only when the asset ships inside the application binary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded_filename: Option<String>,
    /// Platform resource-bundle placement hints. Empty string when the
    /// manifest omits them, never null.
    #[serde(default)]
    pub resources_filename: String,
    #[serde(default)]
    pub resources_folder: String,
    /// Density variants, populated only when the manifest lists more than one
    /// scale for this asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<Vec<f32>>,
}

impl AssetEntity {
    /// Create an asset record with all optional fields absent.
    pub fn new(key: AssetKey, asset_type: impl Into<String>) -> Self {
        Self {
            key,
            asset_type: asset_type.into(),
            is_launch_asset: false,
            embedded_filename: None,
            resources_filename: String::new(),
            resources_folder: String::new(),
            scale: None,
            scales: None,
        }
    }
}
