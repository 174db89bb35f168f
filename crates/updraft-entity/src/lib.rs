//! Durable record model for Updraft updates and their assets.
//!
//! This crate defines the storage-bound entity types: one [`UpdateEntity`] per
//! resolved update, an ordered list of [`AssetEntity`] records describing the
//! files the update needs, and the string-identifier newtypes ([`AssetKey`],
//! [`ScopeKey`]) used to deduplicate and locate them.

pub mod asset;
pub mod types;
pub mod update;

pub use asset::AssetEntity;
pub use types::{AssetKey, ScopeKey};
pub use update::{UpdateEntity, UpdateStatus};
