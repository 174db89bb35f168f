//! Manifest resolution for Updraft: the boundary between untrusted manifest
//! JSON and the durable update database.
//!
//! A manifest document describes one update: a unique id, a commit time, a
//! runtime compatibility tag, optional metadata, and a list of referenced
//! assets. This crate parses a document of a given origin into one
//! `UpdateEntity` plus an ordered list of `AssetEntity` records (launch asset
//! first), ready to hand to the storage layer.
//!
//! Resolution is a pure, synchronous transformation: no I/O, no shared state.
//! Independent manifests may be resolved concurrently without coordination.
//! The only side effect is a `tracing` warning per skipped malformed asset
//! entry.

pub mod bare;
pub mod config;
pub mod error;
pub mod resolver;

pub use bare::{BareUpdateManifest, BARE_BUNDLE_FILENAME};
pub use config::UpdatesConfig;
pub use error::ManifestError;
pub use resolver::{resolve, ManifestOrigin, UpdateManifest};
