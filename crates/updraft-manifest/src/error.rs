use thiserror::Error;

/// Fatal manifest resolution failures.
///
/// These abort resolution of the whole manifest; the caller must not persist
/// anything for the affected update. Malformed *individual asset entries* are
/// not errors at this level: they are logged at warn and excluded from the
/// asset list.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is missing required field '{field}'")]
    MissingField { field: &'static str },
    #[error("manifest field '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("manifest field 'id' is not a valid UUID: {0}")]
    InvalidUpdateId(#[from] uuid::Error),
    #[error("runtime version '{0}' lists multiple versions; an embedded update requires exactly one")]
    MultipleRuntimeVersions(String),
    #[error("unknown manifest origin '{0}'")]
    UnknownOrigin(String),
}
