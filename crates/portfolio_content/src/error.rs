use thiserror::Error;

/// Failure loading profile content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Manifest JSON did not match the profile schema.
    #[error("invalid profile manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    /// Manifest declared a schema version this build does not understand.
    #[error("unsupported profile schema version {found} (expected {expected})")]
    SchemaVersion {
        /// Version this build reads.
        expected: u32,
        /// Version found in the manifest.
        found: u32,
    },
}
