//! Error types for the artifact-store crate.

use thiserror::Error;

use models::ArtifactKind;

use crate::role::ArtifactRole;

/// Errors that can occur while reading one artifact file.
///
/// These never escape `ArtifactStore::open`: a slot that fails to load is
/// logged and recorded absent, and requests needing it fail individually
/// later.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error while reading the artifact file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not a valid serialized artifact
    #[error("malformed artifact: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The file deserialized to the wrong capability for its role
    #[error("{role} file holds a {found}, expected a {expected}")]
    KindMismatch {
        role: ArtifactRole,
        expected: ArtifactKind,
        found: ArtifactKind,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
