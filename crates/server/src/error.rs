//! Error types for the server crate.

use thiserror::Error;

use artifact_store::ArtifactRole;

/// Errors surfaced to the request boundary.
///
/// Enrichment failures never appear here: they degrade to omitted fields
/// inside the orchestrator.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The request is missing the choice or the query
    #[error("missing input")]
    MissingInput,

    /// A primary artifact needed by this branch is not loaded
    #[error("{0} not available on server")]
    ArtifactUnavailable(ArtifactRole),

    /// The primary prediction itself failed
    #[error("prediction failed: {0}")]
    Prediction(String),
}

impl RecommendError {
    /// Wrap any displayable failure from the primary prediction path
    pub(crate) fn prediction(err: impl std::fmt::Display) -> Self {
        RecommendError::Prediction(err.to_string())
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
