//! Fitted artifacts: the label encoder and the prediction table.
//!
//! These are the two capabilities the trained bundle exposes:
//! - **Encoder**: `transform` a known label into a dense index
//! - **Predictor**: `predict` the output row for a dense index
//!
//! Both are plain lookup structures once deserialized; there is no training
//! code anywhere in this workspace.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::types::{Encoded, Frame, OutputRow};

/// Normalize a label the way the fitting run did: trimmed, inner whitespace
/// collapsed, lowercased. Applied at fit and at lookup so user input
/// tolerates casing and spacing differences.
fn normalize(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// =============================================================================
// Encoder
// =============================================================================

/// A fitted label encoder: maps known labels in one column to dense indices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encoder {
    column: String,
    vocabulary: HashMap<String, usize>,
}

impl Encoder {
    /// Fit an encoder over a set of labels, assigning dense indices in
    /// iteration order
    pub fn fit<I, S>(column: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocabulary = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| (normalize(label.as_ref()), index))
            .collect();
        Self {
            column: column.into(),
            vocabulary,
        }
    }

    /// Column this encoder was fitted on
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Number of labels in the fitted vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Transform a single-row frame into its dense encoding.
    ///
    /// # Returns
    /// The encoded index, or an error if the frame's column doesn't match
    /// or the label was never fitted.
    pub fn transform(&self, frame: &Frame) -> Result<Encoded> {
        if frame.column() != self.column {
            return Err(ModelError::ColumnMismatch {
                expected: self.column.clone(),
                found: frame.column().to_string(),
            });
        }
        self.vocabulary
            .get(&normalize(frame.value()))
            .copied()
            .map(Encoded)
            .ok_or_else(|| ModelError::UnknownLabel(frame.value().to_string()))
    }
}

// =============================================================================
// Predictor
// =============================================================================

/// A fitted prediction table: one output row per dense index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predictor {
    rows: Vec<OutputRow>,
}

impl Predictor {
    /// Build a predictor from its output table
    pub fn from_rows(rows: Vec<OutputRow>) -> Self {
        Self { rows }
    }

    /// Number of rows in the output table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the output row for an encoded input
    pub fn predict(&self, input: Encoded) -> Result<OutputRow> {
        self.rows
            .get(input.index())
            .cloned()
            .ok_or(ModelError::IndexOutOfRange {
                index: input.index(),
                rows: self.rows.len(),
            })
    }
}

// =============================================================================
// Artifact
// =============================================================================

/// Which capability an artifact provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Encoder,
    Predictor,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Encoder => write!(f, "encoder"),
            ArtifactKind::Predictor => write!(f, "predictor"),
        }
    }
}

/// The unit of serialization: every artifact file holds exactly one of these
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Artifact {
    Encoder(Encoder),
    Predictor(Predictor),
}

impl Artifact {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::Encoder(_) => ArtifactKind::Encoder,
            Artifact::Predictor(_) => ArtifactKind::Predictor,
        }
    }

    pub fn as_encoder(&self) -> Option<&Encoder> {
        match self {
            Artifact::Encoder(encoder) => Some(encoder),
            Artifact::Predictor(_) => None,
        }
    }

    pub fn as_predictor(&self) -> Option<&Predictor> {
        match self {
            Artifact::Predictor(predictor) => Some(predictor),
            Artifact::Encoder(_) => None,
        }
    }
}
