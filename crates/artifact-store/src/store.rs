//! Artifact loading and role-keyed lookup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use models::{Artifact, Encoder, Predictor};

use crate::error::{Result, StoreError};
use crate::role::ArtifactRole;

/// Immutable registry of the deployed artifacts.
///
/// Built once at startup with [`ArtifactStore::open`] and then shared
/// read-only for the process lifetime. Loading is best-effort per slot: a
/// missing, unreadable, or mis-shaped file leaves that slot absent instead
/// of failing the whole store, and requests that need the absent artifact
/// fail individually at prediction time.
#[derive(Debug)]
pub struct ArtifactStore {
    artifacts: HashMap<ArtifactRole, Artifact>,
}

impl ArtifactStore {
    /// Creates a new, empty ArtifactStore
    pub fn empty() -> Self {
        Self {
            artifacts: HashMap::new(),
        }
    }

    /// Load every role from its fixed file name under `dir`.
    ///
    /// Each slot either loads or is recorded absent with a warning; `open`
    /// itself always succeeds.
    pub fn open(dir: &Path) -> Self {
        let mut store = Self::empty();

        for role in ArtifactRole::ALL {
            let path = dir.join(role.file_name());
            match load_artifact(&path, role) {
                Ok(artifact) => {
                    debug!("Loaded {} from {}", role, path.display());
                    store.artifacts.insert(role, artifact);
                }
                Err(err) => {
                    warn!("{} unavailable ({}): {}", role, path.display(), err);
                }
            }
        }

        info!(
            "Artifact store ready: {}/{} artifacts loaded from {}",
            store.loaded_count(),
            ArtifactRole::ALL.len(),
            dir.display()
        );
        store
    }

    /// Insert an artifact into a role slot
    pub fn insert(&mut self, role: ArtifactRole, artifact: Artifact) {
        self.artifacts.insert(role, artifact);
    }

    // Getters - these return references into the store, which outlives
    // every request

    /// Get the artifact loaded for a role
    pub fn get(&self, role: ArtifactRole) -> Option<&Artifact> {
        self.artifacts.get(&role)
    }

    /// Get a role's artifact as an encoder, if it is one
    pub fn encoder(&self, role: ArtifactRole) -> Option<&Encoder> {
        self.get(role).and_then(Artifact::as_encoder)
    }

    /// Get a role's artifact as a predictor, if it is one
    pub fn predictor(&self, role: ArtifactRole) -> Option<&Predictor> {
        self.get(role).and_then(Artifact::as_predictor)
    }

    pub fn is_loaded(&self, role: ArtifactRole) -> bool {
        self.artifacts.contains_key(&role)
    }

    /// Number of roles with a loaded artifact
    pub fn loaded_count(&self) -> usize {
        self.artifacts.len()
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::empty()
    }
}

/// Read and deserialize one artifact file, checking it against the role's
/// expected kind
fn load_artifact(path: &Path, role: ArtifactRole) -> Result<Artifact> {
    let bytes = fs::read(path)?;
    let artifact: Artifact = serde_json::from_slice(&bytes)?;

    if artifact.kind() != role.kind() {
        return Err(StoreError::KindMismatch {
            role,
            expected: role.kind(),
            found: artifact.kind(),
        });
    }
    Ok(artifact)
}
