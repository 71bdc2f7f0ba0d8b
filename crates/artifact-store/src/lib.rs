//! # Artifact Store Crate
//!
//! This crate loads the eight serialized prediction artifacts from disk and
//! serves them as an immutable, role-keyed in-memory registry.
//!
//! ## Main Components
//!
//! - **role**: The eight artifact roles and their fixed file names
//! - **store**: Best-effort loading and role-keyed lookup
//! - **error**: Error types for artifact loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use artifact_store::{ArtifactRole, ArtifactStore};
//! use std::path::Path;
//!
//! // Load whatever is present; absent artifacts fail requests later,
//! // not startup
//! let store = ArtifactStore::open(Path::new("."));
//!
//! if let Some(encoder) = store.encoder(ArtifactRole::HeroEncoder) {
//!     println!("hero vocabulary holds {} labels", encoder.vocabulary_len());
//! }
//! ```

// Public modules
pub mod error;
pub mod role;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use role::ArtifactRole;
pub use store::ArtifactStore;
