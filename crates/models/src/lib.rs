//! # Models Crate
//!
//! The model boundary for the prediction chain. The trained bundle ships as
//! opaque serialized artifacts; once deserialized they expose exactly two
//! capabilities, `transform` (label to dense index) and `predict` (dense
//! index to output row). Everything else in the workspace builds on those.
//!
//! ## Main Components
//!
//! - **types**: Input frames, encoded values, and the tagged output row
//! - **artifact**: The fitted encoder and predictor, plus the serialization unit
//! - **error**: Error types for model execution
//!
//! ## Example Usage
//!
//! ```ignore
//! use models::{columns, Encoder, Frame, Predictor, OutputRow};
//!
//! let encoder = Encoder::fit(columns::HERO_NAME, ["Iron Man", "Thor"]);
//! let predictor = Predictor::from_rows(vec![
//!     OutputRow::Text("The Avengers".to_string()),
//!     OutputRow::Text("Thor: Ragnarok".to_string()),
//! ]);
//!
//! let encoded = encoder.transform(&Frame::single(columns::HERO_NAME, "Iron Man"))?;
//! let row = predictor.predict(encoded)?;
//! assert_eq!(row.as_text(), Some("The Avengers"));
//! ```

pub mod artifact;
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use artifact::{Artifact, ArtifactKind, Encoder, Predictor};
pub use error::{ModelError, Result};
pub use types::{columns, Encoded, Frame, OutputRow};
