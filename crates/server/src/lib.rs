//! Server crate for the ReelOracle prediction front-end.
//!
//! This crate contains the orchestrator that runs the prediction chain
//! against the artifact store, and the HTTP boundary that serves it: the
//! input form, the recommend endpoint, and the rendered result and error
//! views.

pub mod error;
pub mod http;
pub mod orchestrator;
pub mod views;

pub use error::RecommendError;
pub use http::{build_router, AppState, RecommendForm};
pub use orchestrator::{Discriminator, PredictionOrchestrator, Recommendation};
