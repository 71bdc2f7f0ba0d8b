//! # Prediction Orchestrator
//!
//! This module runs one prediction request end to end:
//! 1. Validate the submitted choice and query
//! 2. Select the primary encoder/predictor pair for the branch
//! 3. Encode the query and predict the movie title
//! 4. Enrich with financial figures from the title predictor (best effort)
//! 5. Enrich with runtime from the runtime predictor (best effort)
//! 6. Enrich with the lead actor on the genre branch (best effort)
//! 7. Return the accumulated recommendation
//!
//! Steps 4-6 never fail a request: each step's outcome is matched
//! explicitly, and a failed or impossible step leaves its fields unset.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use artifact_store::{ArtifactRole, ArtifactStore};
use models::{columns, Frame};

use crate::error::{RecommendError, Result};

/// Which prediction branch a request takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discriminator {
    Hero,
    Genre,
}

impl Discriminator {
    /// Map the submitted form value to a branch. The form offers "Hero" and
    /// "Genre"; any other value takes the genre branch.
    pub fn from_form(choice: &str) -> Self {
        if choice == "Hero" {
            Discriminator::Hero
        } else {
            Discriminator::Genre
        }
    }
}

/// Final prediction returned to the view
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub movie: String,
    pub budget: Option<f64>,
    pub revenue: Option<f64>,
    pub vote_count: Option<f64>,
    pub runtime: Option<f64>,
    pub actor: Option<String>,
}

impl Recommendation {
    /// A recommendation carrying only the predicted movie
    pub fn new(movie: impl Into<String>) -> Self {
        Self {
            movie: movie.into(),
            budget: None,
            revenue: None,
            vote_count: None,
            runtime: None,
            actor: None,
        }
    }
}

/// Main orchestrator that runs the prediction chain against the store
#[derive(Clone)]
pub struct PredictionOrchestrator {
    store: Arc<ArtifactStore>,
}

impl PredictionOrchestrator {
    /// Create an orchestrator over a loaded artifact store
    pub fn new(store: Arc<ArtifactStore>) -> Self {
        Self { store }
    }

    /// Main entry point: run one prediction request.
    ///
    /// # Arguments
    /// * `choice` - Submitted branch selector ("Hero" or "Genre")
    /// * `query` - The hero name or genre string to predict from
    ///
    /// # Returns
    /// The predicted movie plus whatever secondary attributes could be
    /// derived, or the error to show in the error view.
    #[instrument(skip(self))]
    pub fn recommend(&self, choice: &str, query: &str) -> Result<Recommendation> {
        // 1. Validate
        if choice.is_empty() || query.is_empty() {
            return Err(RecommendError::MissingInput);
        }
        let branch = Discriminator::from_form(choice);

        // 2. Primary pair for the branch
        let (encoder_role, predictor_role, column) = match branch {
            Discriminator::Hero => (
                ArtifactRole::HeroEncoder,
                ArtifactRole::HeroPredictor,
                columns::HERO_NAME,
            ),
            Discriminator::Genre => (
                ArtifactRole::GenreEncoder,
                ArtifactRole::GenrePredictor,
                columns::GENRES,
            ),
        };
        let encoder = self
            .store
            .encoder(encoder_role)
            .ok_or(RecommendError::ArtifactUnavailable(encoder_role))?;
        let predictor = self
            .store
            .predictor(predictor_role)
            .ok_or(RecommendError::ArtifactUnavailable(predictor_role))?;

        // 3. Encode the query and predict the movie title
        let encoded = encoder
            .transform(&Frame::single(column, query))
            .map_err(RecommendError::prediction)?;
        let row = predictor
            .predict(encoded)
            .map_err(RecommendError::prediction)?;
        let movie = row.as_text().ok_or_else(|| {
            RecommendError::Prediction("primary output is not a title".to_string())
        })?;
        info!("Predicted movie '{}' for {:?} query '{}'", movie, branch, query);

        let mut recommendation = Recommendation::new(movie);

        // 4-6. Best-effort enrichment from the predicted title
        self.enrich(&mut recommendation, branch);

        Ok(recommendation)
    }

    /// Derive the secondary attributes from the predicted title.
    ///
    /// Nothing in here can fail the request. Every step needs the title
    /// encoder plus its own predictor; whatever is absent or errors leaves
    /// the matching fields unset.
    fn enrich(&self, recommendation: &mut Recommendation, branch: Discriminator) {
        let Some(title_encoder) = self.store.encoder(ArtifactRole::TitleEncoder) else {
            debug!("Title encoder absent, skipping enrichment");
            return;
        };

        // One encode feeds every step; the steps are deterministic, so a
        // failed encode skips them all
        let frame = Frame::single(columns::TITLE, recommendation.movie.as_str());
        let encoded = match title_encoder.transform(&frame) {
            Ok(encoded) => encoded,
            Err(err) => {
                debug!(
                    "Title '{}' not encodable, skipping enrichment: {}",
                    recommendation.movie, err
                );
                return;
            }
        };

        // 4. Financial figures. The title predictor's triple is
        // (budget, revenue, vote count) by position; that ordering is the
        // trained bundle's contract, and reordering it here would mislabel
        // the result page. A scalar row has no figures to take and is
        // skipped without logging.
        if let Some(predictor) = self.store.predictor(ArtifactRole::TitlePredictor) {
            match predictor.predict(encoded) {
                Ok(row) => {
                    if let Some((budget, revenue, vote_count)) = row.as_triple() {
                        recommendation.budget = Some(budget);
                        recommendation.revenue = Some(revenue);
                        recommendation.vote_count = Some(vote_count);
                    }
                }
                Err(err) => debug!("Financial enrichment skipped: {}", err),
            }
        }

        // 5. Runtime: a scalar output, or text that parses as one
        if let Some(predictor) = self.store.predictor(ArtifactRole::RuntimePredictor) {
            match predictor.predict(encoded) {
                Ok(row) => recommendation.runtime = row.as_scalar(),
                Err(err) => debug!("Runtime enrichment skipped: {}", err),
            }
        }

        // 6. Lead actor, genre branch only
        if branch == Discriminator::Genre {
            if let Some(predictor) = self.store.predictor(ArtifactRole::HeroFromTitlePredictor) {
                match predictor.predict(encoded) {
                    Ok(row) => recommendation.actor = row.as_text().map(str::to_string),
                    Err(err) => debug!("Actor enrichment skipped: {}", err),
                }
            }
        }
    }
}
