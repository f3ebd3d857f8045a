//! Recommendation Generation Service
//!
//! Derives a prioritized batch of coaching recommendations from a player's
//! performance profile via the remote provider. Remote failures are
//! absorbed here: the caller always receives a complete batch.

use coach_core::fallback::fallback_recommendations;
use coach_core::{PerformanceProfile, Recommendation};
use coach_interaction::CoachingProvider;
use std::sync::Arc;

/// Service producing recommendation batches from performance profiles.
pub struct RecommendationService {
    provider: Arc<dyn CoachingProvider>,
}

impl RecommendationService {
    /// Creates a new service over the given provider.
    pub fn new(provider: Arc<dyn CoachingProvider>) -> Self {
        Self { provider }
    }

    /// Generates a recommendation batch for the given profile.
    ///
    /// Issues exactly one provider call. On success the response batch is
    /// returned unaltered; on any failure the fixed fallback batch is
    /// substituted instead. The substitution is this `match`: no error
    /// ever propagates to the caller, so the coaching surface never
    /// appears broken.
    pub async fn generate(&self, profile: &PerformanceProfile) -> Vec<Recommendation> {
        match self.provider.recommendations(profile).await {
            Ok(batch) => {
                tracing::debug!(count = batch.len(), "generated recommendation batch");
                batch
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "recommendation generation failed, substituting fallback batch"
                );
                fallback_recommendations()
            }
        }
    }
}
