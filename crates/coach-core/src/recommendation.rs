//! Coaching recommendation domain model.
//!
//! A generation request produces a full batch of recommendations at once.
//! The previous batch is replaced, never merged; consumers never observe a
//! partial batch.

use serde::{Deserialize, Serialize};

/// The training area a recommendation targets.
///
/// The remote service owns the vocabulary; anything it emits outside the
/// known set deserializes as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    /// Individual skill work (ball handling, shooting form, footwork).
    SkillImprovement,
    /// In-game decision making (shot selection, positioning).
    Strategy,
    /// Conditioning and endurance.
    Fitness,
    /// Focus, composure, game mentality.
    Mental,
    /// Anything the known categories do not cover.
    #[serde(other)]
    Other,
}

/// Display priority of a recommendation.
///
/// Ordinal for display ordering only; batches are shown in the order they
/// were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A single coaching recommendation within a generated batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Unique within one batch, stable for the batch's lifetime.
    pub id: u32,
    /// The training area this recommendation targets.
    pub category: RecommendationCategory,
    /// Short human-readable headline.
    pub title: String,
    /// Explanation of the observation behind the recommendation.
    pub description: String,
    /// Display priority.
    pub priority: Priority,
    /// Drill names, in display order.
    pub exercises: Vec<String>,
    /// Free-text improvement projection.
    pub expected_improvement: String,
}
