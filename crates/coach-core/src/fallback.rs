//! Deterministic fallback content.
//!
//! When the remote coaching service does not produce a usable result, the
//! engine substitutes the content defined here instead of surfacing the
//! failure. The substitution is an explicit branch in the application
//! layer, not an exception handler, so it can be tested directly.
//!
//! The fallback batch is identical across calls and independent of the
//! profile that triggered generation.

use crate::recommendation::{Priority, Recommendation, RecommendationCategory};

/// The assistant reply substituted when a chat turn fails remotely.
pub const FALLBACK_COACH_REPLY: &str = "I'm here to help you improve your basketball skills! \
Ask me about shooting, dribbling, defense, or any specific techniques you'd like to work on.";

/// Returns the fixed three-recommendation batch shown when generation fails.
pub fn fallback_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: 1,
            category: RecommendationCategory::SkillImprovement,
            title: "Improve Ball Handling".to_string(),
            description: "Based on your recent games, focus on dribbling drills to improve \
                          your ball control."
                .to_string(),
            priority: Priority::High,
            exercises: vec![
                "Cone weaving".to_string(),
                "Two-ball dribbling".to_string(),
                "Stationary pound dribbles".to_string(),
            ],
            expected_improvement: "15-20% improvement in 2 weeks".to_string(),
        },
        Recommendation {
            id: 2,
            category: RecommendationCategory::Strategy,
            title: "Optimize Shot Selection".to_string(),
            description: "You're taking too many contested 3-pointers. Focus on higher \
                          percentage shots."
                .to_string(),
            priority: Priority::Medium,
            exercises: vec![
                "Mid-range shooting".to_string(),
                "Catch and shoot drills".to_string(),
                "Shot chart analysis".to_string(),
            ],
            expected_improvement: "8-12% shooting improvement".to_string(),
        },
        Recommendation {
            id: 3,
            category: RecommendationCategory::Fitness,
            title: "Enhance Stamina".to_string(),
            description: "Your performance drops in the 4th quarter. Improve cardiovascular \
                          endurance."
                .to_string(),
            priority: Priority::High,
            exercises: vec![
                "Interval running".to_string(),
                "Court sprints".to_string(),
                "Plyometric training".to_string(),
            ],
            expected_improvement: "25% stamina increase in 3 weeks".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_has_exactly_three_recommendations() {
        assert_eq!(fallback_recommendations().len(), 3);
    }

    #[test]
    fn test_batch_is_deterministic() {
        assert_eq!(fallback_recommendations(), fallback_recommendations());
    }

    #[test]
    fn test_fixed_fields_match_literal_set() {
        let batch = fallback_recommendations();

        assert_eq!(batch[0].id, 1);
        assert_eq!(batch[0].category, RecommendationCategory::SkillImprovement);
        assert_eq!(batch[0].priority, Priority::High);
        assert_eq!(batch[0].expected_improvement, "15-20% improvement in 2 weeks");

        assert_eq!(batch[1].id, 2);
        assert_eq!(batch[1].category, RecommendationCategory::Strategy);
        assert_eq!(batch[1].priority, Priority::Medium);
        assert_eq!(batch[1].expected_improvement, "8-12% shooting improvement");

        assert_eq!(batch[2].id, 3);
        assert_eq!(batch[2].category, RecommendationCategory::Fitness);
        assert_eq!(batch[2].priority, Priority::High);
        assert_eq!(
            batch[2].expected_improvement,
            "25% stamina increase in 3 weeks"
        );
    }

    #[test]
    fn test_ids_are_unique_within_batch() {
        let batch = fallback_recommendations();
        let mut ids: Vec<u32> = batch.iter().map(|rec| rec.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), batch.len());
    }

    #[test]
    fn test_fallback_reply_invites_topics() {
        for topic in ["shooting", "dribbling", "defense"] {
            assert!(FALLBACK_COACH_REPLY.contains(topic));
        }
    }
}
