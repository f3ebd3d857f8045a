//! Coaching panel controller.
//!
//! The presentation-facing state holder for one open coaching panel: the
//! active view, the generation-in-progress flag, the current
//! recommendation batch, and the conversation session. Rendering code
//! reads this state through the observers; it never owns state of its own.

use crate::coaching_session::CoachingSession;
use crate::recommendation_service::RecommendationService;
use coach_core::{ChatMessage, PanelView, PerformanceProfile, Recommendation};
use coach_interaction::CoachingProvider;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// State owner for one coaching panel.
///
/// Each panel owns exactly one `CoachPanel`; nothing here is shared across
/// panels, so no cross-panel locking exists. Overlapping generation passes
/// are last-writer-wins on the visible batch. That is an accepted race, not
/// a correctness violation, since a newer pass always supersedes the batch
/// anyway.
pub struct CoachPanel {
    /// Active view (recommendations or chat)
    view: RwLock<PanelView>,
    /// True for the duration of exactly one generation call
    generating: AtomicBool,
    /// Currently displayed recommendation batch
    batch: RwLock<Vec<Recommendation>>,
    /// Profile the panel currently describes
    profile: RwLock<Option<PerformanceProfile>>,
    /// Recommendation generation service
    service: RecommendationService,
    /// Conversation session scoped to this panel
    session: CoachingSession,
}

impl CoachPanel {
    /// Creates a panel over the given provider, with an empty batch and an
    /// empty conversation.
    pub fn new(provider: Arc<dyn CoachingProvider>) -> Self {
        Self {
            view: RwLock::new(PanelView::default()),
            generating: AtomicBool::new(false),
            batch: RwLock::new(Vec::new()),
            profile: RwLock::new(None),
            service: RecommendationService::new(provider.clone()),
            session: CoachingSession::new(provider),
        }
    }

    /// Stores a new profile and regenerates recommendations automatically.
    ///
    /// A profile equal to the stored one is not an identity change and
    /// does not retrigger generation; [`CoachPanel::request_refresh`] is
    /// the explicit path for that.
    pub async fn on_profile_changed(&self, profile: PerformanceProfile) {
        {
            let mut stored = self.profile.write().await;
            if stored.as_ref() == Some(&profile) {
                return;
            }
            *stored = Some(profile.clone());
        }
        self.regenerate(&profile).await;
    }

    /// Regenerates recommendations for the stored profile.
    ///
    /// A no-op when no profile has been set yet.
    pub async fn request_refresh(&self) {
        let profile = self.profile.read().await.clone();
        match profile {
            Some(profile) => self.regenerate(&profile).await,
            None => tracing::debug!("refresh requested before any profile was set"),
        }
    }

    async fn regenerate(&self, profile: &PerformanceProfile) {
        self.generating.store(true, Ordering::SeqCst);
        let batch = self.service.generate(profile).await;
        // Atomic replacement: consumers see the old batch or the new one,
        // never a partial mix. Last writer wins across overlapping passes.
        *self.batch.write().await = batch;
        self.generating.store(false, Ordering::SeqCst);
    }

    /// Submits one chat turn with the stored profile as context.
    ///
    /// Before any profile is set, an empty profile is sent so the chat
    /// surface stays available.
    pub async fn submit_message(&self, text: &str) -> Option<ChatMessage> {
        let profile = self.profile.read().await.clone().unwrap_or_default();
        self.session.send_turn(text, &profile).await
    }

    /// Switches the active view.
    pub async fn set_view(&self, view: PanelView) {
        *self.view.write().await = view;
    }

    /// Returns the active view.
    pub async fn view(&self) -> PanelView {
        *self.view.read().await
    }

    /// True while a generation call is outstanding.
    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }

    /// Returns a snapshot of the current recommendation batch.
    pub async fn recommendations(&self) -> Vec<Recommendation> {
        self.batch.read().await.clone()
    }

    /// Returns a snapshot of the conversation transcript.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.session.transcript().await
    }

    /// The conversation session owned by this panel.
    pub fn session(&self) -> &CoachingSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use coach_core::MessageRole;
    use coach_core::fallback::fallback_recommendations;
    use coach_interaction::ProviderError;
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    struct CountingProvider {
        fail: bool,
        generation_calls: AtomicUsize,
        chat_profiles: Mutex<Vec<PerformanceProfile>>,
    }

    impl CountingProvider {
        fn succeeding() -> Self {
            Self {
                fail: false,
                generation_calls: AtomicUsize::new(0),
                chat_profiles: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                generation_calls: AtomicUsize::new(0),
                chat_profiles: Mutex::new(Vec::new()),
            }
        }

        fn generation_count(&self) -> usize {
            self.generation_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CoachingProvider for CountingProvider {
        async fn recommendations(
            &self,
            profile: &PerformanceProfile,
        ) -> Result<Vec<Recommendation>, ProviderError> {
            self.generation_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ProviderError::Request {
                    message: "connection refused".to_string(),
                    is_retryable: true,
                });
            }
            // Echo the profile size into the batch id so tests can tell
            // which profile produced it
            Ok(vec![Recommendation {
                id: profile.len() as u32,
                category: coach_core::RecommendationCategory::Strategy,
                title: "Run the floor".to_string(),
                description: "Beat your defender down the court.".to_string(),
                priority: coach_core::Priority::Medium,
                exercises: vec![],
                expected_improvement: "More transition baskets".to_string(),
            }])
        }

        async fn chat(
            &self,
            _message: &str,
            profile: &PerformanceProfile,
            _history: &[ChatMessage],
        ) -> Result<String, ProviderError> {
            self.chat_profiles.lock().unwrap().push(profile.clone());
            Ok("Keep working.".to_string())
        }
    }

    #[tokio::test]
    async fn test_profile_change_triggers_one_generation() {
        let provider = Arc::new(CountingProvider::succeeding());
        let panel = CoachPanel::new(provider.clone());

        let profile = PerformanceProfile::new().with_indicator("recent_scores", json!([15]));
        panel.on_profile_changed(profile.clone()).await;

        assert_eq!(provider.generation_count(), 1);
        assert_eq!(panel.recommendations().await.len(), 1);
        assert!(!panel.is_generating());

        // Same identity: no retrigger
        panel.on_profile_changed(profile).await;
        assert_eq!(provider.generation_count(), 1);
    }

    #[tokio::test]
    async fn test_changed_profile_identity_retriggers() {
        let provider = Arc::new(CountingProvider::succeeding());
        let panel = CoachPanel::new(provider.clone());

        panel
            .on_profile_changed(PerformanceProfile::new().with_indicator("a", json!(1)))
            .await;
        panel
            .on_profile_changed(
                PerformanceProfile::new()
                    .with_indicator("a", json!(1))
                    .with_indicator("b", json!(2)),
            )
            .await;

        assert_eq!(provider.generation_count(), 2);
        // Last batch wins: id echoes the two-indicator profile.
        assert_eq!(panel.recommendations().await[0].id, 2);
    }

    #[tokio::test]
    async fn test_refresh_requires_a_profile() {
        let provider = Arc::new(CountingProvider::succeeding());
        let panel = CoachPanel::new(provider.clone());

        panel.request_refresh().await;
        assert_eq!(provider.generation_count(), 0);

        panel
            .on_profile_changed(PerformanceProfile::new().with_indicator("a", json!(1)))
            .await;
        panel.request_refresh().await;
        assert_eq!(provider.generation_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_generation_shows_fallback_batch() {
        let panel = CoachPanel::new(Arc::new(CountingProvider::failing()));

        panel
            .on_profile_changed(PerformanceProfile::new().with_indicator("a", json!(1)))
            .await;

        assert_eq!(panel.recommendations().await, fallback_recommendations());
        assert!(!panel.is_generating());
    }

    #[tokio::test]
    async fn test_view_switching() {
        let panel = CoachPanel::new(Arc::new(CountingProvider::succeeding()));

        assert_eq!(panel.view().await, PanelView::Recommendations);
        panel.set_view(PanelView::Chat).await;
        assert_eq!(panel.view().await, PanelView::Chat);
    }

    #[tokio::test]
    async fn test_submit_message_sends_stored_profile() {
        let provider = Arc::new(CountingProvider::succeeding());
        let panel = CoachPanel::new(provider.clone());

        // Without a profile, an empty one keeps the chat surface available.
        panel.submit_message("Hello coach").await.unwrap();

        let profile = PerformanceProfile::new().with_indicator("shooting_pct", json!(41.2));
        panel.on_profile_changed(profile.clone()).await;
        panel.submit_message("Now with context").await.unwrap();

        let seen = provider.chat_profiles.lock().unwrap();
        assert!(seen[0].is_empty());
        assert_eq!(seen[1], profile);

        let transcript = panel.transcript().await;
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0].role, MessageRole::User);
    }
}
