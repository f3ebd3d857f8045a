//! Conversational coaching session.
//!
//! A session owns the append-only transcript of one open coaching panel
//! and issues one remote call per user turn. It is scoped to that panel:
//! dropped when the panel closes, never shared across panels, never
//! persisted.

use coach_core::fallback::FALLBACK_COACH_REPLY;
use coach_core::{ChatMessage, PerformanceProfile};
use coach_interaction::CoachingProvider;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A turn-based conversation with the remote coach.
///
/// The transcript grows monotonically: the user message of a turn is
/// appended optimistically before the remote call resolves, and it stays
/// in place even when the call fails; the failure is covered by a
/// fallback assistant reply instead. Overlapping turns may interleave
/// their assistant appends; each reply is tied to its user message by
/// transcript position only.
pub struct CoachingSession {
    /// Session ID for this conversation
    session_id: String,
    /// Session creation timestamp (ISO 8601 format)
    created_at: String,
    /// Append-only conversation transcript
    transcript: Arc<RwLock<Vec<ChatMessage>>>,
    /// Remote coaching boundary
    provider: Arc<dyn CoachingProvider>,
}

impl CoachingSession {
    /// Creates a new session with an empty transcript.
    pub fn new(provider: Arc<dyn CoachingProvider>) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            transcript: Arc::new(RwLock::new(Vec::new())),
            provider,
        }
    }

    /// Returns this session's unique identifier.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns the session creation timestamp (ISO 8601 format).
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Returns a snapshot of the transcript.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    /// Returns the number of messages in the transcript.
    pub async fn len(&self) -> usize {
        self.transcript.read().await.len()
    }

    /// Returns true when no message has been exchanged yet.
    pub async fn is_empty(&self) -> bool {
        self.transcript.read().await.is_empty()
    }

    /// Sends one user turn and returns the appended assistant reply.
    ///
    /// Input that is empty after trimming is silently ignored: no message
    /// is appended, no remote call is issued, and `None` is returned.
    ///
    /// Otherwise the user message is appended immediately, the remote call
    /// is issued with the transcript as it stood before this turn, and the
    /// assistant reply (remote on success, [`FALLBACK_COACH_REPLY`] on any
    /// failure) is appended and returned. The optimistic user message is
    /// never rolled back.
    pub async fn send_turn(
        &self,
        text: &str,
        profile: &PerformanceProfile,
    ) -> Option<ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        // Optimistic append. The prior history travels with the request as
        // conversational context; the new message goes in its own field.
        let prior_history = {
            let mut transcript = self.transcript.write().await;
            let prior = transcript.clone();
            transcript.push(ChatMessage::user(trimmed));
            prior
        };

        let reply = match self.provider.chat(trimmed, profile, &prior_history).await {
            Ok(content) => {
                tracing::debug!(session_id = %self.session_id, "received coach reply");
                ChatMessage::assistant(content)
            }
            Err(err) => {
                tracing::warn!(
                    session_id = %self.session_id,
                    error = %err,
                    "chat turn failed, substituting fallback reply"
                );
                ChatMessage::assistant(FALLBACK_COACH_REPLY)
            }
        };

        let mut transcript = self.transcript.write().await;
        transcript.push(reply.clone());
        Some(reply)
    }
}
