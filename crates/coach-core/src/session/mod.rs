//! Conversation domain module.
//!
//! Contains the message types that make up a coaching conversation
//! transcript. The transcript itself is owned by the application layer's
//! `CoachingSession`; this module only defines what a message is.

mod message;

// Re-export public API
pub use message::{ChatMessage, MessageRole};
