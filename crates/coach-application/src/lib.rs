//! Application layer for CourtCoach.
//!
//! This crate provides the services that coordinate the domain models with
//! the remote coaching boundary: recommendation generation with its
//! fallback policy, the conversational coaching session, and the panel
//! controller consumed by presentation code.

pub mod coaching_session;
pub mod panel_controller;
pub mod recommendation_service;

pub use coaching_session::CoachingSession;
pub use panel_controller::CoachPanel;
pub use recommendation_service::RecommendationService;
