//! One-shot recommendation generation.

use super::utils::load_profile;
use anyhow::Result;
use coach_application::CoachPanel;
use coach_interaction::HttpCoachingProvider;
use std::sync::Arc;

/// Loads the profile, runs one generation pass, and prints the resulting
/// batch as pretty JSON. A failing remote service still produces a batch:
/// the fixed fallback set.
pub async fn run(profile_path: &str) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let provider = Arc::new(HttpCoachingProvider::try_from_env()?);

    let panel = CoachPanel::new(provider);
    panel.on_profile_changed(profile).await;

    let batch = panel.recommendations().await;
    println!("{}", serde_json::to_string_pretty(&batch)?);

    Ok(())
}
