use anyhow::{Context, Result};
use coach_core::PerformanceProfile;
use std::io::Read;

/// Loads a performance profile from a JSON file, or from stdin when the
/// path is "-".
pub fn load_profile(path: &str) -> Result<PerformanceProfile> {
    let content = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read profile from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {path}"))?
    };

    PerformanceProfile::from_json_str(&content).context("Failed to parse profile JSON")
}
