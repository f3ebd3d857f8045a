//! Interactive coaching chat loop.

use super::utils::load_profile;
use anyhow::{Context, Result};
use coach_application::CoachingSession;
use coach_core::PerformanceProfile;
use coach_interaction::HttpCoachingProvider;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Runs a line-based chat session on stdin until EOF or `/quit`.
///
/// Empty lines are ignored without a remote call, mirroring the panel
/// behavior. The session lives exactly as long as this loop.
pub async fn run(profile_path: Option<&str>) -> Result<()> {
    let profile = match profile_path {
        Some(path) => load_profile(path)?,
        None => PerformanceProfile::new(),
    };

    let provider = Arc::new(HttpCoachingProvider::try_from_env()?);
    let session = CoachingSession::new(provider);

    println!("CourtCoach chat - ask about shooting, dribbling, defense. /quit to exit.");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("you> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        line.clear();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if bytes_read == 0 {
            break;
        }

        let input = line.trim();
        if input == "/quit" {
            break;
        }

        if let Some(reply) = session.send_turn(input, &profile).await {
            println!("coach> {}", reply.content);
        }
    }

    Ok(())
}
