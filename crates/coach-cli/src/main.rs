use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "courtcoach")]
#[command(about = "CourtCoach CLI - AI basketball coaching engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recommendation batch from a performance profile
    Recommend {
        /// Path to a profile JSON file, or "-" to read it from stdin
        #[arg(long)]
        profile: String,
    },
    /// Chat with the AI coach interactively
    Chat {
        /// Optional path to a profile JSON file sent as context
        #[arg(long)]
        profile: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend { profile } => commands::recommend::run(&profile).await?,
        Commands::Chat { profile } => commands::chat::run(profile.as_deref()).await?,
    }

    Ok(())
}
