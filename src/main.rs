mod agent;
mod config;
mod instrumentation;
mod llm;
mod search;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

use agent::Curator;
use config::Config;

const DEFAULT_TOPIC: &str = "artificial intelligence";

#[derive(Parser)]
#[command(name = "news-curator", about = "Sequential news curation agents over web search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose per-stage output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Curate news for a single topic
    Curate {
        /// The topic to search for
        topic: String,
    },
    /// Prompt for topics interactively
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let curator = Curator::new(&config)?;

    match cli.command {
        Commands::Curate { topic } => match normalize_topic(&topic) {
            Some(topic) => curate(&curator, topic, cli.verbose).await?,
            None => eprintln!("Please enter a topic."),
        },
        Commands::Interactive => {
            let stdin = std::io::stdin();
            loop {
                print!("Enter news topic [{}]: ", DEFAULT_TOPIC);
                std::io::stdout().flush()?;

                let mut line = String::new();
                if stdin.read_line(&mut line)? == 0 {
                    break;
                }
                let topic = normalize_topic(&line).unwrap_or(DEFAULT_TOPIC);

                if let Err(e) = curate(&curator, topic, cli.verbose).await {
                    eprintln!("An error occurred: {:#}", e);
                }
            }
        }
    }

    Ok(())
}

async fn curate(curator: &Curator, topic: &str, verbose: bool) -> Result<()> {
    let run_log = curator
        .run(topic, verbose, |stage| {
            println!("[{}/3] {}...", stage.step(), stage.label());
        })
        .await?;

    println!("\nNews summary: {}\n", run_log.topic);
    println!("{}\n", run_log.final_summary);
    println!("{}", run_log.summary());

    Ok(())
}

/// Blank input never reaches the pipeline; the collaborators are only
/// called for a non-empty trimmed topic.
fn normalize_topic(input: &str) -> Option<&str> {
    let topic = input.trim();
    if topic.is_empty() {
        None
    } else {
        Some(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_topics_are_rejected_before_any_call() {
        assert_eq!(normalize_topic(""), None);
        assert_eq!(normalize_topic("   \n"), None);
        assert_eq!(normalize_topic("  artificial intelligence \n"), Some("artificial intelligence"));
    }
}
