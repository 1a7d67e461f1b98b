//! Main entry point for the DeepL node CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deepl_node::cli::commands::{self, Commands, TranslateOptions};
use deepl_node::{DeeplClient, DeeplConfig, DeeplNode};

/// DeepL node - translate pipeline items with DeepL
#[derive(Parser, Debug)]
#[command(name = "deepl-node", version, about, long_about = None)]
struct Args {
    /// API key for DeepL (optional, defaults to DEEPL_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Configuration file (JSON, TOML or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Commands::Describe = args.command {
        return commands::handle_describe();
    }

    let mut config = DeeplConfig::load(args.config.as_deref())?;
    if let Some(api_key) = args.api_key {
        config = config.with_api_key(api_key);
    }
    let node = DeeplNode::new(DeeplClient::new(config)?);

    match args.command {
        Commands::Translate {
            to,
            from,
            text,
            input,
            text_field,
            continue_on_fail,
            output,
        } => {
            let options = TranslateOptions {
                to,
                from,
                text,
                input,
                text_field,
                continue_on_fail,
                output,
            };
            commands::handle_translate(&node, options).await?;
        }
        Commands::Languages => {
            commands::handle_languages(&node).await?;
        }
        Commands::Describe => {}
    }

    Ok(())
}
