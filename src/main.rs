// Scaffolder actions: GitHub
//
// Runs a scaffolder action from JSON input and prints its outputs and
// warnings as JSON. Logging goes to stderr and follows RUST_LOG.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scaffolder_github::{GITHUB_REPO_CREATE, ScaffolderConfig, default_registry};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

#[derive(Debug, Parser)]
#[command(name = "scaffolder-github", version, about)]
struct Cli {
    /// Scaffolder config file with GitHub integrations
    #[arg(long, short, env = "SCAFFOLDER_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run an action with JSON input read from a file or stdin
    Run {
        /// Action identifier
        #[arg(long, default_value = GITHUB_REPO_CREATE)]
        action: String,

        /// Input JSON file; stdin when omitted
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
    /// Print the input and output schemas of registered actions
    Schema {
        /// Only this action
        action: Option<String>,
    },
}

async fn read_input(path: Option<&PathBuf>) -> Result<serde_json::Value> {
    let raw = match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input {}", path.display()))?,
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read input from stdin")?;
            raw
        }
    };
    serde_json::from_str(&raw).context("Input is not valid JSON")
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScaffolderConfig::load(path).await?,
        None => ScaffolderConfig::default(),
    };
    let registry = default_registry(config);

    match cli.command {
        Command::Run { action, input } => {
            let input = read_input(input.as_ref()).await?;
            let report = registry.run(&action, input).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Schema { action } => {
            let descriptors = match action {
                Some(id) => vec![
                    registry
                        .describe(&id)
                        .with_context(|| format!("Unknown action: {id}"))?,
                ],
                None => registry
                    .ids()
                    .filter_map(|id| registry.describe(id))
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&descriptors)?);
        }
    }

    Ok(())
}
