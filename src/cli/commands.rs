//! CLI commands implementation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::enhancer::{ContentEnhancer, TargetAudience};
use crate::nlp::NlpEngine;
use crate::server;

#[derive(Parser)]
#[command(name = "prosecheck")]
#[command(about = "Writing-quality diagnostics for draft text")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the analysis web server
    Serve {
        /// Address to bind (host:port)
        #[arg(long, env = "PROSECHECK_BIND")]
        bind: Option<String>,
    },

    /// Analyze text once and print the report as JSON
    Analyze {
        /// Text to analyze
        text: Option<String>,
        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load();

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                settings.bind = bind;
            }
            server::serve(&settings).await
        }
        Commands::Analyze { text, file } => cmd_analyze(text, file),
    }
}

fn cmd_analyze(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<()> {
    let content = match (text, file) {
        (_, Some(path)) => std::fs::read_to_string(&path)?,
        (Some(text), None) => text,
        (None, None) => anyhow::bail!("provide text to analyze, or --file"),
    };

    let engine = NlpEngine::new();
    let enhancer = ContentEnhancer::new(&engine, content, TargetAudience::default())?;
    let report = enhancer.overall_analysis();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
