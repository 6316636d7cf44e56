//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `meta_analyzer` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing analysis results or running the HTTP server
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use meta_analyzer::config::{Cli, Command};
use meta_analyzer::initialization::init_logger_with;
use meta_analyzer::{server, Analyzer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory, else from next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let analyzer = Analyzer::new(&config).context("Failed to initialize HTTP client")?;

    match cli.command {
        Command::Analyze(args) => {
            let response = analyzer.analyze(&args.url).await;
            let output = if args.pretty {
                serde_json::to_string_pretty(&response)
            } else {
                serde_json::to_string(&response)
            }
            .context("Failed to serialize analysis result")?;

            println!("{output}");
            if !response.is_success() {
                process::exit(1);
            }
            Ok(())
        }
        Command::Serve(args) => server::serve(&args.host, args.port, analyzer)
            .await
            .context("meta_analyzer server failed"),
    }
}
