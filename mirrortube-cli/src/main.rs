// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! mirrortube CLI - browse Piped-compatible mirrors from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Trending feed (default command)
//! mirrortube
//!
//! # Trending for another region
//! mirrortube trending --region DE
//!
//! # Search, or resolve a YouTube URL directly
//! mirrortube search "lofi hip hop"
//! mirrortube search "https://youtu.be/jfKfPfyJRdk"
//!
//! # Negotiate a playable stream for one video
//! mirrortube stream jfKfPfyJRdk
//!
//! # Probe every configured mirror
//! mirrortube mirrors
//!
//! # Use your own mirrors
//! mirrortube --instance https://my.mirror trending
//! ```

mod commands;
mod instances;
mod output;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use mirrortube_api::{ApiError, MirrorClient};
use mirrortube_fetch::{EndpointPool, FetchSettings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{mirrors, search, stream, trending};
use output::TextFormatter;

// ============================================================================
// CLI Definition
// ============================================================================

/// mirrortube CLI - mirror-pool video browsing.
#[derive(Parser)]
#[command(name = "mirrortube")]
#[command(about = "Browse Piped-compatible video mirrors with automatic failover")]
#[command(long_about = r"
mirrortube talks to a pool of interchangeable Piped-compatible mirrors.
Requests go to whichever mirror currently responds; a dead mirror is
skipped automatically and the first working one becomes preferred.

Examples:
  mirrortube                          # Trending feed (US)
  mirrortube trending --region DE     # Trending for another region
  mirrortube search 'lofi hip hop'    # Video search
  mirrortube stream jfKfPfyJRdk       # Pick one playable stream
  mirrortube mirrors                  # Probe every configured mirror
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'trending' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Mirror base-URL to use; repeat for an ordered pool. Overrides the
    /// MIRRORTUBE_INSTANCES environment variable and the built-in list.
    #[arg(long, global = true)]
    pub instance: Vec<String>,

    /// Per-attempt request timeout in seconds.
    #[arg(long, default_value = "30", global = true)]
    pub timeout: u64,

    /// Skip the startup probe and go straight to the first mirror.
    #[arg(long, global = true)]
    pub no_probe: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the trending feed (default if no command specified).
    #[command(visible_alias = "t")]
    Trending(trending::TrendingArgs),

    /// Search for videos, or resolve a YouTube URL.
    #[command(visible_alias = "s")]
    Search(search::SearchArgs),

    /// Negotiate a playable stream for one video.
    Stream(stream::StreamArgs),

    /// Probe every configured mirror and report health.
    #[command(visible_alias = "m")]
    Mirrors,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// Every configured mirror failed.
    AllMirrorsDown = 2,
    /// The requested video has no playable stream.
    NoPlayableStream = 3,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("mirrortube=debug,info")
    } else {
        EnvFilter::new("mirrortube=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(e) => {
            if !cli.quiet {
                eprintln!("{}", TextFormatter::new(!cli.no_color).format_error(&e.to_string()));
            }
            std::process::exit(ExitCode::Error as i32);
        }
    };

    // Seed the preferred mirror cheaply before the real request. The
    // mirrors command does its own probing.
    let needs_probe =
        !cli.no_probe && !matches!(cli.command, Some(Commands::Mirrors)) && client.pool().len() > 1;
    if needs_probe {
        client.select_initial_endpoint().await;
    }

    let result = match &cli.command {
        Some(Commands::Trending(args)) => trending::run(args, &cli, &client).await,
        Some(Commands::Search(args)) => search::run(args, &cli, &client).await,
        Some(Commands::Stream(args)) => stream::run(args, &cli, &client).await,
        Some(Commands::Mirrors) => mirrors::run(&cli, &client).await,
        None => trending::run(&trending::TrendingArgs::default(), &cli, &client).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("{}", TextFormatter::new(!cli.no_color).format_error(&e.to_string()));
        }
        std::process::exit(exit_code_for(&e) as i32);
    }

    Ok(())
}

/// Builds the mirror client from CLI configuration.
fn build_client(cli: &Cli) -> Result<MirrorClient> {
    let urls = instances::resolve_instances(&cli.instance);
    let pool = Arc::new(EndpointPool::from_urls(urls)?);
    let settings =
        FetchSettings::default().with_request_timeout(Duration::from_secs(cli.timeout));
    Ok(MirrorClient::new(pool, settings)?)
}

/// Maps terminal errors to exit codes; anything unexpected is a plain
/// error.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ApiError>() {
        Some(api_error) if api_error.is_all_endpoints_unavailable() => ExitCode::AllMirrorsDown,
        Some(ApiError::NoPlayableStream { .. }) => ExitCode::NoPlayableStream,
        _ => ExitCode::Error,
    }
}

// ============================================================================
// Tests
// ============================================================================
