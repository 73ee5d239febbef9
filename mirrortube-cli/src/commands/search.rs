//! Search command.

use anyhow::Result;
use clap::Args;
use mirrortube_api::MirrorClient;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search query, or a YouTube URL to resolve directly.
    pub query: String,
}

/// Runs the search command.
pub async fn run(args: &SearchArgs, cli: &Cli, client: &MirrorClient) -> Result<()> {
    let summaries = client.search(&args.query).await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_listing(&summaries));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&summaries)?);
        }
    }

    Ok(())
}
