//! Stream command - negotiate a playable stream for one video.

use anyhow::Result;
use clap::Args;
use mirrortube_api::{video_id_from_query, MirrorClient};

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the stream command.
#[derive(Args)]
pub struct StreamArgs {
    /// Video identifier, or a YouTube URL to resolve.
    pub video: String,
}

/// Runs the stream command.
pub async fn run(args: &StreamArgs, cli: &Cli, client: &MirrorClient) -> Result<()> {
    let video_id = video_id_from_query(&args.video).unwrap_or_else(|| args.video.clone());
    let descriptor = client.stream(&video_id).await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_stream(&descriptor));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&descriptor)?);
        }
    }

    Ok(())
}
