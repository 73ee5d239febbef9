//! Mirrors command - probe every configured mirror and report health.

use anyhow::Result;
use mirrortube_api::MirrorClient;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the mirrors command. Probes are sequential, so with a large pool
/// of dead mirrors this takes up to `probe timeout x pool size`.
pub async fn run(cli: &Cli, client: &MirrorClient) -> Result<()> {
    let reports = client.probe_all().await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_mirrors(&reports));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&reports)?);
        }
    }

    Ok(())
}
