//! Text output formatting with colors.

use mirrortube_core::{StreamDescriptor, VideoSummary};
use mirrortube_fetch::ProbeReport;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a video listing (trending or search results).
    pub fn format_listing(&self, summaries: &[VideoSummary]) -> String {
        if summaries.is_empty() {
            return "No videos found.".to_string();
        }

        let mut lines = Vec::with_capacity(summaries.len() * 2);
        for (index, summary) in summaries.iter().enumerate() {
            let duration = summary
                .duration_seconds
                .map_or_else(|| "LIVE".to_string(), format_duration);
            let views = summary
                .view_count_text
                .as_deref()
                .map(|v| format!("  {v} views"))
                .unwrap_or_default();

            lines.push(format!(
                "{:>3}. {}  [{}]",
                index + 1,
                self.bold(&summary.title),
                duration
            ));
            lines.push(format!(
                "     {}{}  {}",
                self.dim(&summary.channel_title),
                views,
                self.cyan(&summary.id)
            ));
        }
        lines.join("\n")
    }

    /// Formats a negotiated stream descriptor.
    pub fn format_stream(&self, descriptor: &StreamDescriptor) -> String {
        let mut lines = vec![
            format!("Source:  {}", self.bold(descriptor.source.display_name())),
            format!("Type:    {}", descriptor.mime_type),
            format!("Quality: {}", descriptor.quality_label),
        ];
        if descriptor.is_audio_only {
            lines.push("Audio only".to_string());
        }
        lines.push(format!("URL:     {}", self.cyan(&descriptor.url)));
        lines.join("\n")
    }

    /// Formats mirror health reports as an aligned table.
    pub fn format_mirrors(&self, reports: &[ProbeReport]) -> String {
        let width = reports
            .iter()
            .map(|r| r.endpoint.as_str().len())
            .max()
            .unwrap_or(0);

        reports
            .iter()
            .map(|report| {
                let status = if report.success {
                    self.green(&format!("up    {:>5} ms", report.response_time_ms))
                } else {
                    let reason = report
                        .status_code
                        .map(|code| format!("HTTP {code}"))
                        .or_else(|| report.error.clone())
                        .unwrap_or_else(|| "unreachable".to_string());
                    self.red(&format!("down  {reason}"))
                };
                format!("{:<width$}  {}", report.endpoint.as_str(), status)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Formats an error line.
    pub fn format_error(&self, message: &str) -> String {
        self.red(&format!("Error: {message}"))
    }

    fn bold(&self, text: &str) -> String {
        self.wrap(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.wrap(DIM, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.wrap(CYAN, text)
    }

    fn green(&self, text: &str) -> String {
        self.wrap(GREEN, text)
    }

    fn red(&self, text: &str) -> String {
        self.wrap(RED, text)
    }

    fn wrap(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Formats seconds as `h:mm:ss` or `m:ss`.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
