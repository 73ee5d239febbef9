//! Startup probing for the endpoint pool.
//!
//! A probe is a cheap existence check (HEAD on a lightweight path) used
//! only to seed the pool's preferred endpoint; it is distinct from the
//! full failover fetch. Probing is deliberately sequential: parallel
//! probes against many independently-operated third-party mirrors risk
//! tripping their abuse protections, and the short per-probe deadline
//! already bounds worst-case latency to `timeout x pool size`.

use crate::client::HttpClient;
use crate::pool::{Endpoint, EndpointPool};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, instrument};

// ============================================================================
// Probe Report
// ============================================================================

/// Outcome of probing one endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// The endpoint that was probed.
    pub endpoint: Endpoint,
    /// Whether the probe got a success status back.
    pub success: bool,
    /// Response time in milliseconds (includes timed-out waits).
    pub response_time_ms: u64,
    /// HTTP status code, when a response arrived at all.
    pub status_code: Option<u16>,
    /// Error message, when it did not.
    pub error: Option<String>,
}

// ============================================================================
// Probe Selector
// ============================================================================

/// Picks a usable starting endpoint without making the caller wait out the
/// full request timeout on dead mirrors.
#[derive(Debug, Clone)]
pub struct ProbeSelector {
    client: HttpClient,
}

impl ProbeSelector {
    /// Creates a selector using the given client. The per-probe deadline
    /// comes from the client's [`crate::FetchSettings::probe_timeout`].
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Probes pool members in pool order and promotes the first that
    /// responds successfully.
    ///
    /// Probing is an optimization, not a correctness gate: if every
    /// candidate fails, the pool's preferred endpoint is left where it was
    /// and that endpoint is returned. Subsequent requests still go through
    /// the full failover fetch, so a probe miss is never user-visible as
    /// an error by itself.
    #[instrument(skip(self, pool), fields(members = pool.len()))]
    pub async fn select_initial(&self, pool: &EndpointPool, probe_path: &str) -> Endpoint {
        for candidate in pool.members() {
            match self.probe_one(&candidate, probe_path).await {
                report if report.success => {
                    info!(endpoint = %candidate, latency_ms = report.response_time_ms, "Initial mirror selected");
                    pool.promote(&candidate);
                    return candidate;
                }
                report => {
                    debug!(
                        endpoint = %candidate,
                        status = ?report.status_code,
                        error = ?report.error,
                        "Probe failed, trying next mirror"
                    );
                }
            }
        }

        let fallback = pool.preferred();
        info!(endpoint = %fallback, "No mirror answered the probe, keeping current preferred");
        fallback
    }

    /// Probes every pool member sequentially and returns a report per
    /// endpoint, in pool order. Used for mirror health listings.
    pub async fn probe_all(&self, pool: &EndpointPool, probe_path: &str) -> Vec<ProbeReport> {
        let members = pool.members();
        let mut reports = Vec::with_capacity(members.len());
        for endpoint in members {
            reports.push(self.probe_one(&endpoint, probe_path).await);
        }
        reports
    }

    async fn probe_one(&self, endpoint: &Endpoint, probe_path: &str) -> ProbeReport {
        let start = Instant::now();

        match self.client.head(endpoint, probe_path).await {
            Ok(status) => ProbeReport {
                endpoint: endpoint.clone(),
                success: (200..300).contains(&status),
                response_time_ms: elapsed_ms(start),
                status_code: Some(status),
                error: None,
            },
            Err(e) => ProbeReport {
                endpoint: endpoint.clone(),
                success: false,
                response_time_ms: elapsed_ms(start),
                status_code: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
