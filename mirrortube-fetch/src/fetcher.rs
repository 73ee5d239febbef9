//! Failover fetcher.
//!
//! One logical request against "the pool": try the preferred mirror first,
//! then every other member in pool order, promoting the first that
//! succeeds. This is a retry-across-alternates policy, not retry-same -
//! the mirrors are operated independently, so their failure modes are
//! uncorrelated and switching is more likely to help than hammering the
//! endpoint that just failed.

use crate::client::HttpClient;
use crate::error::FetchError;
use crate::pool::EndpointPool;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Executes requests against the pool with automatic failover, keeping the
/// pool's preferred endpoint converged on whichever mirror is actually
/// working.
#[derive(Debug, Clone)]
pub struct ResilientFetcher {
    client: HttpClient,
}

impl ResilientFetcher {
    /// Creates a fetcher using the given client.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Returns the underlying HTTP client.
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Fetches a relative path, failing over across pool members.
    ///
    /// A non-2xx status, a transport error, or a malformed body at any
    /// single mirror all mean the same thing here: advance to the next
    /// one. Promotion of the first non-preferred success is the only
    /// persistent effect; the parsed body is returned, never cached.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::AllEndpointsUnavailable`] when every pool
    /// member has failed, carrying the number of attempts for diagnostics.
    /// The preferred endpoint is left unchanged in that case.
    #[instrument(skip(self, pool), fields(members = pool.len()))]
    pub async fn fetch(&self, pool: &EndpointPool, path: &str) -> Result<Value, FetchError> {
        let preferred = pool.preferred();

        match self.client.get_json(&preferred, path).await {
            Ok(body) => {
                debug!(endpoint = %preferred, "Preferred mirror answered");
                return Ok(body);
            }
            Err(error) => {
                warn!(
                    endpoint = %preferred,
                    error = %error,
                    "Preferred mirror failed, searching for a working one"
                );
            }
        }

        let mut attempted = 1;
        for member in pool.members() {
            if member == preferred {
                continue;
            }

            attempted += 1;
            match self.client.get_json(&member, path).await {
                Ok(body) => {
                    info!(endpoint = %member, "Recovered using alternate mirror");
                    pool.promote(&member);
                    return Ok(body);
                }
                Err(error) => {
                    debug!(endpoint = %member, error = %error, "Mirror failed, trying next");
                }
            }
        }

        warn!(attempted, "All mirrors failed");
        Err(FetchError::AllEndpointsUnavailable { attempted })
    }
}
