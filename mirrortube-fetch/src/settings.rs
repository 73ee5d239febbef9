//! Settings for fetch operations.

use std::time::Duration;

/// Default per-attempt request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default per-probe timeout in milliseconds. Probes are a cheap existence
/// check, so this is deliberately much shorter than the request timeout.
const DEFAULT_PROBE_TIMEOUT_MS: u64 = 1500;

/// Settings for fetch operations.
///
/// The per-attempt timeout is configuration rather than a per-call constant
/// so different call sites (quick trending lookups vs. larger stream
/// lookups) can size it appropriately.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Timeout for one request attempt against one endpoint.
    pub request_timeout: Duration,
    /// Timeout for one startup probe against one endpoint.
    pub probe_timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            user_agent: concat!("mirrortube/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchSettings {
    /// Sets the per-attempt request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the per-probe timeout.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Sets the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = FetchSettings::default();
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert_eq!(settings.probe_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_builder_setters() {
        let settings = FetchSettings::default()
            .with_request_timeout(Duration::from_secs(10))
            .with_probe_timeout(Duration::from_millis(500));

        assert_eq!(settings.request_timeout, Duration::from_secs(10));
        assert_eq!(settings.probe_timeout, Duration::from_millis(500));
    }
}
