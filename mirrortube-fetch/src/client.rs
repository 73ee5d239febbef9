//! HTTP client abstractions.

use crate::error::FetchError;
use crate::pool::Endpoint;
use crate::settings::FetchSettings;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Thin HTTP client over reqwest, carrying the timeouts from
/// [`FetchSettings`].
///
/// Mirrors are unauthenticated and every attempt is a fresh, independent
/// request; there is no same-endpoint retry here because the failover loop
/// switches to a different mirror instead.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    settings: FetchSettings,
}

impl HttpClient {
    /// Creates a new HTTP client with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying client cannot be
    /// built, which indicates a broken TLS configuration.
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            inner: client,
            settings,
        })
    }

    /// Returns the settings this client was built with.
    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Performs a GET against one endpoint and parses the body as JSON.
    ///
    /// Bounded by the per-attempt request timeout.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on transport failure or timeout
    /// - [`FetchError::Status`] on a non-2xx response
    /// - [`FetchError::Json`] on a malformed body
    pub async fn get_json(&self, endpoint: &Endpoint, path: &str) -> Result<Value, FetchError> {
        let url = endpoint.url_for(path);
        debug!(url = %url, "GET");

        let response = self
            .inner
            .get(&url)
            .timeout(self.settings.request_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Performs a HEAD against one endpoint, bounded by the probe timeout.
    /// Returns the status code; the body, if any, is never read.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] on transport failure or timeout.
    pub async fn head(&self, endpoint: &Endpoint, path: &str) -> Result<u16, FetchError> {
        let url = endpoint.url_for(path);
        debug!(url = %url, "HEAD");

        let response = self
            .inner
            .head(&url)
            .timeout(self.settings.probe_timeout)
            .send()
            .await?;

        Ok(response.status().as_u16())
    }
}

impl Default for HttpClient {
    /// Creates a client with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should only happen
    /// if the system's TLS configuration is broken, which indicates a
    /// fundamentally broken environment where the application cannot
    /// function.
    fn default() -> Self {
        Self::new(FetchSettings::default()).unwrap_or_else(|e| {
            panic!(
                "Failed to create default HTTP client: {e}. \
                This usually indicates a broken TLS/SSL configuration."
            )
        })
    }
}
