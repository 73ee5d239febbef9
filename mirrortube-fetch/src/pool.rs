//! Endpoint pool.
//!
//! The pool holds the ordered list of candidate mirror base-URLs and the
//! one currently preferred. Endpoints are never removed once configured
//! (a temporarily failing mirror stays eligible for future retries); the
//! preferred pointer is the only mutable piece of state, rewritten whenever
//! a fetch succeeds on a non-preferred member.

use mirrortube_core::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{PoisonError, RwLock};

// ============================================================================
// Endpoint
// ============================================================================

/// One mirror base-URL.
///
/// Endpoints carry no state beyond identity; health is tracked only
/// implicitly, through the pool's preferred pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    /// Creates an endpoint from a base-URL, stripping any trailing slash so
    /// relative paths can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self(url)
    }

    /// Returns the base-URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the absolute URL for a relative request path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Endpoint Pool
// ============================================================================

struct PoolState {
    endpoints: Vec<Endpoint>,
    preferred: usize,
}

/// The ordered pool of mirror endpoints plus the currently preferred one.
///
/// State lives behind an `RwLock` so the pool can be shared behind `Arc`
/// by concurrent callers. Promotion is last-success-wins; a stale read of
/// the preferred pointer costs at most one extra failed attempt on the
/// next fetch.
pub struct EndpointPool {
    state: RwLock<PoolState>,
}

impl EndpointPool {
    /// Creates a pool from an ordered, non-empty list of endpoints. The
    /// first element starts out preferred.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyEndpointPool`] if the list is empty.
    pub fn new(endpoints: Vec<Endpoint>) -> Result<Self, CoreError> {
        if endpoints.is_empty() {
            return Err(CoreError::EmptyEndpointPool);
        }
        Ok(Self {
            state: RwLock::new(PoolState {
                endpoints,
                preferred: 0,
            }),
        })
    }

    /// Creates a pool from base-URL strings.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyEndpointPool`] if the iterator is empty.
    pub fn from_urls<I, S>(urls: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(urls.into_iter().map(Endpoint::new).collect())
    }

    /// Replaces the pool contents and resets preferred to the first
    /// element. Used by the settings surface to apply a user override.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyEndpointPool`] if the list is empty; the
    /// existing pool is left untouched in that case.
    pub fn configure(&self, endpoints: Vec<Endpoint>) -> Result<(), CoreError> {
        if endpoints.is_empty() {
            return Err(CoreError::EmptyEndpointPool);
        }
        let mut state = self.write();
        state.endpoints = endpoints;
        state.preferred = 0;
        Ok(())
    }

    /// Returns the currently preferred endpoint.
    pub fn preferred(&self) -> Endpoint {
        let state = self.read();
        state.endpoints[state.preferred].clone()
    }

    /// Promotes the given endpoint to preferred.
    ///
    /// Silently ignored if the endpoint is not a pool member; that can
    /// only happen through misuse of an internal API and is not worth an
    /// error path.
    pub fn promote(&self, endpoint: &Endpoint) {
        let mut state = self.write();
        if let Some(index) = state.endpoints.iter().position(|e| e == endpoint) {
            state.preferred = index;
        }
    }

    /// Returns a snapshot of all endpoints in pool order.
    ///
    /// This is an owned copy so the failover loop never iterates while
    /// holding the pool lock across an await point.
    pub fn members(&self) -> Vec<Endpoint> {
        self.read().endpoints.clone()
    }

    /// Returns the number of endpoints in the pool. Always at least one.
    pub fn len(&self) -> usize {
        self.read().endpoints.len()
    }

    /// Always false; a pool cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, PoolState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, PoolState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for EndpointPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("EndpointPool")
            .field("endpoints", &state.endpoints)
            .field("preferred", &state.preferred)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_abc() -> EndpointPool {
        EndpointPool::from_urls([
            "https://a.example",
            "https://b.example",
            "https://c.example",
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_pool_rejected() {
        let result = EndpointPool::new(Vec::new());
        assert!(matches!(result, Err(CoreError::EmptyEndpointPool)));
    }

    #[test]
    fn test_first_member_starts_preferred() {
        let pool = pool_abc();
        assert_eq!(pool.preferred().as_str(), "https://a.example");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let endpoint = Endpoint::new("https://a.example/");
        assert_eq!(endpoint.as_str(), "https://a.example");
        assert_eq!(
            endpoint.url_for("/trending?region=US"),
            "https://a.example/trending?region=US"
        );
    }

    #[test]
    fn test_promote_member() {
        let pool = pool_abc();
        pool.promote(&Endpoint::new("https://c.example"));
        assert_eq!(pool.preferred().as_str(), "https://c.example");
    }

    #[test]
    fn test_promote_non_member_is_noop() {
        let pool = pool_abc();
        pool.promote(&Endpoint::new("https://stranger.example"));
        assert_eq!(pool.preferred().as_str(), "https://a.example");
    }

    #[test]
    fn test_members_preserve_order() {
        let pool = pool_abc();
        let members = pool.members();
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].as_str(), "https://a.example");
        assert_eq!(members[2].as_str(), "https://c.example");
        // Restartable: a second snapshot yields the same sequence
        assert_eq!(pool.members(), members);
    }

    #[test]
    fn test_configure_resets_preferred() {
        let pool = pool_abc();
        pool.promote(&Endpoint::new("https://b.example"));

        pool.configure(vec![Endpoint::new("https://x.example")]).unwrap();
        assert_eq!(pool.preferred().as_str(), "https://x.example");
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_configure_empty_keeps_existing_pool() {
        let pool = pool_abc();
        let result = pool.configure(Vec::new());
        assert!(matches!(result, Err(CoreError::EmptyEndpointPool)));
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.preferred().as_str(), "https://a.example");
    }
}
