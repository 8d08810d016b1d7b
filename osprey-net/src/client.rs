//! HTTP client construction for both routes
//!
//! Clearnet requests go out directly; onion requests are routed through a
//! local Tor SOCKS5h proxy so DNS resolution also happens inside Tor.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Proxy};
use thiserror::Error;

/// Default clearnet search endpoint
pub const CLEARNET_URL: &str = "https://leakrepo.io/search";

/// Default onion mirror endpoint (rotate to a current mirror as needed)
pub const ONION_URL: &str = "http://leakrepo5dk3f2ahwxl4qmxrv7gtbz6a.onion/search";

/// Default local Tor SOCKS5h proxy address
pub const TOR_PROXY: &str = "socks5h://127.0.0.1:9050";

/// Fixed browser-identifying user agent sent on every request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Default per-attempt timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// One of the two fixed network paths to the search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Direct connection to the clearnet endpoint
    Clearnet,
    /// Connection to the onion mirror through the SOCKS proxy
    Onion,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Clearnet => write!(f, "clearnet"),
            Route::Onion => write!(f, "Tor/.onion"),
        }
    }
}

/// Immutable search configuration, passed into every fetch operation
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Clearnet endpoint URL
    pub clearnet_url: String,
    /// Onion mirror endpoint URL
    pub onion_url: String,
    /// SOCKS5h proxy for the onion route; `None` connects directly
    /// (used by tests to point the onion route at a local server)
    pub socks_addr: Option<String>,
    /// User agent header sent on every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            clearnet_url: CLEARNET_URL.to_string(),
            onion_url: ONION_URL.to_string(),
            socks_addr: Some(TOR_PROXY.to_string()),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SearchConfig {
    /// Endpoint URL for a route
    pub fn endpoint(&self, route: Route) -> &str {
        match route {
            Route::Clearnet => &self.clearnet_url,
            Route::Onion => &self.onion_url,
        }
    }
}

/// Errors from client construction and networking
#[derive(Debug, Error)]
pub enum NetError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Create a fresh HTTP client for one route attempt
pub fn build_client(route: Route, config: &SearchConfig) -> Result<Client, NetError> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(&config.user_agent);

    if route == Route::Onion {
        if let Some(addr) = &config.socks_addr {
            let proxy = Proxy::all(addr).map_err(|e| NetError::ClientBuild(e.to_string()))?;
            builder = builder
                .proxy(proxy)
                .danger_accept_invalid_certs(true); // Many .onion mirrors have self-signed certs
        }
    }

    builder
        .build()
        .map_err(|e| NetError::ClientBuild(e.to_string()))
}

/// Check if the Tor proxy is reachable
pub async fn check_tor_connection(config: &SearchConfig) -> Result<bool, NetError> {
    let client = build_client(Route::Onion, config)?;

    // Try to reach a known .onion address (Tor Project's)
    let result = client
        .get("http://2gzyxa5ihm7nsggfxnu52rck2vv4rvmdlkiu3ber7fzs2xqxczfebsid.onion/")
        .send()
        .await;

    match result {
        Ok(resp) => Ok(resp.status().is_success() || resp.status().is_redirection()),
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(config.socks_addr.as_deref().unwrap().contains("9050"));
        assert_eq!(config.timeout_secs, 25);
        assert!(config.user_agent.contains("Mozilla"));
    }

    #[test]
    fn test_endpoint_per_route() {
        let config = SearchConfig::default();
        assert!(config.endpoint(Route::Clearnet).starts_with("https://"));
        assert!(config.endpoint(Route::Onion).contains(".onion"));
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::Clearnet.to_string(), "clearnet");
        assert_eq!(Route::Onion.to_string(), "Tor/.onion");
    }
}
