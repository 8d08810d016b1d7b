//! Route-fallback search loop
//!
//! Tries routes in a fixed order until one yields non-empty results or all
//! routes are exhausted. Transport failures and empty parses both fall
//! through to the next route; the first non-empty parse short-circuits.

use std::path::Path;

use osprey_core::{report, LeakRecord, ReportError};
use tracing::{debug, info, warn};

use crate::{build_client, parse_leak_table, Route, SearchConfig};

/// Routing mode selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMode {
    /// Clearnet first, then the onion mirror
    Auto,
    /// Clearnet only
    ClearnetOnly,
    /// Onion mirror only
    OnionOnly,
}

impl RouteMode {
    /// Ordered list of routes to attempt
    pub fn routes(self) -> &'static [Route] {
        match self {
            RouteMode::Auto => &[Route::Clearnet, Route::Onion],
            RouteMode::ClearnetOnly => &[Route::Clearnet],
            RouteMode::OnionOnly => &[Route::Onion],
        }
    }
}

/// Tagged outcome of a single route attempt
#[derive(Debug)]
pub enum RouteOutcome {
    /// At least one record parsed
    Hits(Vec<LeakRecord>),
    /// Route answered but the body held no usable rows
    Empty,
    /// Connection error, timeout, or non-2xx status
    Transport(String),
}

/// Non-empty result of a search, tagged with the route that produced it
#[derive(Debug)]
pub struct SearchHit {
    /// Route the records came from
    pub route: Route,
    /// Parsed records in table row order
    pub records: Vec<LeakRecord>,
}

/// Attempt a single route: POST the query, parse the body.
///
/// Every failure mode maps to a `RouteOutcome` variant; nothing propagates.
pub async fn attempt_route(route: Route, query: &str, config: &SearchConfig) -> RouteOutcome {
    let client = match build_client(route, config) {
        Ok(client) => client,
        Err(e) => return RouteOutcome::Transport(e.to_string()),
    };

    debug!("POST {} via {}", config.endpoint(route), route);

    let response = match client
        .post(config.endpoint(route))
        .form(&[("search", query)])
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => return RouteOutcome::Transport(e.to_string()),
    };

    if !response.status().is_success() {
        return RouteOutcome::Transport(format!("status {}", response.status()));
    }

    let html = match response.text().await {
        Ok(body) => body,
        Err(e) => return RouteOutcome::Transport(e.to_string()),
    };

    let records = parse_leak_table(&html);
    if records.is_empty() {
        RouteOutcome::Empty
    } else {
        RouteOutcome::Hits(records)
    }
}

/// Search the resolved route list in order, stopping at the first route
/// that yields a non-empty parse. Returns `None` when every route is
/// exhausted without data.
pub async fn search(query: &str, mode: RouteMode, config: &SearchConfig) -> Option<SearchHit> {
    for &route in mode.routes() {
        info!("Searching via {}", route);

        match attempt_route(route, query, config).await {
            RouteOutcome::Hits(records) => {
                info!("{} hits found via {}", records.len(), route);
                return Some(SearchHit { route, records });
            }
            RouteOutcome::Empty => {
                warn!("No hits via {}", route);
            }
            RouteOutcome::Transport(reason) => {
                warn!("{} request failed: {}", route, reason);
            }
        }
    }

    None
}

/// Run a search and persist the records to `path` on the first non-empty
/// result. Persistence failure is the one fatal path in this component.
pub async fn search_and_save(
    query: &str,
    mode: RouteMode,
    config: &SearchConfig,
    path: &Path,
) -> Result<Option<SearchHit>, ReportError> {
    match search(query, mode, config).await {
        Some(hit) => {
            report::save_json(path, &hit.records)?;
            info!("Results saved to {}", path.display());
            Ok(Some(hit))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_route_order() {
        assert_eq!(RouteMode::Auto.routes(), &[Route::Clearnet, Route::Onion]);
        assert_eq!(RouteMode::ClearnetOnly.routes(), &[Route::Clearnet]);
        assert_eq!(RouteMode::OnionOnly.routes(), &[Route::Onion]);
    }
}
