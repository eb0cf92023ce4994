//! Outbound quote fetching
//!
//! Two fixed Yahoo Finance endpoints are tried in order; the first one
//! that yields a usable quote wins. Endpoint failures are logged and
//! swallowed, and only the aggregate miss is reported to the caller.

use std::time::Duration;

use tracing::debug;

use stockmcp_core::{Error, ProviderConfig, Quote, Result};

use crate::format::render_quote;
use crate::shape::quote_from_body;

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const QUOTE_URL: &str = "https://query2.finance.yahoo.com/v1/finance/quoteResponse";

/// One candidate quote endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Chart API, `chart.result[0].meta` layout
    Chart,
    /// Quote API, `quoteResponse.result[0]` layout
    Quote,
}

impl Endpoint {
    /// Endpoints in the order they are tried
    pub const ALL: [Endpoint; 2] = [Endpoint::Chart, Endpoint::Quote];

    /// Build the request URL for an already-uppercased symbol
    pub fn url(&self, symbol: &str) -> String {
        match self {
            Endpoint::Chart => format!("{}/{}", CHART_URL, symbol),
            Endpoint::Quote => format!("{}?symbols={}", QUOTE_URL, symbol),
        }
    }
}

/// Fetches quotes from the provider endpoints
pub struct QuoteFetcher {
    http: reqwest::Client,
}

impl QuoteFetcher {
    /// Build a fetcher with the configured timeout and User-Agent
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http })
    }

    /// Fetch and render a quote for an uppercased symbol.
    ///
    /// Tries each endpoint in order and returns the first rendered quote.
    /// Returns [`Error::Provider`] naming the symbol when every endpoint
    /// misses.
    pub async fn fetch(&self, symbol: &str) -> Result<String> {
        for endpoint in Endpoint::ALL {
            if let Some(quote) = self.try_endpoint(endpoint, symbol).await {
                return Ok(render_quote(&quote));
            }
            debug!(?endpoint, %symbol, "endpoint miss, trying next");
        }

        Err(Error::unable_to_fetch(symbol))
    }

    /// Query one endpoint; any failure along the way is a miss.
    async fn try_endpoint(&self, endpoint: Endpoint, symbol: &str) -> Option<Quote> {
        let url = endpoint.url(symbol);
        debug!(%url, "querying provider");

        // Status is deliberately not checked: error bodies fail shape
        // classification and fall through to the next endpoint.
        let response = self.http.get(&url).send().await.ok()?;
        let body = response.text().await.ok()?;

        quote_from_body(&body, symbol)
    }
}
