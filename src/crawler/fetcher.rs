//! HTTP fetcher implementation
//!
//! This module performs single GET retrievals for the pipeline:
//! - Building the HTTP client with the configured user agent and timeout
//! - Following redirects and reporting the final URL
//! - Converting transport errors and non-success statuses into failed results

use crate::config::HttpConfig;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Result of a fetch operation
///
/// A failed fetch has no content. Nothing about a failure escapes this type:
/// callers only see `success() == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// The URL that was requested
    pub url: String,
    /// Final URL after redirects (the request URL when nothing was served)
    pub resolved_url: String,
    /// HTTP status code, when a response arrived at all
    pub status_code: Option<u16>,
    /// Page body, present only on success
    pub content: Option<String>,
}

impl FetchResult {
    /// A result for a request that produced no usable page
    pub fn failed(url: &str, status_code: Option<u16>) -> Self {
        Self {
            url: url.to_string(),
            resolved_url: url.to_string(),
            status_code,
            content: None,
        }
    }

    /// Returns true if the page was served successfully
    pub fn success(&self) -> bool {
        self.content.is_some()
    }
}

/// Retrieves the content at a URL
///
/// Implementations never fail: every transport or HTTP problem is reported as
/// a failed [`FetchResult`].
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = FetchResult> + Send;
}

/// [`PageFetcher`] backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration and wraps it
    pub fn from_config(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use discount_scout::config::HttpConfig;
/// use discount_scout::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx response | success, final URL after redirects |
/// | Any other status | failed, status recorded |
/// | Timeout / connect / TLS error | failed, no status |
/// | Body read error | failed, status recorded |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            if e.is_timeout() {
                tracing::warn!("Request timeout for {}", url);
            } else if e.is_connect() {
                tracing::debug!("Connection failed for {}: {}", url, e);
            } else {
                tracing::debug!("Request failed for {}: {}", url, e);
            }
            return FetchResult::failed(url, None);
        }
    };

    let status = response.status();
    let resolved_url = response.url().to_string();

    if !status.is_success() {
        tracing::debug!("HTTP {} for {}", status.as_u16(), url);
        return FetchResult::failed(url, Some(status.as_u16()));
    }

    match response.text().await {
        Ok(body) => FetchResult {
            url: url.to_string(),
            resolved_url,
            status_code: Some(status.as_u16()),
            content: Some(body),
        },
        Err(e) => {
            tracing::warn!("Failed to read body for {}: {}", url, e);
            FetchResult::failed(url, Some(status.as_u16()))
        }
    }
}
