//! In-memory fetcher for unit tests

use crate::crawler::{FetchResult, PageFetcher};
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned pages; any other URL fails as if unreachable
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, (String, String)>,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `html` at `url`
    pub fn page(self, url: &str, html: &str) -> Self {
        self.redirected_page(url, url, html)
    }

    /// Serves `html` for `url` as if the request was redirected to `resolved_url`
    pub fn redirected_page(mut self, url: &str, resolved_url: &str, html: &str) -> Self {
        self.pages
            .insert(url.to_string(), (resolved_url.to_string(), html.to_string()));
        self
    }

    /// URLs fetched so far, in request order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        self.requested.lock().unwrap().push(url.to_string());

        match self.pages.get(url) {
            Some((resolved_url, html)) => FetchResult {
                url: url.to_string(),
                resolved_url: resolved_url.clone(),
                status_code: Some(200),
                content: Some(html.clone()),
            },
            None => FetchResult::failed(url, Some(404)),
        }
    }
}
