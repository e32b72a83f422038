use anyhow::{Context, Result};
use serde::Deserialize;

/// One web search hit, in the relevance order the engine returned it.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Keyword search over a SearxNG-compatible JSON endpoint.
pub struct SearxClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearxResponse {
    #[serde(default)]
    results: Vec<SearxResult>,
}

#[derive(Debug, Deserialize)]
struct SearxResult {
    title: String,
    url: String,
    #[serde(default)]
    content: String,
}

impl SearxClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Runs a keyword search and returns at most `max_results` hits.
    /// An empty result list is a valid outcome, not an error.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        tracing::debug!(query, max_results, "searching");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("format", "json"), ("language", "en")])
            .send()
            .await
            .context("Failed to send request to search API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Search API error ({}): {}", status, body);
        }

        let searx_response: SearxResponse = response
            .json()
            .await
            .context("Failed to parse search API response")?;

        Ok(collect_results(searx_response, max_results))
    }
}

fn collect_results(response: SearxResponse, max_results: usize) -> Vec<SearchResult> {
    response
        .results
        .into_iter()
        .take(max_results)
        .map(|r| SearchResult {
            title: r.title,
            url: r.url,
            snippet: r.content,
        })
        .collect()
}
