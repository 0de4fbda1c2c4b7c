//! HTTP clients for the analytics and themes services.

use crate::analytics::{
    AspectSummary, AvgScores, MetaResponse, SentimentSummary, SplitResponse, TrendResponse,
};
use crate::theme::{ThemesPayload, TweetsResponse};
use anyhow::{bail, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Shared client with the request timeout applied.
///
/// The timeout only exists on native targets; the browser's fetch has no
/// builder-level equivalent, so WASM builds skip it.
pub fn build_client() -> Result<Client> {
    let builder = Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(std::time::Duration::from_secs(15));
    Ok(builder.build()?)
}

/// Window query params, skipping whichever dates are unset.
fn window_query(start: &str, end: &str) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if !start.is_empty() {
        params.push(("start", start.to_string()));
    }
    if !end.is_empty() {
        params.push(("end", end.to_string()));
    }
    params
}

async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&'static str, String)],
) -> Result<T> {
    let response = client.get(url).query(query).send().await?;
    let status = response.status();
    if !status.is_success() {
        bail!("request to {} failed with status {}", url, status);
    }
    Ok(response.json::<T>().await?)
}

/// Client for the analytics API serving the dashboard aggregates.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    base_url: String,
    client: Client,
}

impl AnalyticsClient {
    /// `base_url` is the API prefix, e.g. `http://host/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(AnalyticsClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_client()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Root endpoint: dataset size and date coverage.
    pub async fn meta(&self) -> Result<MetaResponse> {
        get_json(&self.client, &self.url("/"), &[]).await
    }

    pub async fn sentiment_summary(&self, start: &str, end: &str) -> Result<SentimentSummary> {
        let query = window_query(start, end);
        get_json(&self.client, &self.url("/sentiment/summary"), &query).await
    }

    pub async fn sentiment_trend(&self, start: &str, end: &str) -> Result<TrendResponse> {
        let query = window_query(start, end);
        get_json(&self.client, &self.url("/sentiment/trend"), &query).await
    }

    pub async fn aspect_summary(
        &self,
        start: &str,
        end: &str,
        as_percent: bool,
    ) -> Result<AspectSummary> {
        let mut query = window_query(start, end);
        if as_percent {
            query.push(("as_percent", "true".to_string()));
        }
        get_json(&self.client, &self.url("/aspects/summary"), &query).await
    }

    pub async fn avg_scores(&self, start: &str, end: &str) -> Result<AvgScores> {
        let query = window_query(start, end);
        get_json(&self.client, &self.url("/aspects/avg-scores"), &query).await
    }

    pub async fn sentiment_split(
        &self,
        start: &str,
        end: &str,
        as_percent: bool,
    ) -> Result<SplitResponse> {
        let mut query = window_query(start, end);
        if as_percent {
            query.push(("as_percent", "true".to_string()));
        }
        get_json(&self.client, &self.url("/aspects/sentiment-split"), &query).await
    }
}

/// Client for the themes service.
#[derive(Debug, Clone)]
pub struct ThemesClient {
    base_url: String,
    client: Client,
}

impl ThemesClient {
    /// `base_url` is the service origin, e.g. `http://host:3001`.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(ThemesClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_client()?,
        })
    }

    pub async fn themes(&self) -> Result<ThemesPayload> {
        let url = format!("{}/api/themes", self.base_url);
        get_json(&self.client, &url, &[]).await
    }

    pub async fn theme_tweets(
        &self,
        theme_id: u32,
        limit: usize,
        q: Option<&str>,
    ) -> Result<TweetsResponse> {
        let url = format!("{}/api/themes/{}/tweets", self.base_url, theme_id);
        let mut query = vec![("limit", limit.to_string())];
        if let Some(q) = q {
            if !q.is_empty() {
                query.push(("q", q.to_string()));
            }
        }
        get_json(&self.client, &url, &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = AnalyticsClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.url("/meta"), "http://localhost:8000/api/meta");
    }

    #[test]
    fn test_window_query_skips_empty() {
        assert!(window_query("", "").is_empty());
        let params = window_query("2024-01-01", "");
        assert_eq!(params, vec![("start", "2024-01-01".to_string())]);
        let params = window_query("2024-01-01", "2024-02-01");
        assert_eq!(params.len(), 2);
    }
}
