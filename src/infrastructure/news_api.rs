use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::articles::NewArticle;

pub const NEWS_API_URL: &str = "https://newsapi.org";

/// Key value treated as "not configured". Shipped in sample configs; must
/// never trigger an outbound call.
pub const PLACEHOLDER_API_KEY: &str = "demo_key";

const USER_AGENT: &str = "ReadHub/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_TITLE: &str = "No Title";
const DEFAULT_CONTENT: &str = "No content available";
const DEFAULT_AUTHOR: &str = "Unknown Author";
const DEFAULT_DESCRIPTION: &str = "No description";
const DEFAULT_SOURCE: &str = "Unknown Source";
const DEFAULT_URL: &str = "https://newsapi.org/";

#[derive(Debug, Error)]
pub enum NewsApiError {
    #[error("news API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("news API returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("news API reported status {0:?}")]
    ApiStatus(String),
}

/// Client for a NewsAPI-shaped provider. The base URL is configurable so
/// tests can point it at a mock server.
#[derive(Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    request_timeout: Duration,
}

impl NewsApiClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout. Tests use this to simulate a slow
    /// provider without waiting out the production timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Whether this client may make outbound calls. With no key (or the
    /// placeholder key) every operation must be served from local data.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }

    /// Fetch the US top headlines and normalize them into article records.
    /// Headline results carry category "general" and no tags.
    pub async fn top_headlines(&self) -> Result<Vec<NewArticle>, NewsApiError> {
        let url = format!("{}/v2/top-headlines", self.base_url);
        let envelope = self
            .request(&url, &[("country", "us"), ("apiKey", &self.api_key)])
            .await?;

        info!(count = envelope.articles.len(), "fetched top headlines");

        Ok(envelope
            .articles
            .into_iter()
            .map(|remote| normalize(remote, "general", Vec::new()))
            .collect())
    }

    /// Search the provider's article index. Results carry category "search"
    /// and the query as their single tag.
    pub async fn search(&self, query: &str) -> Result<Vec<NewArticle>, NewsApiError> {
        let url = format!("{}/v2/everything", self.base_url);
        let envelope = self
            .request(
                &url,
                &[
                    ("q", query),
                    ("sortBy", "publishedAt"),
                    ("language", "en"),
                    ("apiKey", &self.api_key),
                ],
            )
            .await?;

        info!(count = envelope.articles.len(), query, "searched news API");

        Ok(envelope
            .articles
            .into_iter()
            .map(|remote| normalize(remote, "search", vec![query.to_string()]))
            .collect())
    }

    async fn request(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<NewsApiEnvelope, NewsApiError> {
        debug!(url, "requesting news API");

        let response = self
            .http
            .get(url)
            .query(params)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.request_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsApiError::Status(status));
        }

        let envelope: NewsApiEnvelope = response.json().await?;
        if envelope.status != "ok" {
            return Err(NewsApiError::ApiStatus(envelope.status));
        }

        Ok(envelope)
    }
}

// --- Wire types ---

#[derive(Debug, Deserialize)]
struct NewsApiEnvelope {
    status: String,
    #[serde(default, rename = "totalResults")]
    #[allow(dead_code)]
    total_results: i64,
    #[serde(default)]
    articles: Vec<RemoteArticle>,
}

#[derive(Debug, Deserialize)]
struct RemoteArticle {
    source: Option<RemoteSource>,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteSource {
    name: Option<String>,
}

/// Map a remote record into the local article shape, substituting defaults
/// for every missing field. The image URL is the only field allowed to stay
/// absent.
fn normalize(remote: RemoteArticle, category: &str, tags: Vec<String>) -> NewArticle {
    NewArticle {
        title: remote.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        content: remote.content.unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
        author: remote.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        description: remote
            .description
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        source: remote
            .source
            .and_then(|s| s.name)
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        url: remote.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
        image_url: remote.url_to_image,
        published_at: parse_published_at(remote.published_at.as_deref()),
        category: category.to_string(),
        tags,
    }
}

/// Parse the provider's `publishedAt` timestamp: ISO-8601 with a trailing
/// UTC designator. The designator is stripped and the remainder parsed as a
/// naive timestamp taken as UTC. Anything unparseable becomes the current
/// time rather than failing the whole fetch.
fn parse_published_at(value: Option<&str>) -> DateTime<Utc> {
    value
        .and_then(|raw| {
            let trimmed = raw.strip_suffix('Z').unwrap_or(raw);
            // %.f also matches timestamps without a fractional part
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").ok()
        })
        .map(|naive| naive.and_utc())
        .unwrap_or_else(Utc::now)
}
