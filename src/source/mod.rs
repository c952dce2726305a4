//! News source boundary: the two read operations the feed controller consumes.
//!
//! The controller only ever talks to a [`NewsSource`] trait object, so the
//! live NewsAPI client and the built-in demo source are interchangeable:
//!
//! - [`newsapi`] - HTTP client for the NewsAPI v2 wire format
//! - [`demo`] - Deterministic in-process source used when no API key is set
//! - [`types`] - `Article`, `Category`, and the `NewsPage` response shape

use async_trait::async_trait;
use thiserror::Error;

pub mod demo;
pub mod newsapi;
pub mod types;

pub use demo::DemoSource;
pub use newsapi::NewsApiClient;
pub use types::{Article, Category, NewsPage, CATEGORIES};

/// Errors a news source can fail with.
///
/// Everything here is caught at the controller boundary and flattened into
/// a single user-facing message; the taxonomy exists so the client can map
/// transport conditions precisely and tests can assert on them.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network-level error (DNS, connection, TLS, timeout).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Request exceeded the client-level timeout.
    #[error("Request timed out")]
    Timeout,
    /// API key missing, invalid, or not accepted (HTTP 401).
    #[error("Authentication failed: check your API key")]
    Auth,
    /// Source refused the request due to rate limiting (HTTP 429).
    #[error("Rate limited by the news source")]
    RateLimited,
    /// Any other non-2xx HTTP response.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// The source answered 2xx but flagged an error in the response body.
    #[error("Source error ({code}): {message}")]
    Api { code: String, message: String },
    /// Response body could not be decoded as the expected JSON shape.
    #[error("Malformed response: {0}")]
    Decode(String),
    /// Empty query reached the search endpoint. The controller's own guard
    /// routes empty searches back to headlines, so hitting this indicates a
    /// caller bypassing the controller.
    #[error("Search query must not be empty")]
    InvalidQuery,
}

/// Read-only news backend with category headlines and free-text search.
///
/// Both operations are paginated with 1-based page indices and return the
/// source's total result count alongside the page.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch one page of top headlines for a category.
    async fn fetch_headlines(
        &self,
        category: Category,
        page: u32,
        page_size: u32,
    ) -> Result<NewsPage, SourceError>;

    /// Search articles by free text, most recently published first.
    ///
    /// Fails with [`SourceError::InvalidQuery`] if `query` trims to empty.
    async fn search_articles(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<NewsPage, SourceError>;
}
