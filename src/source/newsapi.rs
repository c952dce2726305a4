//! Live NewsAPI v2 client.
//!
//! Speaks the two read endpoints the controller needs: `/top-headlines`
//! for category browsing and `/everything` for free-text search. The API
//! key travels in the `X-Api-Key` header; the country code is held here
//! and passed through to the headlines endpoint untouched.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;

use super::types::{Article, Category, NewsPage};
use super::{NewsSource, SourceError};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Search results are sorted by publish time, newest first.
const SEARCH_SORT: &str = "publishedAt";

pub struct NewsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    country: String,
}

impl NewsApiClient {
    pub fn new(client: reqwest::Client, api_key: SecretString, country: impl Into<String>) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            country: country.into(),
        }
    }

    /// Point the client at a different base URL. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_page(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<NewsPage, SourceError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);

        let response = self
            .client
            .get(&url)
            .query(params)
            .header("X-Api-Key", self.api_key.expose_secret())
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SourceError::Auth);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SourceError::RateLimited);
        }
        if !status.is_success() {
            // NewsAPI error bodies carry a machine code and a human message;
            // surface them when present, fall back to the bare status.
            if let Ok(body) = response.json::<WireResponse>().await {
                if let (Some(code), Some(message)) = (body.code, body.message) {
                    return Err(SourceError::Api { code, message });
                }
            }
            return Err(SourceError::HttpStatus(status.as_u16()));
        }

        let body: WireResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        if body.status == "error" {
            return Err(SourceError::Api {
                code: body.code.unwrap_or_else(|| "unknown".to_string()),
                message: body.message.unwrap_or_else(|| "unspecified error".to_string()),
            });
        }

        Ok(body.into_page(path))
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn fetch_headlines(
        &self,
        category: Category,
        page: u32,
        page_size: u32,
    ) -> Result<NewsPage, SourceError> {
        let page = page.to_string();
        let page_size = page_size.to_string();
        self.get_page(
            "top-headlines",
            &[
                ("country", self.country.as_str()),
                ("category", category.as_str()),
                ("page", &page),
                ("pageSize", &page_size),
            ],
        )
        .await
    }

    async fn search_articles(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<NewsPage, SourceError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SourceError::InvalidQuery);
        }

        let page = page.to_string();
        let page_size = page_size.to_string();
        self.get_page(
            "everything",
            &[
                ("q", query),
                ("page", &page),
                ("pageSize", &page_size),
                ("sortBy", SEARCH_SORT),
                ("language", "en"),
            ],
        )
        .await
    }
}

/// reqwest folds timeouts into its error type; pull them back apart so the
/// status bar can say "timed out" instead of a generic network failure.
fn classify_transport_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Network(e)
    }
}

// ============================================================================
// Wire Format
// ============================================================================

/// Top-level NewsAPI response envelope.
///
/// Success and error bodies share this shape: success carries `articles`
/// and `totalResults`, error carries `code` and `message`.
#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    status: String,
    code: Option<String>,
    message: Option<String>,
    #[serde(rename = "totalResults", default)]
    total_results: u32,
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    #[serde(default)]
    source: WireSourceRef,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
struct WireSourceRef {
    name: Option<String>,
}

impl WireResponse {
    /// Convert the wire body into the domain page, dropping entries the
    /// source redacted (no URL or no title — NewsAPI emits "[Removed]"
    /// placeholders with null fields for withdrawn articles).
    fn into_page(self, endpoint: &str) -> NewsPage {
        let reported = self.articles.len();
        let articles: Vec<Article> = self
            .articles
            .into_iter()
            .filter_map(wire_to_article)
            .collect();

        let skipped = reported - articles.len();
        if skipped > 0 {
            tracing::warn!(
                endpoint = endpoint,
                skipped = skipped,
                "Articles without usable title/url dropped from response"
            );
        }

        NewsPage {
            articles,
            total_results: self.total_results,
        }
    }
}

fn wire_to_article(w: WireArticle) -> Option<Article> {
    let url = w.url.filter(|u| !u.is_empty())?;
    let title = w.title.filter(|t| !t.is_empty() && t != "[Removed]")?;

    Some(Article {
        title: Arc::from(title),
        description: w.description.filter(|d| !d.is_empty()).map(Arc::from),
        url: Arc::from(url),
        image_url: w.url_to_image.filter(|u| !u.is_empty()).map(Arc::from),
        published: w.published_at,
        source_name: w
            .source
            .name
            .filter(|n| !n.is_empty())
            .map(Arc::from)
            .unwrap_or_else(|| Arc::from("Unknown")),
        author: w.author.filter(|a| !a.is_empty()).map(Arc::from),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const HEADLINES_BODY: &str = r#"{
        "status": "ok",
        "totalResults": 38,
        "articles": [
            {
                "source": {"id": null, "name": "Tech Daily"},
                "author": "Jane Doe",
                "title": "Compilers are fast now",
                "description": "A look at incremental compilation.",
                "url": "https://example.com/compilers",
                "urlToImage": "https://example.com/compilers.jpg",
                "publishedAt": "2024-12-20T10:30:00Z"
            },
            {
                "source": {"id": null, "name": "Wire Service"},
                "author": null,
                "title": "Markets close higher",
                "description": null,
                "url": "https://example.com/markets",
                "urlToImage": null,
                "publishedAt": "2024-12-20T08:15:00Z"
            }
        ]
    }"#;

    fn test_client(server: &MockServer) -> NewsApiClient {
        NewsApiClient::new(
            reqwest::Client::new(),
            SecretString::from("test-key".to_string()),
            "us",
        )
        .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_headlines_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("country", "us"))
            .and(query_param("category", "technology"))
            .and(query_param("page", "1"))
            .and(query_param("pageSize", "12"))
            .and(header("X-Api-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(HEADLINES_BODY))
            .mount(&server)
            .await;

        let page = test_client(&server)
            .fetch_headlines(Category::Technology, 1, 12)
            .await
            .unwrap();

        assert_eq!(page.total_results, 38);
        assert_eq!(page.articles.len(), 2);
        assert_eq!(&*page.articles[0].title, "Compilers are fast now");
        assert_eq!(page.articles[0].author.as_deref(), Some("Jane Doe"));
        assert_eq!(&*page.articles[1].source_name, "Wire Service");
        assert!(page.articles[1].description.is_none());
    }

    #[tokio::test]
    async fn test_search_sends_sort_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/everything"))
            .and(query_param("q", "kenya"))
            .and(query_param("sortBy", "publishedAt"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status": "ok", "totalResults": 0, "articles": []}"#,
            ))
            .mount(&server)
            .await;

        let page = test_client(&server)
            .search_articles("kenya", 2, 12)
            .await
            .unwrap();
        assert_eq!(page.total_results, 0);
        assert!(page.articles.is_empty());
    }

    #[tokio::test]
    async fn test_search_trims_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/everything"))
            .and(query_param("q", "rust"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status": "ok", "totalResults": 0, "articles": []}"#,
            ))
            .mount(&server)
            .await;

        let result = test_client(&server).search_articles("  rust  ", 1, 12).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_empty_query_rejected_without_request() {
        // No mock mounted: a request would 404 and fail the test differently
        let server = MockServer::start().await;
        let result = test_client(&server).search_articles("   ", 1, 12).await;
        assert!(matches!(result.unwrap_err(), SourceError::InvalidQuery));
    }

    #[tokio::test]
    async fn test_401_maps_to_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                r#"{"status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid"}"#,
            ))
            .mount(&server)
            .await;

        let result = test_client(&server)
            .fetch_headlines(Category::General, 1, 12)
            .await;
        assert!(matches!(result.unwrap_err(), SourceError::Auth));
    }

    #[tokio::test]
    async fn test_429_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let result = test_client(&server)
            .fetch_headlines(Category::General, 1, 12)
            .await;
        assert!(matches!(result.unwrap_err(), SourceError::RateLimited));
    }

    #[tokio::test]
    async fn test_error_body_on_4xx_surfaces_code_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                r#"{"status": "error", "code": "parametersMissing", "message": "Required parameters are missing"}"#,
            ))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .fetch_headlines(Category::General, 1, 12)
            .await
            .unwrap_err();
        match err {
            SourceError::Api { code, message } => {
                assert_eq!(code, "parametersMissing");
                assert!(message.contains("missing"));
            }
            e => panic!("Expected Api error, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_error_status_in_200_body() {
        // NewsAPI can answer 200 with an error envelope
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status": "error", "code": "rateLimited", "message": "Too many requests"}"#,
            ))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .fetch_headlines(Category::General, 1, 12)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Api { .. }));
    }

    #[tokio::test]
    async fn test_plain_500_maps_to_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .fetch_headlines(Category::General, 1, 12)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::HttpStatus(500)));
    }

    #[tokio::test]
    async fn test_malformed_json_maps_to_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .fetch_headlines(Category::General, 1, 12)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_removed_articles_are_dropped() {
        let body = r#"{
            "status": "ok",
            "totalResults": 3,
            "articles": [
                {"source": {"name": null}, "author": null, "title": "[Removed]",
                 "description": null, "url": "https://removed.com", "urlToImage": null,
                 "publishedAt": null},
                {"source": {"name": "Kept"}, "author": null, "title": "Real story",
                 "description": null, "url": "https://example.com/real", "urlToImage": null,
                 "publishedAt": null},
                {"source": {"name": "NoUrl"}, "author": null, "title": "Missing link",
                 "description": null, "url": null, "urlToImage": null, "publishedAt": null}
            ]
        }"#;
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let page = test_client(&server)
            .fetch_headlines(Category::General, 1, 12)
            .await
            .unwrap();
        assert_eq!(page.articles.len(), 1);
        assert_eq!(&*page.articles[0].title, "Real story");
        // totalResults is the source's count, not ours to adjust
        assert_eq!(page.total_results, 3);
    }
}
