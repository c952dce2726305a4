//! Application state shared between the event loop, input handling, and
//! rendering.
//!
//! `App` owns the [`FeedController`] (the only fetch state in the program)
//! plus purely visual state: selection, the search input buffer, the help
//! overlay flag, and the transient status message. Fetches run as spawned
//! tokio tasks that report back through [`AppEvent`]; the controller's
//! generation tags decide whether a result still matters by the time it
//! arrives.

use crate::config::Config;
use crate::feed::{FeedController, FeedRequest, RequestKind, SearchDebounce};
use crate::source::{Article, DemoSource, NewsApiClient, NewsPage, NewsSource, SourceError};
use crate::theme::{Palette, ThemeVariant};
use anyhow::Result;
use reqwest::redirect::Policy;
use secrecy::SecretString;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Status messages expire after this many seconds.
const STATUS_TTL_SECS: u64 = 4;

// ============================================================================
// HTTP Client Configuration
// ============================================================================

/// Redirect policy for the news source: a few hops, logged, no loops.
fn redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }
        let url = attempt.url();
        if attempt.previous().iter().any(|p| p.as_str() == url.as_str()) {
            return attempt.error("Redirect loop detected");
        }
        tracing::debug!(to = %url, hop = attempt.previous().len() + 1, "Following redirect");
        attempt.follow()
    })
}

/// One shared client with keepalive and a request timeout. Timeouts
/// surface as [`SourceError::Timeout`]; there is no retry logic anywhere,
/// retry is a user action.
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(redirect_policy())
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .tcp_keepalive(std::time::Duration::from_secs(60))
        .timeout(std::time::Duration::from_secs(30))
        .build()
}

// ============================================================================
// Events
// ============================================================================

/// Events from background tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// A fetch spawned by `App::dispatch` finished.
    FeedLoaded {
        generation: u64,
        result: Result<NewsPage, SourceError>,
    },
}

// ============================================================================
// App State
// ============================================================================

pub struct App {
    /// The single authority for what should currently be shown.
    pub controller: FeedController,
    pub source: Arc<dyn NewsSource>,

    pub theme_variant: ThemeVariant,
    pub theme: Palette,

    /// Selected index into the controller's article list.
    pub selected: usize,
    /// True while the search input line has focus.
    pub search_active: bool,
    pub search_input: String,
    pub debounce: SearchDebounce,

    pub help_visible: bool,
    pub needs_redraw: bool,
    pub spinner_frame: usize,
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// True when running against the built-in demo source.
    pub demo_mode: bool,
}

impl App {
    /// Build the app from configuration: pick the source (live client when
    /// an API key is available, demo otherwise) and start with an empty
    /// controller on the default category. Key precedence (env var over
    /// config file, `--demo` overriding both) is resolved by the caller
    /// before the config reaches here.
    pub fn new(config: &Config) -> Result<Self> {
        let (source, demo_mode): (Arc<dyn NewsSource>, bool) = match config.api_key.clone() {
            Some(key) => {
                let client = build_http_client()?;
                (
                    Arc::new(NewsApiClient::new(
                        client,
                        SecretString::from(key),
                        config.country.clone(),
                    )),
                    false,
                )
            }
            None => {
                tracing::info!("No API key configured, using the built-in demo source");
                (Arc::new(DemoSource::new()), true)
            }
        };

        let theme_variant = ThemeVariant::from_config(&config.theme);

        Ok(Self {
            controller: FeedController::new(config.default_category, config.page_size),
            source,
            theme_variant,
            theme: theme_variant.palette(),
            selected: 0,
            search_active: false,
            search_input: String::new(),
            debounce: SearchDebounce::default(),
            help_visible: false,
            needs_redraw: true,
            spinner_frame: 0,
            status_message: None,
            demo_mode,
        })
    }

    /// Spawn the fetch a controller intent asked for. The task reports
    /// back via [`AppEvent::FeedLoaded`]; nothing is awaited here, so a
    /// newer intent can supersede this one while it is in flight.
    pub fn dispatch(&self, request: FeedRequest, event_tx: &mpsc::Sender<AppEvent>) {
        let source = Arc::clone(&self.source);
        let tx = event_tx.clone();

        tracing::debug!(generation = request.generation, kind = ?request.kind, "Dispatching fetch");
        tokio::spawn(async move {
            let result = match request.kind {
                RequestKind::Headlines { category, page } => {
                    source.fetch_headlines(category, page, request.page_size).await
                }
                RequestKind::Search { query, page } => {
                    source.search_articles(&query, page, request.page_size).await
                }
            };
            let event = AppEvent::FeedLoaded {
                generation: request.generation,
                result,
            };
            if tx.send(event).await.is_err() {
                tracing::warn!("Fetch result dropped (event receiver gone)");
            }
        });
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selected_article(&self) -> Option<&Article> {
        self.controller.state().articles.get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.controller.state().articles.len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside the article list after it changes.
    pub fn clamp_selection(&mut self) {
        let len = self.controller.state().articles.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    // ------------------------------------------------------------------
    // Status line
    // ------------------------------------------------------------------

    /// Set a status message (auto-expires).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear the status message if expired. Returns true if one was
    /// actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, since)) = &self.status_message {
            if since.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
