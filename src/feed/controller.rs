//! The feed controller: single authority for "what should currently be shown".
//!
//! Intents (`load_category`, `search`, `load_more`, `refresh`,
//! `clear_search`) mutate the request parameters and hand back a
//! generation-tagged [`FeedRequest`]. The caller performs the fetch however
//! it likes (the UI spawns a tokio task) and feeds the outcome to
//! [`FeedController::apply_response`], which merges it into the state — or
//! discards it if a newer intent has superseded the request in the
//! meantime. Keeping the transitions synchronous makes every state-machine
//! property testable without a network or a runtime.

use crate::source::{Article, Category, NewsPage, SourceError};

// ============================================================================
// State
// ============================================================================

/// Browsing mode: category headlines or free-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Headlines,
    Search,
}

/// The one mutable record the controller owns.
///
/// `page` is the page of the most recent request (1-based). After a failed
/// `load_more` it stays at the attempted value; see the controller docs.
#[derive(Debug, Clone)]
pub struct FeedState {
    pub articles: Vec<Article>,
    pub total_results: u32,
    pub page: u32,
    pub category: Category,
    pub query: String,
    pub mode: Mode,
    pub loading: bool,
    pub error: Option<String>,
}

impl FeedState {
    fn new(category: Category) -> Self {
        Self {
            articles: Vec::new(),
            total_results: 0,
            page: 1,
            category,
            query: String::new(),
            mode: Mode::Headlines,
            loading: false,
            error: None,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// What to ask the source for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Headlines { category: Category, page: u32 },
    Search { query: String, page: u32 },
}

/// A fetch the controller wants performed.
///
/// The generation tag identifies which intent issued the request; responses
/// carrying an older generation are discarded by `apply_response` without
/// touching state. In-flight requests are never cancelled, only ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub generation: u64,
    pub kind: RequestKind,
    pub page_size: u32,
}

/// Outcome of `apply_response`, mostly for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response belonged to the current generation and was merged.
    Current,
    /// The response was superseded by a newer intent and discarded.
    Stale,
}

// ============================================================================
// Controller
// ============================================================================

pub struct FeedController {
    state: FeedState,
    generation: u64,
    page_size: u32,
}

impl FeedController {
    pub fn new(category: Category, page_size: u32) -> Self {
        Self {
            state: FeedState::new(category),
            generation: 0,
            page_size,
        }
    }

    /// Current state snapshot for rendering.
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// True while a request for the current generation is outstanding.
    pub fn loading(&self) -> bool {
        self.state.loading
    }

    /// Whether the source reported more results than are currently loaded.
    pub fn has_more(&self) -> bool {
        self.state.articles.len() < self.state.total_results as usize
    }

    pub fn is_search_mode(&self) -> bool {
        self.state.mode == Mode::Search
    }

    // ------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------

    /// Switch to headlines for `category`.
    ///
    /// Selecting the category that is already active in Headlines mode is a
    /// no-op; `refresh` is the explicit re-fetch path.
    pub fn load_category(&mut self, category: Category) -> Option<FeedRequest> {
        if self.state.mode == Mode::Headlines && self.state.category == category {
            tracing::debug!(category = %category, "Category already active, skipping fetch");
            return None;
        }
        Some(self.start_headlines(category))
    }

    /// Search for `query`, most recent first.
    ///
    /// An empty (after trimming) query falls back to headlines for the
    /// current category instead of hitting the search endpoint.
    pub fn search(&mut self, query: &str) -> Option<FeedRequest> {
        let query = query.trim();
        if query.is_empty() {
            return Some(self.start_headlines(self.state.category));
        }

        self.state.mode = Mode::Search;
        self.state.query = query.to_string();
        self.state.page = 1;
        Some(self.begin_request())
    }

    /// Fetch the next page of the current mode and append it.
    ///
    /// Only meaningful when idle and the source reported more results;
    /// otherwise returns None. On failure the page counter stays at the
    /// attempted value rather than rolling back.
    pub fn load_more(&mut self) -> Option<FeedRequest> {
        if self.state.loading || !self.has_more() {
            return None;
        }
        self.state.page += 1;
        Some(self.begin_request())
    }

    /// Re-issue the current mode's request at page 1, replacing the list.
    ///
    /// Also the user-initiated retry path after an error.
    pub fn refresh(&mut self) -> FeedRequest {
        self.state.page = 1;
        self.begin_request()
    }

    /// Leave search mode and return to headlines for the current category.
    pub fn clear_search(&mut self) -> FeedRequest {
        self.start_headlines(self.state.category)
    }

    // ------------------------------------------------------------------
    // Response handling
    // ------------------------------------------------------------------

    /// Merge a fetch outcome into the state.
    ///
    /// Responses from superseded generations are discarded wholesale: a
    /// slow page that resolves after the user has moved on must never
    /// overwrite newer state. For the current generation, a page-1 success
    /// replaces the article list, later pages append; a failure surfaces
    /// the error and leaves the existing list untouched.
    pub fn apply_response(
        &mut self,
        generation: u64,
        result: Result<NewsPage, SourceError>,
    ) -> Applied {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Discarding response from superseded request"
            );
            return Applied::Stale;
        }

        self.state.loading = false;
        match result {
            Ok(page) => {
                if self.state.page == 1 {
                    self.state.articles = page.articles;
                } else {
                    self.state.articles.extend(page.articles);
                }
                self.state.total_results = page.total_results;
                tracing::debug!(
                    page = self.state.page,
                    loaded = self.state.articles.len(),
                    total = self.state.total_results,
                    "Applied page"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, page = self.state.page, "Fetch failed");
                self.state.error = Some(e.to_string());
            }
        }
        Applied::Current
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Enter headlines mode for `category` at page 1, unconditionally.
    fn start_headlines(&mut self, category: Category) -> FeedRequest {
        self.state.mode = Mode::Headlines;
        self.state.category = category;
        self.state.query.clear();
        self.state.page = 1;
        self.begin_request()
    }

    /// Stamp a new generation and build the request for the current
    /// parameters. Every request starts with a clean error and the loading
    /// flag raised.
    fn begin_request(&mut self) -> FeedRequest {
        self.state.error = None;
        self.state.loading = true;
        self.generation = self.generation.wrapping_add(1);

        let kind = match self.state.mode {
            Mode::Headlines => RequestKind::Headlines {
                category: self.state.category,
                page: self.state.page,
            },
            Mode::Search => RequestKind::Search {
                query: self.state.query.clone(),
                page: self.state.page,
            },
        };
        FeedRequest {
            generation: self.generation,
            kind,
            page_size: self.page_size,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
