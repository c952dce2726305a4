use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// ============================================================================
// Categories
// ============================================================================

/// Headline categories supported by the news source.
///
/// This is the fixed set the top-headlines endpoint understands; the
/// controller rejects anything outside it at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
}

/// All categories in tab-bar display order.
pub const CATEGORIES: &[Category] = &[
    Category::General,
    Category::Business,
    Category::Entertainment,
    Category::Health,
    Category::Science,
    Category::Sports,
    Category::Technology,
];

impl Category {
    /// Lowercase wire name, as sent in the `category` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    /// Capitalized label for the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Technology => "Technology",
        }
    }

    /// Next category in display order, wrapping at the end.
    pub fn next(&self) -> Category {
        let idx = CATEGORIES.iter().position(|c| c == self).unwrap_or(0);
        CATEGORIES[(idx + 1) % CATEGORIES.len()]
    }

    /// Previous category in display order, wrapping at the start.
    pub fn prev(&self) -> Category {
        let idx = CATEGORIES.iter().position(|c| c == self).unwrap_or(0);
        CATEGORIES[(idx + CATEGORIES.len() - 1) % CATEGORIES.len()]
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Category::General),
            "business" => Ok(Category::Business),
            "entertainment" => Ok(Category::Entertainment),
            "health" => Ok(Category::Health),
            "science" => Ok(Category::Science),
            "sports" => Ok(Category::Sports),
            "technology" => Ok(Category::Technology),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

// ============================================================================
// Articles
// ============================================================================

/// A single article as reported by the news source.
///
/// Read-only to the controller. The source guarantees no unique identity
/// field; `url` is the practical dedup key when callers need one.
///
/// String fields use `Arc<str>` for cheap cloning between the fetch tasks,
/// the controller's list, and the render path.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: Arc<str>,
    pub description: Option<Arc<str>>,
    pub url: Arc<str>,
    pub image_url: Option<Arc<str>>,
    pub published: Option<DateTime<Utc>>,
    pub source_name: Arc<str>,
    pub author: Option<Arc<str>>,
}

/// One bounded batch of articles from the source.
///
/// `total_results` is the source's count for the whole query/category, not
/// the page; the controller derives `has_more` from it.
#[derive(Debug, Clone, Default)]
pub struct NewsPage {
    pub articles: Vec<Article>,
    pub total_results: u32,
}

// ============================================================================
// Tests
// ============================================================================
