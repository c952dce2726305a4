//! Utility functions for common operations.
//!
//! - **Text processing**: Unicode-aware truncation, terminal-safe
//!   sanitizing of source-controlled text, relative timestamps, and
//!   description cleanup
//! - **URL handling**: scheme validation before opening in a browser and
//!   publisher-domain extraction for display

mod text;
mod urls;

pub use text::{
    clean_description, display_width, relative_time, sanitize_for_display, truncate_to_width,
};
pub use urls::{openable_url, source_domain};

/// Maximum allowed search query length, enforced at the input layer.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 256;
