//! newsdeck — a terminal news browser.
//!
//! Fetches category headlines and free-text search results from a
//! NewsAPI-style source, renders them as cards, and supports load-more
//! pagination, refresh, and opening articles in the system browser.
//!
//! The crate is a thin binary over a library so integration tests can
//! drive the feed controller and the live client end-to-end:
//!
//! - [`feed`] - the feed controller (all fetch state) and search debounce
//! - [`source`] - the news source boundary: live client and demo source
//! - [`app`] - application state shared by the event loop and rendering
//! - [`ui`] - terminal UI
//! - [`config`] - TOML configuration
//! - [`theme`] - color palettes
//! - [`util`] - text and URL helpers

pub mod app;
pub mod config;
pub mod feed;
pub mod source;
pub mod theme;
pub mod ui;
pub mod util;
