//! Application event handling.
//!
//! Processes completion events from background fetch tasks. All the merge
//! logic lives in the controller; this layer only adjusts view state
//! (selection) around the controller's decision.

use crate::app::{App, AppEvent};
use crate::feed::Applied;

/// Handle an event from a background task.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::FeedLoaded { generation, result } => {
            let succeeded = result.is_ok();
            match app.controller.apply_response(generation, result) {
                Applied::Stale => {
                    // Superseded fetch: nothing on screen may change
                }
                Applied::Current => {
                    if succeeded {
                        if app.controller.state().page == 1 {
                            // Fresh list: jump back to the top
                            app.selected = 0;
                        } else {
                            app.clamp_selection();
                        }
                    }
                    // Failures keep list and selection; the status bar
                    // renders the controller's error descriptor
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::source::{Article, Category, NewsPage, SourceError};
    use std::sync::Arc;

    fn article(tag: &str) -> Article {
        Article {
            title: Arc::from(tag),
            description: None,
            url: Arc::from(format!("https://example.com/{}", tag)),
            image_url: None,
            published: None,
            source_name: Arc::from("Wire"),
            author: None,
        }
    }

    fn page(n: usize, total: u32) -> NewsPage {
        NewsPage {
            articles: (0..n).map(|i| article(&format!("a{}", i))).collect(),
            total_results: total,
        }
    }

    #[tokio::test]
    async fn test_page_one_resets_selection() {
        let mut app = App::new(&Config::default()).unwrap();
        let req = app.controller.refresh();
        handle_app_event(
            &mut app,
            AppEvent::FeedLoaded {
                generation: req.generation,
                result: Ok(page(5, 20)),
            },
        );
        app.selected = 4;

        let req = app.controller.refresh();
        handle_app_event(
            &mut app,
            AppEvent::FeedLoaded {
                generation: req.generation,
                result: Ok(page(3, 3)),
            },
        );
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn test_load_more_keeps_selection() {
        let mut app = App::new(&Config::default()).unwrap();
        let req = app.controller.refresh();
        handle_app_event(
            &mut app,
            AppEvent::FeedLoaded {
                generation: req.generation,
                result: Ok(page(5, 20)),
            },
        );
        app.selected = 4;

        let req = app.controller.load_more().unwrap();
        handle_app_event(
            &mut app,
            AppEvent::FeedLoaded {
                generation: req.generation,
                result: Ok(page(5, 20)),
            },
        );
        assert_eq!(app.selected, 4);
        assert_eq!(app.controller.state().articles.len(), 10);
    }

    #[tokio::test]
    async fn test_error_keeps_list_and_selection() {
        let mut app = App::new(&Config::default()).unwrap();
        let req = app.controller.refresh();
        handle_app_event(
            &mut app,
            AppEvent::FeedLoaded {
                generation: req.generation,
                result: Ok(page(5, 20)),
            },
        );
        app.selected = 2;

        let req = app.controller.refresh();
        handle_app_event(
            &mut app,
            AppEvent::FeedLoaded {
                generation: req.generation,
                result: Err(SourceError::Timeout),
            },
        );
        assert_eq!(app.selected, 2);
        assert_eq!(app.controller.state().articles.len(), 5);
        assert!(app.controller.state().error.is_some());
    }

    #[tokio::test]
    async fn test_stale_event_changes_nothing() {
        let mut app = App::new(&Config::default()).unwrap();
        let stale = app.controller.load_category(Category::Business).unwrap();
        let _current = app.controller.load_category(Category::Sports).unwrap();

        handle_app_event(
            &mut app,
            AppEvent::FeedLoaded {
                generation: stale.generation,
                result: Ok(page(5, 20)),
            },
        );
        assert!(app.controller.state().articles.is_empty());
        assert!(app.controller.loading());
    }
}
