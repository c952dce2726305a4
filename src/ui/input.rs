//! Input handling for the TUI.
//!
//! Translates key presses into controller intents and view-state changes.
//! Three input contexts: the help overlay (swallows everything), the
//! search input line, and normal browsing.

use crate::app::{App, AppEvent};
use crate::source::CATEGORIES;
use crate::util::{openable_url, MAX_SEARCH_QUERY_LENGTH};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::loop_runner::Action;

/// Handle a key press event.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    // Ctrl+C quits from any context
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Ok(Action::Quit);
    }

    if app.help_visible {
        return Ok(handle_help_input(app, code));
    }

    if app.search_active {
        handle_search_input(app, code, event_tx);
        return Ok(Action::Continue);
    }

    handle_browse_input(app, code, event_tx)
}

/// Help overlay: close on the usual keys, ignore the rest.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => {
            app.help_visible = false;
        }
        _ => {}
    }
    Action::Continue
}

/// Search input line.
///
/// Keystrokes feed the debounce; only Enter and clearing the input bypass
/// the quiet period.
fn handle_search_input(app: &mut App, code: KeyCode, event_tx: &mpsc::Sender<AppEvent>) {
    match code {
        KeyCode::Esc => {
            // Abandon the input; if a search already ran, drop back to
            // headlines for the current category
            app.debounce.cancel();
            app.search_active = false;
            app.search_input.clear();
            if app.controller.is_search_mode() {
                let request = app.controller.clear_search();
                app.dispatch(request, event_tx);
            }
        }
        KeyCode::Enter => {
            // Explicit search takes priority: cancel the debounce before
            // firing so the tick handler cannot double-issue it
            app.debounce.cancel();
            app.search_active = false;
            // An empty input falls back to headlines inside the controller
            if let Some(request) = app.controller.search(&app.search_input.clone()) {
                app.dispatch(request, event_tx);
            }
        }
        KeyCode::Backspace => {
            if app.search_input.pop().is_some() {
                if app.search_input.is_empty() {
                    // Clearing the input bypasses the debounce delay
                    app.debounce.cancel();
                    if app.controller.is_search_mode() {
                        let request = app.controller.clear_search();
                        app.dispatch(request, event_tx);
                    }
                } else {
                    app.debounce.note(app.search_input.clone());
                }
            }
        }
        KeyCode::Char(c) => {
            if app.search_input.len() >= MAX_SEARCH_QUERY_LENGTH {
                app.set_status(format!(
                    "Search query at max length ({} chars)",
                    MAX_SEARCH_QUERY_LENGTH
                ));
                return;
            }
            app.search_input.push(c);
            app.debounce.note(app.search_input.clone());
        }
        _ => {}
    }
}

/// Normal browsing keys.
fn handle_browse_input(
    app: &mut App,
    code: KeyCode,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    match code {
        KeyCode::Char('q') => return Ok(Action::Quit),

        KeyCode::Char('?') => app.help_visible = true,

        KeyCode::Char('/') => {
            app.search_active = true;
            app.search_input.clear();
        }

        KeyCode::Esc => {
            if app.controller.is_search_mode() {
                let request = app.controller.clear_search();
                app.dispatch(request, event_tx);
            }
        }

        // Selection
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.selected = 0,
        KeyCode::End | KeyCode::Char('G') => {
            let len = app.controller.state().articles.len();
            app.selected = len.saturating_sub(1);
        }

        // Category switching
        KeyCode::Left | KeyCode::Char('h') => {
            let prev = app.controller.state().category.prev();
            if let Some(request) = app.controller.load_category(prev) {
                app.dispatch(request, event_tx);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let next = app.controller.state().category.next();
            if let Some(request) = app.controller.load_category(next) {
                app.dispatch(request, event_tx);
            }
        }
        KeyCode::Char(c @ '1'..='7') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(request) = app.controller.load_category(CATEGORIES[idx]) {
                app.dispatch(request, event_tx);
            }
        }

        // Pagination
        KeyCode::Char('m') => {
            if let Some(request) = app.controller.load_more() {
                app.dispatch(request, event_tx);
            } else if app.controller.loading() {
                app.set_status("Still loading...");
            } else {
                app.set_status("No more articles");
            }
        }

        KeyCode::Char('r') => {
            let request = app.controller.refresh();
            app.dispatch(request, event_tx);
        }

        KeyCode::Char('t') => {
            app.theme_variant = app.theme_variant.next();
            app.theme = app.theme_variant.palette();
            app.set_status(format!("Theme: {}", app.theme_variant.name()));
        }

        // Sharing: hand the article URL to the system browser
        KeyCode::Char('o') | KeyCode::Enter => open_selected(app),

        _ => {}
    }
    Ok(Action::Continue)
}

/// Open the selected article in the system browser. The URL came from a
/// remote API, so it is scheme-checked before being handed to the opener.
fn open_selected(app: &mut App) {
    let Some(article) = app.selected_article() else {
        app.set_status("No article selected");
        return;
    };
    let url = article.url.clone();

    match openable_url(&url) {
        Some(valid) => {
            if let Err(e) = open::that(valid.as_str()) {
                tracing::warn!(url = %valid, error = %e, "Failed to open browser");
                app.set_status(format!("Failed to open browser: {}", e));
            } else {
                app.set_status("Opened in browser");
            }
        }
        None => {
            tracing::warn!(url = %url, "Refusing to open non-http(s) URL");
            app.set_status("Article URL is not openable");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feed::Mode;
    use crate::source::{Category, NewsPage};

    fn app_and_channel() -> (App, mpsc::Sender<AppEvent>, mpsc::Receiver<AppEvent>) {
        let app = App::new(&Config::default()).unwrap();
        let (tx, rx) = mpsc::channel(16);
        (app, tx, rx)
    }

    fn press(app: &mut App, code: KeyCode, tx: &mpsc::Sender<AppEvent>) -> Action {
        handle_input(app, code, KeyModifiers::NONE, tx).unwrap()
    }

    #[tokio::test]
    async fn test_q_quits_and_ctrl_c_quits() {
        let (mut app, tx, _rx) = app_and_channel();
        assert!(matches!(press(&mut app, KeyCode::Char('q'), &tx), Action::Quit));
        assert!(matches!(
            handle_input(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL, &tx).unwrap(),
            Action::Quit
        ));
    }

    #[tokio::test]
    async fn test_slash_enters_search_and_typing_feeds_debounce() {
        let (mut app, tx, _rx) = app_and_channel();
        press(&mut app, KeyCode::Char('/'), &tx);
        assert!(app.search_active);

        for c in ['k', 'e', 'n'] {
            press(&mut app, KeyCode::Char(c), &tx);
        }
        assert_eq!(app.search_input, "ken");
        // Typing alone must not issue a request; the tick fires it later
        assert!(app.debounce.is_pending());
        assert!(!app.controller.loading());
    }

    #[tokio::test]
    async fn test_enter_fires_search_immediately() {
        let (mut app, tx, _rx) = app_and_channel();
        press(&mut app, KeyCode::Char('/'), &tx);
        for c in ['r', 'u', 's', 't'] {
            press(&mut app, KeyCode::Char(c), &tx);
        }
        press(&mut app, KeyCode::Enter, &tx);

        assert!(!app.search_active);
        assert!(!app.debounce.is_pending());
        assert!(app.controller.is_search_mode());
        assert!(app.controller.loading());
        assert_eq!(app.controller.state().query, "rust");
    }

    #[tokio::test]
    async fn test_clearing_input_returns_to_headlines_immediately() {
        let (mut app, tx, _rx) = app_and_channel();
        // Get into an executed search first
        press(&mut app, KeyCode::Char('/'), &tx);
        press(&mut app, KeyCode::Char('k'), &tx);
        press(&mut app, KeyCode::Enter, &tx);
        assert!(app.controller.is_search_mode());

        // Re-open the input and erase the single pending character
        press(&mut app, KeyCode::Char('/'), &tx);
        press(&mut app, KeyCode::Char('x'), &tx);
        press(&mut app, KeyCode::Backspace, &tx);

        // Bypassed the debounce: already back in headlines mode
        assert_eq!(app.controller.state().mode, Mode::Headlines);
        assert!(!app.debounce.is_pending());
    }

    #[tokio::test]
    async fn test_esc_in_search_results_clears_search() {
        let (mut app, tx, _rx) = app_and_channel();
        press(&mut app, KeyCode::Char('/'), &tx);
        press(&mut app, KeyCode::Char('k'), &tx);
        press(&mut app, KeyCode::Enter, &tx);
        assert!(app.controller.is_search_mode());

        press(&mut app, KeyCode::Esc, &tx);
        assert_eq!(app.controller.state().mode, Mode::Headlines);
        assert!(app.controller.state().query.is_empty());
    }

    #[tokio::test]
    async fn test_category_keys_switch_and_repeat_is_noop() {
        let (mut app, tx, _rx) = app_and_channel();

        press(&mut app, KeyCode::Right, &tx);
        assert_eq!(app.controller.state().category, Category::Business);
        assert!(app.controller.loading());

        // Jump directly via number key
        let req = app.controller.refresh();
        app.controller
            .apply_response(req.generation, Ok(NewsPage::default()));
        press(&mut app, KeyCode::Char('7'), &tx);
        assert_eq!(app.controller.state().category, Category::Technology);

        // Re-selecting the active category is a no-op: loading stays off
        let req = app.controller.refresh();
        app.controller
            .apply_response(req.generation, Ok(NewsPage::default()));
        assert!(!app.controller.loading());
        press(&mut app, KeyCode::Char('7'), &tx);
        assert!(!app.controller.loading());
    }

    #[tokio::test]
    async fn test_load_more_when_exhausted_sets_status() {
        let (mut app, tx, _rx) = app_and_channel();
        press(&mut app, KeyCode::Char('m'), &tx);
        assert!(app.status_message.is_some());
        assert!(!app.controller.loading());
    }

    #[tokio::test]
    async fn test_help_overlay_swallows_keys() {
        let (mut app, tx, _rx) = app_and_channel();
        press(&mut app, KeyCode::Char('?'), &tx);
        assert!(app.help_visible);

        // Browsing keys are inert while help is up
        press(&mut app, KeyCode::Right, &tx);
        assert_eq!(app.controller.state().category, Category::General);

        press(&mut app, KeyCode::Esc, &tx);
        assert!(!app.help_visible);
    }

    #[tokio::test]
    async fn test_open_with_no_articles_sets_status() {
        let (mut app, tx, _rx) = app_and_channel();
        press(&mut app, KeyCode::Char('o'), &tx);
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn test_theme_toggle_swaps_palette() {
        let (mut app, tx, _rx) = app_and_channel();
        let before = app.theme.card_selected;
        press(&mut app, KeyCode::Char('t'), &tx);
        assert_ne!(before, app.theme.card_selected);
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn test_search_input_length_capped() {
        let (mut app, tx, _rx) = app_and_channel();
        press(&mut app, KeyCode::Char('/'), &tx);
        app.search_input = "x".repeat(MAX_SEARCH_QUERY_LENGTH);

        press(&mut app, KeyCode::Char('y'), &tx);
        assert_eq!(app.search_input.len(), MAX_SEARCH_QUERY_LENGTH);
        assert!(app.status_message.is_some());
    }
}
