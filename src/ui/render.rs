//! Render functions for the TUI.
//!
//! Composes the vertical layout: category tabs, the search line when
//! relevant, the article card list, and the status bar. The help overlay
//! draws on top when active.

use crate::app::App;
use crate::util::sanitize_for_display;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{articles, help, status, tabs};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 8;

/// Main render function.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    // Minimum terminal size check for a usable UI
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    // The search line only takes space while typing or showing results
    let search_visible = app.search_active || app.controller.is_search_mode();

    let constraints = if search_visible {
        vec![
            Constraint::Length(1), // tabs
            Constraint::Length(1), // search line
            Constraint::Min(0),    // articles
            Constraint::Length(1), // status
        ]
    } else {
        vec![
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    tabs::render(f, app, chunks[0]);

    if search_visible {
        render_search_line(f, app, chunks[1]);
        articles::render(f, app, chunks[2]);
        status::render(f, app, chunks[3]);
    } else {
        articles::render(f, app, chunks[1]);
        status::render(f, app, chunks[2]);
    }

    if app.help_visible {
        help::render(f, app);
    }
}

/// The search input / active-query line.
fn render_search_line(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.search_active {
        Line::from(vec![
            Span::styled(" / ", app.theme.search_prompt),
            Span::styled(
                sanitize_for_display(&app.search_input).into_owned(),
                app.theme.search_input,
            ),
            Span::styled("_", app.theme.search_prompt),
        ])
    } else {
        Line::from(vec![
            Span::styled(" Search: ", app.theme.search_prompt),
            Span::styled(
                sanitize_for_display(&app.controller.state().query).into_owned(),
                app.theme.search_input,
            ),
            Span::styled("  (Esc to clear)", app.theme.card_meta),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}
