//! Help overlay — keybinding table.
//!
//! Renders a centered overlay listing all keys, grouped by context.

use crate::app::App;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Row, Table},
    Frame,
};

/// Key bindings shown in the help table, grouped by section.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Browse",
        &[
            ("j / ↓, k / ↑", "Move selection"),
            ("g / Home, G / End", "Jump to first / last article"),
            ("h / ←, l / →", "Previous / next category"),
            ("1-7", "Jump to category"),
            ("m", "Load more articles"),
            ("r", "Refresh current view"),
            ("o / Enter", "Open article in browser"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Start a search"),
            ("Enter", "Search immediately"),
            ("Esc", "Cancel and return to headlines"),
        ],
    ),
    (
        "General",
        &[
            ("t", "Toggle dark/light theme"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

/// Render the help overlay on top of the current view.
pub(super) fn render(f: &mut Frame, app: &App) {
    let overlay = centered_rect(60, 70, f.area());
    if overlay.width < 24 || overlay.height < 8 {
        return;
    }

    // Clear the background behind the overlay
    f.render_widget(Clear, overlay);

    let mut rows: Vec<Row> = Vec::new();
    for (label, bindings) in SECTIONS {
        rows.push(Row::new(vec![
            Line::from(Span::styled(format!("-- {} --", label), app.theme.help_key)),
            Line::from(""),
        ]));
        for (key, description) in *bindings {
            rows.push(Row::new(vec![
                format!("  {}", key),
                (*description).to_string(),
            ]));
        }
        rows.push(Row::new(vec![String::new(), String::new()]));
    }
    rows.pop(); // Trailing blank row

    let widths = [Constraint::Length(20), Constraint::Min(20)];
    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.panel_border_focused)
                .title(" Help (? to close) "),
        )
        .header(
            Row::new(vec!["Key", "Action"])
                .style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .add_modifier(Modifier::UNDERLINED),
                )
                .bottom_margin(1),
        )
        .style(app.theme.help_text);

    f.render_widget(table, overlay);
}

/// Create a centered rectangle with the given percentage of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
