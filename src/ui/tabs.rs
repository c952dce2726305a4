//! Category tab bar.

use crate::app::App;
use crate::source::CATEGORIES;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the category tab bar: the app name followed by one tab per
/// category, the active one highlighted. In search mode no tab is active;
/// the search line below carries the context instead.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let state = app.controller.state();
    let searching = app.controller.is_search_mode();

    let mut spans: Vec<Span> = vec![
        Span::styled(" newsdeck ", app.theme.tab_active),
        Span::raw(" "),
    ];

    for (i, category) in CATEGORIES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", app.theme.tab_normal));
        }
        let style = if !searching && state.category == *category {
            app.theme.tab_active
        } else {
            app.theme.tab_normal
        };
        spans.push(Span::styled(category.label(), style));
    }

    if app.demo_mode {
        spans.push(Span::styled("  [demo]", app.theme.card_meta));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
