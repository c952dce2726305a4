//! Status bar.
//!
//! One line at the bottom: errors win, then transient status messages,
//! then contextual key hints. The right edge shows the loaded/total count
//! and the load-more hint whenever the source has more pages.

use crate::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let state = app.controller.state();

    let (text, style): (Cow<'_, str>, _) = if let Some(error) = &state.error {
        (
            Cow::Owned(format!("{} — press r to retry", error)),
            app.theme.status_error,
        )
    } else if let Some((msg, _)) = &app.status_message {
        (Cow::Borrowed(msg.as_ref()), app.theme.status_info)
    } else if app.search_active {
        (
            Cow::Borrowed("Type to search | ENTER search now | ESC cancel"),
            app.theme.status_bar,
        )
    } else {
        (
            Cow::Borrowed("[←/→]category [/]search [m]ore [r]efresh [o]pen [?]help [q]uit"),
            app.theme.status_bar,
        )
    };

    let counts = if state.loading {
        "fetching...".to_string()
    } else if state.articles.is_empty() {
        String::new()
    } else if app.controller.has_more() {
        format!("{} of {} (m for more)", state.articles.len(), state.total_results)
    } else {
        format!("{} of {}", state.articles.len(), state.total_results)
    };

    // Left text, right-aligned counts, single line
    let pad = (area.width as usize)
        .saturating_sub(text.chars().count())
        .saturating_sub(counts.chars().count())
        .saturating_sub(1);

    let line = Line::from(vec![
        Span::styled(text.into_owned(), style),
        Span::raw(" ".repeat(pad)),
        Span::styled(counts, app.theme.card_meta),
    ]);

    f.render_widget(Paragraph::new(line).style(app.theme.status_bar), area);
}
