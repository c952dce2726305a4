//! Article card list.
//!
//! Each article renders as a three-line card: title, meta line (source,
//! relative time, author), and a cleaned one-line description. All text
//! from the source passes through `sanitize_for_display` before touching
//! the terminal.

use crate::app::App;
use crate::source::Article;
use crate::theme::Palette;
use crate::util::{
    clean_description, relative_time, sanitize_for_display, source_domain, truncate_to_width,
};
use chrono::Utc;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the article list panel.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let state = app.controller.state();

    let title = if app.controller.is_search_mode() {
        format!(" Results for \"{}\" ", sanitize_for_display(&state.query))
    } else {
        format!(" {} headlines ", state.category.label())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border)
        .title(title);

    if state.articles.is_empty() {
        let message = if state.loading {
            format!(
                "{} {}",
                SPINNER[app.spinner_frame % SPINNER.len()],
                if app.controller.is_search_mode() {
                    "Searching..."
                } else {
                    "Loading headlines..."
                }
            )
        } else if state.error.is_some() {
            "Fetch failed. Press r to retry.".to_string()
        } else if app.controller.is_search_mode() {
            format!("No results for \"{}\"", sanitize_for_display(&state.query))
        } else {
            "No articles. Press r to refresh.".to_string()
        };

        let empty = Paragraph::new(message)
            .style(app.theme.empty_state)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let now = Utc::now();
    let card_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = state
        .articles
        .iter()
        .map(|article| card(article, card_width, &app.theme, now))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(app.theme.card_selected);

    let mut list_state = ListState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Build one article card.
fn card(
    article: &Article,
    width: usize,
    theme: &Palette,
    now: chrono::DateTime<Utc>,
) -> ListItem<'static> {
    let title = sanitize_for_display(&article.title);
    let title_line = Line::from(Span::styled(
        truncate_to_width(&title, width).into_owned(),
        theme.card_title,
    ));

    let mut meta = article.source_name.to_string();
    let time = relative_time(article.published, now);
    if !time.is_empty() {
        meta.push_str(" • ");
        meta.push_str(&time);
    }
    if let Some(author) = &article.author {
        meta.push_str(" • ");
        meta.push_str(author);
    }
    if let Some(domain) = source_domain(&article.url) {
        meta.push_str(" • ");
        meta.push_str(&domain);
    }
    let meta = sanitize_for_display(&meta);
    let meta_line = Line::from(Span::styled(
        truncate_to_width(&meta, width).into_owned(),
        theme.card_meta,
    ));

    let mut lines = vec![title_line, meta_line];

    if let Some(description) = &article.description {
        let cleaned = clean_description(&sanitize_for_display(description));
        if !cleaned.is_empty() {
            lines.push(Line::from(Span::styled(
                truncate_to_width(&cleaned, width).into_owned(),
                theme.card_description,
            )));
        }
    }

    // Blank separator between cards
    lines.push(Line::from(""));

    ListItem::new(lines)
}
