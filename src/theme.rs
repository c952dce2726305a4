//! Theme system for the TUI.
//!
//! Semantic color roles mapped to ratatui `Style` values, with a Dark and
//! a Light palette selected by the `theme` config key.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive). Unknown
    /// names fall back to Dark with a warning so a typo in the config
    /// never blocks startup.
    pub fn from_config(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Self::Dark,
            "light" => Self::Light,
            other => {
                tracing::warn!(theme = %other, "Unknown theme name, falling back to dark");
                Self::Dark
            }
        }
    }

    /// Build the palette for this variant.
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette::dark(),
            Self::Light => Palette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Palette — semantic roles to Style
// ============================================================================

/// Styles for every visual element in the UI.
#[derive(Debug, Clone)]
pub struct Palette {
    // -- Category tab bar --
    pub tab_normal: Style,
    pub tab_active: Style,

    // -- Article cards --
    pub card_title: Style,
    pub card_selected: Style,
    pub card_meta: Style,
    pub card_description: Style,

    // -- Search --
    pub search_prompt: Style,
    pub search_input: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub status_error: Style,
    pub status_info: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,

    // -- Misc --
    pub empty_state: Style,
    pub help_key: Style,
    pub help_text: Style,
}

impl Palette {
    fn dark() -> Self {
        Self {
            tab_normal: Style::default().fg(Color::Gray),
            tab_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            card_title: Style::default().add_modifier(Modifier::BOLD),
            card_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            card_meta: Style::default().fg(Color::DarkGray),
            card_description: Style::default().fg(Color::Gray),

            search_prompt: Style::default().fg(Color::Yellow),
            search_input: Style::default(),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            status_error: Style::default().fg(Color::Red),
            status_info: Style::default().fg(Color::Cyan),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),

            empty_state: Style::default().fg(Color::DarkGray),
            help_key: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            help_text: Style::default(),
        }
    }

    fn light() -> Self {
        Self {
            tab_normal: Style::default().fg(Color::DarkGray),
            tab_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_selected: Style::default().bg(Color::Blue).fg(Color::White),
            card_meta: Style::default().fg(Color::DarkGray),
            card_description: Style::default().fg(Color::DarkGray),

            search_prompt: Style::default().fg(Color::Magenta),
            search_input: Style::default().fg(Color::Black),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            status_error: Style::default().fg(Color::Red),
            status_info: Style::default().fg(Color::Blue),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),

            empty_state: Style::default().fg(Color::DarkGray),
            help_key: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            help_text: Style::default().fg(Color::Black),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
