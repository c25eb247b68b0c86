//! Centralized theme and styling for the TUI.
//!
//! Single source of truth for colors and pre-built styles so the screens
//! stay visually consistent.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application.
pub struct Colors;

impl Colors {
    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/hint text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Sprite/art color
    pub const ART: Color = Color::LightYellow;

    /// Selected list row background
    pub const SELECTED_BG: Color = Color::Blue;

    /// Gender tag colors
    pub const FEMALE: Color = Color::LightMagenta;
    pub const MALE: Color = Color::LightBlue;
}

/// Pre-built styles for common UI elements.
pub struct Styles;

impl Styles {
    /// Screen title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Panel border style
    pub fn border() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// Highlighted list row style
    pub fn selected_item() -> Style {
        Style::default()
            .bg(Colors::SELECTED_BG)
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Breed name emphasis
    pub fn breed() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Nav bar / key hint style
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// ASCII-art sprite style
    pub fn sprite() -> Style {
        Style::default().fg(Colors::ART)
    }
}
