//! Header and common widget rendering.
//!
//! ASCII art header, screen titles, the bottom nav bar, and the help
//! overlay.

use crate::app::{AppMode, AppState};
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Header renderer containing the ASCII art banner.
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer.
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the ASCII art banner.
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a title section.
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Styles::title());
        f.render_widget(title_widget, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        [
            r" ____                               _     _     _   ",
            r"|  _ \ _   _ _ __  _ __  _   _     | |   (_)___| |_ ",
            r"| |_) | | | | '_ \| '_ \| | | |    | |   | / __| __|",
            r"|  __/| |_| | |_) | |_) | |_| |    | |___| \__ \ |_ ",
            r"|_|    \__,_| .__/| .__/ \__, |    |_____|_|___/\__|",
            r"            |_|   |_|    |___/                      ",
        ]
        .iter()
        .map(|line| {
            Line::from(vec![Span::styled(
                *line,
                Style::default().fg(Colors::PRIMARY),
            )])
        })
        .collect()
    }
}

/// Render the one-line navigation bar with per-screen key hints.
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let hints = match state.mode {
        AppMode::PuppyList => "↑/↓ select   Enter details   ? help   q quit",
        AppMode::PuppyDetails => "Esc/Backspace back   ? help   q quit",
    };

    let nav = Paragraph::new(format!(" {}  |  {}", state.status_message, hints))
        .style(Styles::nav_hint());
    f.render_widget(nav, area);
}

/// Render the help overlay centered on top of everything.
pub fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let area = centered_rect(50, 12, f.area());
    f.render_widget(Clear, area);

    let lines: Vec<Line> = help_lines(&state.mode)
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<16}", keys), Styles::breed()),
                Span::styled(*action, Style::default().fg(Colors::FG_SECONDARY)),
            ])
        })
        .collect();

    let overlay = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_style(Styles::title())
            .border_style(Styles::border()),
    );
    f.render_widget(overlay, area);
}

fn help_lines(mode: &AppMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        AppMode::PuppyList => &[
            ("Up/k, Down/j", "move the selection"),
            ("Enter/Right/l", "open puppy details"),
            ("?", "toggle this overlay"),
            ("q, Esc", "quit"),
        ],
        AppMode::PuppyDetails => &[
            ("Esc/Backspace", "back to the list"),
            ("Left/h", "back to the list"),
            ("?", "toggle this overlay"),
            ("q", "quit"),
        ],
    }
}

/// Center a fixed-size rect inside `area`, clamped to its bounds.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
