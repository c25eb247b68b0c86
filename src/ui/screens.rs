//! Screen rendering: the puppy list and the puppy details card.

use super::header::HeaderRenderer;
use crate::app::AppState;
use crate::assets::{self, Sprite};
use crate::catalog::Gender;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

fn gender_color(gender: Gender) -> ratatui::style::Color {
    match gender {
        Gender::Female => Colors::FEMALE,
        Gender::Male => Colors::MALE,
    }
}

/// Render the list screen in the given area.
pub fn render_puppy_list(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Content
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Puppy List");

    // Split content into the catalog list and a preview panel
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    let items: Vec<ListItem> = state
        .catalog
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let selected = index == state.list_selection;
            let prefix = if selected { "▸ " } else { "  " };
            let line = Line::from(vec![
                Span::raw(prefix.to_string()),
                Span::styled(
                    record.breed_name.clone(),
                    if selected {
                        Styles::breed()
                    } else {
                        Style::default().fg(Colors::FG_PRIMARY)
                    },
                ),
                Span::styled(
                    format!("  {} ", record.age),
                    Style::default().fg(Colors::FG_SECONDARY),
                ),
                Span::styled(
                    format!("({})", record.gender),
                    Style::default().fg(gender_color(record.gender)),
                ),
            ]);
            let item = ListItem::new(line);
            if selected {
                item.style(Styles::selected_item())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Puppies ")
            .title_style(Styles::title())
            .border_style(Styles::border()),
    );
    f.render_widget(list, content_chunks[0]);

    // Preview panel: sprite and a teaser of the selected record
    let preview = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .title_style(Styles::title())
        .border_style(Styles::border());
    let inner = preview.inner(content_chunks[1]);
    f.render_widget(preview, content_chunks[1]);

    if let Some(record) = state.selected_record() {
        let preview_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(3)])
            .split(inner);

        render_sprite(f, preview_chunks[0], assets::resolve_or_placeholder(record.image));

        let teaser = Paragraph::new(record.details.clone())
            .style(Style::default().fg(Colors::FG_SECONDARY))
            .wrap(Wrap { trim: true });
        f.render_widget(teaser, preview_chunks[1]);
    }
}

/// Render the detail screen in the given area.
///
/// All four text fields come through the route's stringify accessors, so an
/// absent field shows the literal "null".
pub fn render_puppy_details(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Content
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Puppy Details");

    let Some(route) = state.detail.as_ref() else {
        // Detail mode without a route; nothing sensible to draw
        let empty = Paragraph::new("No puppy selected")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::FG_MUTED));
        f.render_widget(empty, chunks[2]);
        return;
    };

    let card = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", route.breed_text()))
        .title_style(Styles::title())
        .border_style(Styles::border());
    let inner = card.inner(chunks[2]);
    f.render_widget(card, chunks[2]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(inner);

    render_sprite(f, content_chunks[0], assets::resolve_or_placeholder(route.image));

    let mut lines = vec![
        Line::from(Span::styled(route.breed_text().to_string(), Styles::breed())),
        Line::from(Span::styled(
            route.age_text().to_string(),
            Style::default().fg(Colors::FG_PRIMARY),
        )),
        Line::from(Span::styled(
            route.gender_text().to_string(),
            Style::default().fg(Colors::FG_PRIMARY),
        )),
        Line::default(),
    ];
    lines.push(Line::from(Span::styled(
        route.details_text().to_string(),
        Style::default().fg(Colors::FG_SECONDARY),
    )));

    let fields = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(fields, content_chunks[1]);
}

/// Render an ASCII-art sprite in the given area.
fn render_sprite(f: &mut Frame, area: Rect, sprite: &Sprite) {
    let lines: Vec<Line> = sprite
        .lines
        .iter()
        .map(|line| Line::from(Span::styled(*line, Styles::sprite())))
        .collect();

    let art = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(art, area);
}
