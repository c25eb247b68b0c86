//! User interface rendering module.
//!
//! Organized into submodules:
//! - `header` - banner, titles, nav bar, help overlay
//! - `screens` - the puppy list and puppy details screens

mod header;
mod screens;

use crate::app::{AppMode, AppState};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub use header::HeaderRenderer;

/// UI renderer for the application.
///
/// Entry point for all rendering; delegates to the screen submodules based
/// on the current mode.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer.
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state.
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        // Main layout with the nav bar pinned to the bottom row
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        match state.mode {
            AppMode::PuppyList => {
                screens::render_puppy_list(f, state, content_area, &self.header);
            }
            AppMode::PuppyDetails => {
                screens::render_puppy_details(f, state, content_area, &self.header);
            }
        }

        header::render_nav_bar(f, state, nav_bar_area);

        // Help overlay goes on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state);
        }
    }
}
