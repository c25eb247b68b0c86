//! Application module.
//!
//! Contains the App struct, the synchronous event loop, and key handling.
//! Everything runs on the UI thread: poll a key event, mutate state, draw.

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct.
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
}

impl App {
    /// Create a new application instance around the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        info!(records = catalog.len(), "creating app");
        Self {
            state: AppState::new(catalog),
            ui_renderer: UiRenderer::new(),
        }
    }

    /// Read access to the application state (used by tests).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("starting main application loop");

        loop {
            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break; // Exit requested
                        }
                    }
                    // Ratatui re-measures the frame on the next draw
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            // Render UI
            terminal.draw(|f| self.ui_renderer.render(f, &self.state))?;
        }

        info!("application loop finished");
        Ok(())
    }

    /// Handle a keyboard event. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Ctrl+C always quits
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return true;
        }

        // Help overlay swallows input until dismissed
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_visible = false;
            }
            return false;
        }

        if key_event.code == KeyCode::Char('?') {
            self.state.help_visible = true;
            return false;
        }

        match self.state.mode {
            AppMode::PuppyList => self.handle_list_key(key_event),
            AppMode::PuppyDetails => self.handle_details_key(key_event),
        }
    }

    fn handle_list_key(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                debug!(selection = self.state.list_selection, "opening details");
                self.state.open_details();
            }
            KeyCode::Char('q') | KeyCode::Esc => return true,
            _ => {}
        }
        false
    }

    fn handle_details_key(&mut self, key_event: KeyEvent) -> bool {
        match key_event.code {
            // Platform-default back navigation: pop to the list screen
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                debug!("leaving details");
                self.state.close_details();
            }
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_opens_details_and_esc_returns() {
        let mut app = App::new(Catalog::standard());
        assert_eq!(app.state().mode, AppMode::PuppyList);

        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.state().mode, AppMode::PuppyDetails);
        assert_eq!(
            app.state().detail.as_ref().map(|d| d.breed_text().to_string()),
            Some("Labrador Retriever".to_string())
        );

        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.state().mode, AppMode::PuppyList);
        assert_eq!(app.state().list_selection, 1);
    }

    #[test]
    fn test_q_requests_exit_from_both_screens() {
        let mut app = App::new(Catalog::standard());
        assert!(app.handle_key_event(key(KeyCode::Char('q'))));

        let mut app = App::new(Catalog::standard());
        app.handle_key_event(key(KeyCode::Enter));
        assert!(app.handle_key_event(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_help_overlay_swallows_navigation() {
        let mut app = App::new(Catalog::standard());
        app.handle_key_event(key(KeyCode::Char('?')));
        assert!(app.state().help_visible);

        // Navigation keys are ignored while help is up
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.state().list_selection, 0);

        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.state().help_visible);
        assert_eq!(app.state().mode, AppMode::PuppyList);
    }
}
