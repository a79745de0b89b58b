//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop
//!
//! The app owns the engine outright. Every key is resolved to an action,
//! commands go to the engine, and the next frame re-reads its state.

mod state;

pub use state::{AppMode, AppState};

use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::CalcConfig;
use crate::engine::{Command, StackEngine};
use crate::error::{CalcError, Result};
use crate::theme::StatusKind;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for input before redrawing anyway
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Lines moved by PageUp/PageDown in the help overlay
const HELP_PAGE: u16 = 10;

/// Main application struct
pub struct App {
    engine: StackEngine,
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for key resolution and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &CalcConfig) -> Self {
        info!("Creating new App instance");

        let state = AppState {
            help_visible: config.show_help_on_start,
            ..AppState::default()
        };

        Self {
            engine: config.engine(),
            state,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn engine(&self) -> &StackEngine {
        &self.engine
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get reference to keybinding context
    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
        self.state.help_scroll = 0;
    }

    /// Run the main loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal
                .draw(|f| {
                    self.ui_renderer
                        .render(f, &self.engine, &self.state, &self.keybinding_context)
                })
                .map_err(|e| CalcError::terminal(format!("Failed to draw frame: {}", e)))?;

            if !crossterm::event::poll(POLL_INTERVAL)? {
                continue;
            }

            match crossterm::event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if self.handle_key_event(key_event) {
                        break;
                    }
                }
                // Redrawn at the top of the loop
                Event::Resize(width, height) => debug!("Resized to {}x{}", width, height),
                _ => {}
            }
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Handle one key press. Returns `true` when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if self.state.help_visible {
            return self.handle_help_key(key_event);
        }

        let mode = self.state.mode;
        let action = self
            .keybinding_context
            .resolve(&mode, &key_event)
            .cloned();

        // Prompts take the next character as a variable name
        if mode.is_prompt() && action.is_none() {
            self.handle_prompt_key(key_event);
            return false;
        }

        let Some(action) = action else {
            debug!("Unbound key {:?}", key_event.code);
            return false;
        };

        match action {
            KeyAction::Calc(command) => self.execute(command),
            KeyAction::StorePrompt => self.state.mode = AppMode::StoreName,
            KeyAction::RecallPrompt => self.state.mode = AppMode::RecallName,
            KeyAction::Help => self.toggle_help(),
            KeyAction::Cancel => {
                if mode.is_prompt() {
                    self.state.mode = AppMode::Normal;
                    self.state.set_status(StatusKind::Info, "Cancelled");
                }
            }
            KeyAction::Quit => {
                info!("Quit requested");
                return true;
            }
        }

        false
    }

    /// While help is open: arrow keys scroll, help/cancel close, quit quits
    fn handle_help_key(&mut self, key_event: KeyEvent) -> bool {
        let last_line = HelpOverlay::new(&self.state.mode, &self.keybinding_context)
            .len()
            .saturating_sub(1);
        let last_line = u16::try_from(last_line).unwrap_or(u16::MAX);
        let scroll = self.state.help_scroll;

        match key_event.code {
            KeyCode::Up => self.state.help_scroll = scroll.saturating_sub(1),
            KeyCode::Down => self.state.help_scroll = scroll.saturating_add(1).min(last_line),
            KeyCode::PageUp => self.state.help_scroll = scroll.saturating_sub(HELP_PAGE),
            KeyCode::PageDown => {
                self.state.help_scroll = scroll.saturating_add(HELP_PAGE).min(last_line)
            }
            KeyCode::Home => self.state.help_scroll = 0,
            KeyCode::End => self.state.help_scroll = last_line,
            _ => match self
                .keybinding_context
                .resolve(&self.state.mode, &key_event)
                .cloned()
            {
                Some(KeyAction::Help | KeyAction::Cancel) => self.toggle_help(),
                Some(KeyAction::Quit) => return true,
                _ => {}
            },
        }

        false
    }

    /// Read a variable name while a store/recall prompt is open
    fn handle_prompt_key(&mut self, key_event: KeyEvent) {
        let KeyCode::Char(c) = key_event.code else {
            return;
        };
        if !c.is_alphanumeric() {
            return;
        }

        let name = c.to_string();
        let command = match self.state.mode {
            AppMode::StoreName => Command::Store(name),
            AppMode::RecallName => Command::Recall(name),
            AppMode::Normal => return,
        };

        self.state.mode = AppMode::Normal;
        self.execute(command);
    }

    /// Send a command to the engine and report the outcome
    fn execute(&mut self, command: Command) {
        let label = command.to_string();
        match self.engine.execute(&command) {
            Ok(dispatch) => self.state.record_dispatch(&label, dispatch),
            Err(e) => self.state.set_status(StatusKind::Error, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Dispatch;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, keys: &str) {
        for c in keys.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_enter() {
        let mut app = App::new(&CalcConfig::default());
        type_str(&mut app, "52");
        assert_eq!(app.engine().entry(), "52");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().x(), 52.0);
        assert_eq!(app.engine().entry(), "");
    }

    #[test]
    fn test_arithmetic_keys() {
        let mut app = App::new(&CalcConfig::default());
        type_str(&mut app, "3");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "4");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "*");
        assert_eq!(app.engine().x(), 12.0);
    }

    #[test]
    fn test_placeholder_key_sets_warning() {
        let mut app = App::new(&CalcConfig::default());
        type_str(&mut app, "^");
        assert_eq!(app.state().last_dispatch, Some(Dispatch::NotImplemented("pow")));
        assert_eq!(app.state().status_kind, StatusKind::Warning);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let mut app = App::new(&CalcConfig::default());
        type_str(&mut app, "n");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().status_kind, StatusKind::Error);
        assert_eq!(app.engine().entry(), "-");
    }

    #[test]
    fn test_store_prompt_reads_name() {
        let mut app = App::new(&CalcConfig::default());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(app.state().mode, AppMode::StoreName);
        type_str(&mut app, "A");
        assert_eq!(app.state().mode, AppMode::Normal);
        assert_eq!(app.state().last_dispatch, Some(Dispatch::NotImplemented("sto")));
    }

    #[test]
    fn test_prompt_cancel() {
        let mut app = App::new(&CalcConfig::default());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().mode, AppMode::Normal);
        assert!(app.state().last_dispatch.is_none());
    }

    #[test]
    fn test_help_swallows_calculator_keys() {
        let mut app = App::new(&CalcConfig::default());
        type_str(&mut app, "?");
        assert!(app.state().help_visible);
        type_str(&mut app, "7");
        assert_eq!(app.engine().entry(), "");
        press(&mut app, KeyCode::Esc);
        assert!(!app.state().help_visible);
    }

    #[test]
    fn test_help_scrolls_within_content() {
        let mut app = App::new(&CalcConfig::default());
        type_str(&mut app, "?");
        let last_line = HelpOverlay::new(&AppMode::Normal, app.keybinding_context()).len() as u16 - 1;

        press(&mut app, KeyCode::Up);
        assert_eq!(app.state().help_scroll, 0);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state().help_scroll, 2);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.state().help_scroll, 12);
        press(&mut app, KeyCode::End);
        assert_eq!(app.state().help_scroll, last_line);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state().help_scroll, last_line);

        // Reopening starts from the top
        type_str(&mut app, "?");
        type_str(&mut app, "?");
        assert!(app.state().help_visible);
        assert_eq!(app.state().help_scroll, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&CalcConfig::default());
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }
}
