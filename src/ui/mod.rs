//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title, status line, nav bar and help overlay
//! - `stack_view` - The T/Z/Y/X register column and entry line
//! - `keypad` - Legend of calculator keys and their terminal keys
//!
//! The renderer only reads the engine; all mutation goes through the app.

mod header;
pub mod keypad;
pub mod stack_view;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::engine::StackEngine;
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Screen areas for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub registers: Rect,
    pub keypad: Rect,
    pub status: Rect,
    pub nav_bar: Rect,
}

impl ScreenLayout {
    /// Split the terminal area
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::TITLE_HEIGHT),
                Constraint::Min(7),
                Constraint::Length(UiConstants::STATUS_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(UiConstants::REGISTER_PANEL_WIDTH),
                Constraint::Min(UiConstants::KEY_CELL_WIDTH + 2),
            ])
            .split(rows[1]);

        Self {
            title: rows[0],
            registers: body[0],
            keypad: body[1],
            status: rows[2],
            nav_bar: rows[3],
        }
    }
}

/// Main UI renderer
pub struct UiRenderer {
    title: String,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            title: format!("rpntui {} - RPN calculator", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Draw one frame
    pub fn render(
        &self,
        f: &mut Frame,
        engine: &StackEngine,
        state: &AppState,
        keybinding_ctx: &KeybindingContext,
    ) {
        let layout = ScreenLayout::compute(f.area());

        header::render_title(f, layout.title, &self.title);
        stack_view::render_registers(f, layout.registers, engine);
        keypad::render_keypad(f, layout.keypad, keybinding_ctx);
        header::render_status(f, layout.status, state);
        header::render_nav_bar(f, state, keybinding_ctx, layout.nav_bar);

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
