//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used by the calculator screens.
//!
//! # Usage
//! ```rust
//! use rpntui::theme::{Colors, Styles, Theme, StatusKind};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let error_style = Theme::status_style(StatusKind::Error);
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Panel background for overlays
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Borders, titles, key hints
    pub const PRIMARY: Color = Color::Cyan;

    /// Emphasis, the entry line
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // Calculator Colors
    // -------------------------------------------------------------------------

    /// Register names in the left column (T:, Z:, Y:, X:)
    pub const REGISTER_LABEL: Color = Color::Cyan;

    /// Register values
    pub const REGISTER_VALUE: Color = Color::White;

    /// The X register is highlighted
    pub const REGISTER_X: Color = Color::LightGreen;

    /// Keys whose operation is evaluated
    pub const KEY_ACTIVE: Color = Color::White;

    /// Keys that are recognised but not implemented
    pub const KEY_PLACEHOLDER: Color = Color::DarkGray;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header inside the help overlay
    pub fn section() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// Overlay background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    pub fn register_label() -> Style {
        Style::default().fg(Colors::REGISTER_LABEL)
    }

    pub fn register_value() -> Style {
        Style::default().fg(Colors::REGISTER_VALUE)
    }

    pub fn register_x() -> Style {
        Style::default()
            .fg(Colors::REGISTER_X)
            .add_modifier(Modifier::BOLD)
    }

    /// The in-progress entry line
    pub fn entry() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint next to a keypad label
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Keypad label, dimmed when the operation is a placeholder
    pub fn key_label(implemented: bool) -> Style {
        if implemented {
            Style::default().fg(Colors::KEY_ACTIVE)
        } else {
            Style::default()
                .fg(Colors::KEY_PLACEHOLDER)
                .add_modifier(Modifier::CROSSED_OUT)
        }
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Kind of message shown on the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Warning,
    Error,
}

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Get style for a status line message
    pub fn status_style(kind: StatusKind) -> Style {
        match kind {
            StatusKind::Info => Style::default().fg(Colors::FG_SECONDARY),
            StatusKind::Warning => Style::default().fg(Colors::WARNING),
            StatusKind::Error => Style::default()
                .fg(Colors::ERROR)
                .add_modifier(Modifier::BOLD),
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Title bar height (bordered)
    pub const TITLE_HEIGHT: u16 = 3;

    /// Status line height
    pub const STATUS_HEIGHT: u16 = 1;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Register panel width, including borders
    pub const REGISTER_PANEL_WIDTH: u16 = 36;

    /// Width of one keypad cell
    pub const KEY_CELL_WIDTH: u16 = 14;

    /// Help overlay width percentage
    pub const HELP_WIDTH_PCT: u16 = 60;

    /// Help overlay height percentage
    pub const HELP_HEIGHT_PCT: u16 = 80;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles() {
        let _ = Styles::title();
        let _ = Styles::register_x();
        let _ = Styles::key_label(false);
    }

    #[test]
    fn test_status_styles_differ() {
        assert_ne!(
            Theme::status_style(StatusKind::Info),
            Theme::status_style(StatusKind::Error)
        );
    }
}
