//! Title, status line and nav bar rendering

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar
pub fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let title_widget = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(title_widget, area);
}

/// Render the status line, or the variable prompt while one is open
pub fn render_status(f: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.mode.is_prompt() {
        Line::from(vec![
            Span::styled(
                format!("{}: ", state.mode.title()),
                Style::default().fg(Colors::SECONDARY),
            ),
            Span::styled("press a letter, Esc to cancel", Styles::text_muted()),
        ])
    } else {
        Line::from(Span::styled(
            state.status_message.clone(),
            Theme::status_style(state.status_kind),
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans = Vec::new();
    for item in keybinding_ctx.get_nav_items(&state.mode) {
        spans.push(Span::styled(format!(" {} ", item.key_display), Styles::key_hint()));
        spans.push(Span::styled(format!("{}  ", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let area = f.area();
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, area, state.help_scroll);
}
