//! Help overlay component
//!
//! Displays context-sensitive help in a centered popup over the calculator.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles, UiConstants};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections, mode),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], mode: &AppMode) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(mode.title().to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(Span::styled(
            "Dimmed keys are not implemented yet.",
            Styles::text_muted(),
        )));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", section.title),
                Styles::section(),
            )));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<8}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    /// Number of content lines
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Render the help overlay centered in `parent`, starting at line `scroll`.
    ///
    /// The offset is clamped so the last page stays full.
    pub fn render(&self, f: &mut Frame, parent: Rect, scroll: u16) {
        let area = centered_rect(
            UiConstants::HELP_WIDTH_PCT,
            UiConstants::HELP_HEIGHT_PCT,
            parent,
        );

        let block = Block::default()
            .title(" Help ")
            .title_bottom(Line::from(" ↑/↓ PgUp/PgDn scroll, ? or Esc to close ").centered())
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::panel_bg());

        let visible = block.inner(area).height as usize;
        let max_scroll =
            u16::try_from(self.content.len().saturating_sub(visible)).unwrap_or(u16::MAX);

        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .scroll((scroll.min(max_scroll), 0));

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
