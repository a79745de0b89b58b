//! Keypad legend: every calculator key with the terminal key that presses it.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::components::keybindings::KeybindingContext;
use crate::labels::{self, KeypadLabel};
use crate::theme::{Styles, UiConstants};

/// One legend cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCell {
    pub label: &'static str,
    pub key: String,
    pub implemented: bool,
}

/// Build the legend cells in keypad order
pub fn key_cells(keybinding_ctx: &KeybindingContext) -> Vec<KeyCell> {
    labels::keypad()
        .into_iter()
        .map(|KeypadLabel { label, command }| KeyCell {
            label,
            key: keybinding_ctx.key_for(&command).unwrap_or("").to_string(),
            implemented: command.is_implemented(),
        })
        .collect()
}

/// Render the keypad legend as a grid that fills the panel width
pub fn render_keypad(f: &mut Frame, area: Rect, keybinding_ctx: &KeybindingContext) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .title(" Keypad ");
    let inner = block.inner(area);

    let per_row = (inner.width / UiConstants::KEY_CELL_WIDTH).max(1) as usize;
    let cell_width = UiConstants::KEY_CELL_WIDTH as usize;

    let cells = key_cells(keybinding_ctx);
    let lines: Vec<Line> = cells
        .chunks(per_row)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|cell| {
                    let hint = format!("{:>4} ", cell.key);
                    let label_width = cell_width.saturating_sub(hint.chars().count());
                    [
                        Span::styled(hint, Styles::key_hint()),
                        Span::styled(
                            format!("{:<width$}", cell.label, width = label_width),
                            Styles::key_label(cell.implemented),
                        ),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
