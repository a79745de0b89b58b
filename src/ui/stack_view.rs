//! Register column formatting and rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::engine::StackEngine;
use crate::theme::Styles;

/// Labels of the left column, top to bottom
pub const REGISTER_LABELS: [&str; 5] = ["T:", "Z:", "Y:", "X:", "▹"];

/// Significant digits tried, most first, when a value must shrink to fit
const MAX_EXP_PRECISION: usize = 16;

/// Format a register value for a column `width` characters wide.
///
/// Plain decimal when it fits, scientific notation otherwise, with the
/// decimal point replaced by the engine's separator.
pub fn format_register(value: f64, separator: char, width: usize) -> String {
    let text = match value {
        v if v.is_nan() => return "NaN".to_string(),
        v if v.is_infinite() && v > 0.0 => return "∞".to_string(),
        v if v.is_infinite() => return "-∞".to_string(),
        v => {
            let plain = v.to_string();
            if plain.chars().count() <= width {
                plain
            } else {
                scientific(v, width)
            }
        }
    };

    if separator == '.' {
        text
    } else {
        text.replace('.', &separator.to_string())
    }
}

/// Shortest `{:e}` rendering, or fewer digits until it fits `width`
fn scientific(value: f64, width: usize) -> String {
    let shortest = format!("{:e}", value);
    if shortest.len() <= width {
        return shortest;
    }
    (0..MAX_EXP_PRECISION)
        .rev()
        .map(|precision| format!("{:.*e}", precision, value))
        .find(|text| text.len() <= width)
        .unwrap_or(shortest)
}

/// The entry as shown in a column `width` wide; long entries keep their tail
pub fn format_entry(entry: &str, width: usize) -> String {
    let len = entry.chars().count();
    if len <= width {
        return entry.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = entry.chars().skip(len - (width - 1)).collect();
    format!("…{}", tail)
}

/// The five value lines for a column `width` wide: T, Z, Y, X, entry
pub fn register_lines(engine: &StackEngine, width: usize) -> [String; 5] {
    let sep = engine.separator();
    [
        format_register(engine.t(), sep, width),
        format_register(engine.z(), sep, width),
        format_register(engine.y(), sep, width),
        format_register(engine.x(), sep, width),
        format_entry(engine.entry(), width),
    ]
}

/// Render the register panel
pub fn render_registers(f: &mut Frame, area: Rect, engine: &StackEngine) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .title(" Stack ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let labels: Vec<Line> = REGISTER_LABELS
        .iter()
        .map(|label| Line::styled(*label, Styles::register_label()))
        .collect();

    let values: Vec<Line> = register_lines(engine, columns[1].width as usize)
        .into_iter()
        .enumerate()
        .map(|(i, text)| match i {
            3 => Line::styled(text, Styles::register_x()),
            4 => Line::styled(text, Styles::entry()),
            _ => Line::styled(text, Styles::register_value()),
        })
        .collect();

    f.render_widget(Paragraph::new(labels), columns[0]);
    f.render_widget(
        Paragraph::new(values).alignment(Alignment::Right),
        columns[1],
    );
}
