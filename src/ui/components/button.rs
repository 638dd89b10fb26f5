//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a submit button; a busy button is dimmed and shows `busy_label`
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    busy_label: &str,
    is_focused: bool,
    is_busy: bool,
) {
    let color = if is_busy {
        Color::DarkGray
    } else if is_focused {
        Color::Cyan
    } else {
        Color::White
    };

    let mut text_style = Style::default().fg(color);
    if is_focused && !is_busy {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let content = if is_busy { busy_label } else { label };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .style(text_style)
            .block(block),
        area,
    );
}
