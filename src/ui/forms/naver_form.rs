//! New-naver form

use super::field_renderer::draw_field;
use super::FIELD_HEIGHT;
use crate::app::{App, PendingSubmit};
use crate::state::Form;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the form as two columns of three fields, like the web page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.naver_form;

    let block = Block::default()
        .title(" < Adicionar Naver ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    for (index, field) in form.fields().iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(2), // Gap
                Constraint::Fill(1),
            ])
            .split(rows[index / 2]);
        draw_field(frame, columns[(index % 2) * 2], field, form.active_field() == index);
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(rows[3]);

    render_button(
        frame,
        button_row[1],
        "Salvar",
        "Salvando...",
        form.is_last_field_active(),
        app.is_submitting(PendingSubmit::Naver),
    );
}
