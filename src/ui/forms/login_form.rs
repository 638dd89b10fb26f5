//! Login screen

use super::field_renderer::draw_field;
use super::FIELD_HEIGHT;
use crate::app::{App, PendingSubmit};
use crate::state::Form;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

const FORM_WIDTH: u16 = 44;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.login_form;

    let width = FORM_WIDTH.min(area.width);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let mut constraints = vec![Constraint::Min(0), Constraint::Length(2)];
    constraints.extend(form.fields().iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.extend([Constraint::Length(BUTTON_HEIGHT), Constraint::Min(0)]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "nave.rs",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );

    for (index, field) in form.fields().iter().enumerate() {
        draw_field(frame, chunks[2 + index], field, form.active_field() == index);
    }

    render_button(
        frame,
        chunks[2 + form.field_count()],
        "Entrar",
        "Entrando...",
        form.is_last_field_active(),
        app.is_submitting(PendingSubmit::Login),
    );
}
