//! Home screen shown after signing in

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let who = app.state.signed_in_email.as_deref().unwrap_or("naver");

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "nave.rs",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Olá, {who}")),
        Line::from(""),
        Line::from(vec![
            Span::styled("n", Style::default().fg(Color::Cyan)),
            Span::raw(" adicionar naver   "),
            Span::styled("l", Style::default().fg(Color::Cyan)),
            Span::raw(" sair da conta   "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" sair"),
        ]),
    ];

    let block = Block::default()
        .title(" Navers ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
