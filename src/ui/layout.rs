//! Layout components (content area, status bar)

use crate::app::App;
use crate::submission::Route;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar and return the content area
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Key hints for the current route
fn hints(route: Route) -> &'static str {
    match route {
        Route::Login => "Tab: next field | Enter: entrar | Ctrl+C: sair",
        Route::Home => "n: novo naver | l: sair da conta | q: sair",
        Route::NewNaver => "Tab: next field | Ctrl+S: salvar | Esc: voltar",
    }
}

/// Draw the status bar on the last terminal line
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_route.path()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if let Some(message) = &app.state.status_message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Yellow)));
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        hints(app.state.current_route),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
