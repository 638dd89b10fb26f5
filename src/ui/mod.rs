//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::submission::Route;
use components::{render_error_dialog, render_notice_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    // Draw main content based on current route
    match app.state.current_route {
        Route::Login => forms::draw_login(frame, main_area, app),
        Route::Home => home::draw(frame, main_area, app),
        Route::NewNaver => forms::draw_naver_create(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Overlays: the success modal takes precedence over queued alerts
    if let Some(notice) = &app.state.notice {
        render_notice_dialog(frame, &notice.title, &notice.message);
    } else if let Some(alert) = app.state.current_alert() {
        render_error_dialog(frame, alert);
    }
}
