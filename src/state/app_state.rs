//! Application state definitions

use crate::submission::{Navigator, Notifier, Route};
use std::collections::VecDeque;

/// Success notification shown as a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Screen currently shown
    pub current_route: Route,
    /// Routes to return to with `go_back`
    pub route_history: Vec<Route>,
    /// Success modal, if open
    pub notice: Option<Notice>,
    /// Pending generic failure messages, oldest first
    pub alerts: VecDeque<String>,
    /// Email of the signed-in user
    pub signed_in_email: Option<String>,
    /// One-line message for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Alert currently displayed, if any
    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Whether a modal or alert is covering the current screen
    pub fn has_overlay(&self) -> bool {
        self.notice.is_some() || !self.alerts.is_empty()
    }

    /// Jump to a route and forget the history, e.g. after signing out
    pub fn reset_to(&mut self, route: Route) {
        self.route_history.clear();
        self.current_route = route;
    }
}

impl Navigator for AppState {
    fn go_to(&mut self, route: Route) {
        tracing::debug!(from = self.current_route.path(), to = route.path(), "navigate");
        self.route_history.push(self.current_route);
        self.current_route = route;
    }

    fn go_back(&mut self) {
        if let Some(route) = self.route_history.pop() {
            tracing::debug!(from = self.current_route.path(), to = route.path(), "navigate back");
            self.current_route = route;
        }
    }
}

impl Notifier for AppState {
    fn notify(&mut self, title: &str, message: &str) {
        self.notice = Some(Notice {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push_back(message.to_string());
    }
}
