//! Capabilities the pipelines drive but do not implement

use crate::validation::{FieldErrors, FieldValues};

/// Screens the application can navigate between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Home,
    NewNaver,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Home => "/home",
            Self::NewNaver => "/navers/new",
        }
    }
}

/// Access to a form's values and error annotations
pub trait FormController {
    /// Snapshot of the current raw values
    fn values(&self) -> FieldValues;

    /// Replace all error annotations
    fn set_errors(&mut self, errors: &FieldErrors);

    fn clear_errors(&mut self) {
        self.set_errors(&FieldErrors::default());
    }
}

pub trait Navigator {
    fn go_to(&mut self, route: Route);
    fn go_back(&mut self);
}

/// User-visible notifications
pub trait Notifier {
    /// Success notification with a title
    fn notify(&mut self, title: &str, message: &str);

    /// Generic failure message not tied to any field
    fn alert(&mut self, message: &str);
}
