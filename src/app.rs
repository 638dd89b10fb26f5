//! Application state and core logic

use crate::api::{ApiClient, AuthService, NaverService};
use crate::config::AppConfig;
use crate::state::{AppState, Form, FormField, LoginForm, NaverForm};
use crate::submission::{
    CreateNaverAction, CreateNaverSubmission, LoginAction, LoginSubmission, Navigator, Route,
    SubmissionOutcome,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Form submission queued by a key press, run after the next draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingSubmit {
    Login,
    Naver,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded configuration
    pub config: AppConfig,
    /// Login form values and errors
    pub login_form: LoginForm,
    /// New-naver form values and errors
    pub naver_form: NaverForm,
    /// Sign-in pipeline
    pub login: LoginSubmission,
    /// Naver creation pipeline
    pub create_naver: CreateNaverSubmission,
    auth: Arc<dyn AuthService>,
    pending_submit: Option<PendingSubmit>,
    /// Whether config changes are written to disk
    persist_config: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured API
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Arc::new(ApiClient::new(
            &config.api_base_url(),
            config.request_timeout(),
        )?);
        tracing::info!(api = client.base_url(), "using Navedex API");

        let mut app = Self::with_services(config, client.clone(), client);
        app.persist_config = true;
        Ok(app)
    }

    /// Create an App over arbitrary service implementations
    pub fn with_services(
        config: AppConfig,
        auth: Arc<dyn AuthService>,
        navers: Arc<dyn NaverService>,
    ) -> Self {
        let login_form = match config.last_email.as_deref() {
            Some(email) => LoginForm::with_email(email),
            None => LoginForm::new(),
        };

        Self {
            state: AppState::default(),
            config,
            login_form,
            naver_form: NaverForm::new(),
            login: LoginSubmission::new(LoginAction::new(auth.clone())),
            create_naver: CreateNaverSubmission::new(CreateNaverAction::new(navers)),
            auth,
            pending_submit: None,
            persist_config: false,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission is queued for the next draw
    pub fn has_pending_submit(&self) -> bool {
        self.pending_submit.is_some()
    }

    /// Whether `form` has a submission queued or in flight
    pub fn is_submitting(&self, form: PendingSubmit) -> bool {
        let in_flight = match form {
            PendingSubmit::Login => self.login.is_loading(),
            PendingSubmit::Naver => self.create_naver.is_loading(),
        };
        in_flight || self.pending_submit == Some(form)
    }

    /// Run the submission queued by the last key press, if any
    pub async fn run_pending_submit(&mut self) {
        match self.pending_submit.take() {
            Some(PendingSubmit::Login) => self.submit_login().await,
            Some(PendingSubmit::Naver) => self.submit_naver().await,
            None => {}
        }
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.has_overlay() {
            self.handle_overlay_key(key);
            return Ok(());
        }

        match self.state.current_route {
            Route::Login => self.handle_login_key(key),
            Route::Home => self.handle_home_key(key).await,
            Route::NewNaver => self.handle_naver_key(key),
        }
        Ok(())
    }

    /// Dismiss the success modal or the oldest alert
    fn handle_overlay_key(&mut self, key: KeyEvent) {
        if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            return;
        }
        if self.state.dismiss_notice().is_some() {
            // The naver was saved; start over with an empty form
            self.naver_form.reset();
            self.create_naver.reset();
        } else {
            self.state.dismiss_alert();
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter if self.login_form.is_last_field_active() => {
                self.pending_submit = Some(PendingSubmit::Login)
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => self.login_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.login_form.prev_field(),
            _ => edit_field(self.login_form.get_active_field_mut(), key),
        }
    }

    async fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => self.state.go_to(Route::NewNaver),
            KeyCode::Char('l') => self.sign_out().await,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_naver_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.go_back(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.pending_submit = Some(PendingSubmit::Naver)
            }
            KeyCode::Enter if self.naver_form.is_last_field_active() => {
                self.pending_submit = Some(PendingSubmit::Naver)
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => self.naver_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.naver_form.prev_field(),
            _ => edit_field(self.naver_form.get_active_field_mut(), key),
        }
    }

    /// Submit the login form
    async fn submit_login(&mut self) {
        let outcome = self
            .login
            .submit(&mut self.login_form, &mut self.state)
            .await;

        match outcome {
            SubmissionOutcome::Success(session) => {
                self.login_form.password_mut().clear();
                self.state.status_message = Some(format!("Logado como {}", session.email));
                self.state.signed_in_email = Some(session.email.clone());
                self.remember_email(session.email);
            }
            SubmissionOutcome::ValidationFailure(errors) => {
                self.state.status_message = Some(format!("{} campo(s) inválido(s)", errors.len()));
            }
            SubmissionOutcome::RemoteFailure(_) | SubmissionOutcome::Busy => {}
        }
    }

    /// Submit the new-naver form
    async fn submit_naver(&mut self) {
        let outcome = self
            .create_naver
            .submit(&mut self.naver_form, &mut self.state)
            .await;

        match outcome {
            SubmissionOutcome::Success(naver) => {
                self.state.status_message = Some(format!("{} cadastrado", naver.name));
            }
            SubmissionOutcome::ValidationFailure(errors) => {
                self.state.status_message = Some(format!("{} campo(s) inválido(s)", errors.len()));
            }
            SubmissionOutcome::RemoteFailure(_) | SubmissionOutcome::Busy => {}
        }
    }

    async fn sign_out(&mut self) {
        self.auth.sign_out().await;
        self.state.signed_in_email = None;
        self.state.status_message = None;
        self.login_form.password_mut().clear();
        self.login.reset();
        self.state.reset_to(Route::Login);
    }

    fn remember_email(&mut self, email: String) {
        if self.config.last_email.as_deref() == Some(email.as_str()) {
            return;
        }
        self.config.last_email = Some(email);
        if self.persist_config {
            if let Err(err) = self.config.save() {
                tracing::warn!(error = %err, "failed to save config");
            }
        }
    }
}

/// Apply a typing key to the focused field
fn edit_field(field: Option<&mut FormField>, key: KeyEvent) {
    let Some(field) = field else {
        return;
    };
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            field.push_char(c)
        }
        KeyCode::Backspace => field.pop_char(),
        _ => {}
    }
}
