//! Sign-in form submission

use super::capabilities::{Navigator, Notifier, Route};
use super::pipeline::{SubmissionPhase, SubmitAction};
use crate::api::{AuthService, Session};
use crate::validation::{Field, Schema, ValidRecord};
use async_trait::async_trait;
use std::sync::Arc;

pub const LOGIN_FAILED: &str = "Falha ao tentar logar";

/// Rules for the login form
pub fn login_schema() -> Schema {
    Schema::new()
        .field(
            Field::text("email")
                .required("Email obrigatório")
                .email("Digite um email válido"),
        )
        .field(Field::text("password").required("Senha obrigatória"))
}

/// Signs in with the submitted credentials and moves to the home screen
pub struct LoginAction {
    auth: Arc<dyn AuthService>,
    schema: Schema,
}

impl LoginAction {
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            auth,
            schema: login_schema(),
        }
    }
}

#[async_trait]
impl SubmitAction for LoginAction {
    type Output = Session;

    fn name(&self) -> &'static str {
        "login"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn remote_phase(&self) -> SubmissionPhase {
        SubmissionPhase::Authenticating
    }

    async fn perform(&self, record: &ValidRecord) -> anyhow::Result<Session> {
        self.auth
            .sign_in(record.text("email"), record.text("password"))
            .await
    }

    fn on_success<U>(&self, _session: &Session, ui: &mut U)
    where
        U: Navigator + Notifier + ?Sized,
    {
        ui.go_to(Route::Home);
    }

    fn failure_message(&self) -> &'static str {
        LOGIN_FAILED
    }
}
