//! The shared validate-then-submit sequence

use super::capabilities::{FormController, Navigator, Notifier};
use super::loading::LoadingFlag;
use crate::validation::{FieldErrors, Schema, ValidRecord, ValidationResult};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// Where a submission attempt currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Authenticating,
    CreatingRecord,
    Succeeded,
    Failed,
    RejectedInput,
}

impl SubmissionPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Authenticating => "authenticating",
            Self::CreatingRecord => "creating record",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::RejectedInput => "rejected input",
        }
    }

    /// True for phases in which an attempt is still running
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            Self::Validating | Self::Authenticating | Self::CreatingRecord
        )
    }
}

/// Result of one submission attempt
#[derive(Debug)]
pub enum SubmissionOutcome<T> {
    /// The remote action succeeded and its success effect was applied
    Success(T),
    /// Input was rejected; the errors were written back to the form
    ValidationFailure(FieldErrors),
    /// The remote action failed; a generic alert was shown
    RemoteFailure(anyhow::Error),
    /// Another attempt was already in flight; nothing was done
    Busy,
}

impl<T> SubmissionOutcome<T> {
    #[cfg(test)]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::ValidationFailure(errors) => Some(errors),
            _ => None,
        }
    }
}

/// The form-specific half of a submission
#[async_trait]
pub trait SubmitAction: Send + Sync {
    /// Value produced by a successful remote call
    type Output: Send;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn schema(&self) -> &Schema;

    /// Phase entered while the remote call runs
    fn remote_phase(&self) -> SubmissionPhase;

    /// Run the remote call for an accepted record
    async fn perform(&self, record: &ValidRecord) -> anyhow::Result<Self::Output>;

    /// Apply the side effect of a successful call
    fn on_success<U>(&self, output: &Self::Output, ui: &mut U)
    where
        U: Navigator + Notifier + ?Sized;

    /// Alert shown when the remote call fails
    fn failure_message(&self) -> &'static str;
}

/// Runs a [`SubmitAction`] against a form, one attempt at a time
pub struct Submission<A> {
    action: A,
    loading: LoadingFlag,
    phase: Mutex<SubmissionPhase>,
}

impl<A: SubmitAction> Submission<A> {
    pub fn new(action: A) -> Self {
        Self {
            action,
            loading: LoadingFlag::new(),
            phase: Mutex::new(SubmissionPhase::Idle),
        }
    }

    #[cfg(test)]
    pub fn loading(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    #[cfg(test)]
    pub fn phase(&self) -> SubmissionPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return to `Idle` after an attempt has finished
    pub fn reset(&self) {
        let mut current = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if !current.is_in_flight() {
            *current = SubmissionPhase::Idle;
        }
    }

    fn set_phase(&self, phase: SubmissionPhase) {
        let mut current = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(
            action = self.action.name(),
            from = current.label(),
            to = phase.label(),
            "submission phase"
        );
        *current = phase;
    }

    /// Validate the form and, if it is accepted, run the remote action.
    ///
    /// Field errors are written back to `form` and the phase passes through
    /// `RejectedInput` back to `Idle`. Remote failures become a single generic
    /// alert on `ui` and leave the phase at `Failed` until the next attempt. The loading flag is held for the whole
    /// attempt and released on every exit path.
    pub async fn submit<F, U>(&self, form: &mut F, ui: &mut U) -> SubmissionOutcome<A::Output>
    where
        F: FormController + ?Sized,
        U: Navigator + Notifier + ?Sized,
    {
        let Some(_guard) = self.loading.try_begin() else {
            tracing::warn!(action = self.action.name(), "submission already in flight");
            return SubmissionOutcome::Busy;
        };

        self.set_phase(SubmissionPhase::Validating);
        form.clear_errors();
        let values = form.values();

        let record = match self.action.schema().validate(&values) {
            ValidationResult::Accepted(record) => record,
            ValidationResult::Rejected(errors) => {
                form.set_errors(&errors);
                self.set_phase(SubmissionPhase::RejectedInput);
                self.set_phase(SubmissionPhase::Idle);
                return SubmissionOutcome::ValidationFailure(errors);
            }
        };

        self.set_phase(self.action.remote_phase());
        match self.action.perform(&record).await {
            Ok(output) => {
                self.set_phase(SubmissionPhase::Succeeded);
                self.action.on_success(&output, ui);
                SubmissionOutcome::Success(output)
            }
            Err(err) => {
                tracing::warn!(action = self.action.name(), error = %err, "submission failed");
                self.set_phase(SubmissionPhase::Failed);
                ui.alert(self.action.failure_message());
                SubmissionOutcome::RemoteFailure(err)
            }
        }
    }
}
