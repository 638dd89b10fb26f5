//! Form submission pipelines
//!
//! Every submission follows the same sequence: clear errors, validate the
//! form snapshot, run the remote action, then either apply its success effect
//! or surface a failure. [`Submission`] owns that sequence; a [`SubmitAction`]
//! supplies what differs between forms.

mod capabilities;
mod create_naver;
mod loading;
mod login;
mod pipeline;

pub use capabilities::{FormController, Navigator, Notifier, Route};
pub use create_naver::CreateNaverAction;
pub use login::LoginAction;
pub use pipeline::{Submission, SubmissionOutcome};

#[cfg(test)]
pub use pipeline::SubmissionPhase;

/// Login form pipeline
pub type LoginSubmission = Submission<LoginAction>;

/// New-naver form pipeline
pub type CreateNaverSubmission = Submission<CreateNaverAction>;
