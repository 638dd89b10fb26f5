//! Form domain layer
//!
//! Form structs hold field values and their error annotations, and act as the
//! [`FormController`](crate::submission::FormController) for the submission
//! pipelines.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, LoginForm, NaverForm};
