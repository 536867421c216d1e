//! Four-step diagnostic form wizard, independent of the browser.
//!
//! The Yew component in `components::form_wizard` owns a
//! [`WizardController`] bound to a [`ProgressBoard`] and renders from it.

pub mod controller;
pub mod feedback;
pub mod form;
pub mod state;
pub mod submission;
pub mod summary;
pub mod validation;
pub mod view;

pub use controller::{NavAction, NavOutcome, SubmissionStatus, WizardController};
pub use form::{FieldKind, FormDefinition, FormField};
pub use submission::{submit, FormTransport, SubmitError};
pub use view::ProgressBoard;
