//! Registration form core for the Unify front-end.
//!
//! Collects the registration fields, validates them client-side, and submits
//! them to the account-creation endpoint. Presentation stays outside: alerts
//! and navigation are injected as the [`Notifier`] and [`Router`]
//! collaborators, so any UI (or a test double) can host the same core.

pub mod config;
pub mod form;
pub mod lang;
pub mod notify;
pub mod submit;
pub mod validators;

pub use config::Config;
pub use form::{Field, RegistrationForm, RegistrationRecord};
pub use lang::Language;
pub use notify::{LogNotifier, LogRouter, Notifier, Router, Severity};
pub use submit::{SubmissionController, SubmissionOutcome, SubmitError};
