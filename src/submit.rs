//! The submission protocol: validate, POST, interpret, surface.
//!
//! One submit attempt runs validate-all, aborts locally on any field error,
//! otherwise POSTs the record to the create-user endpoint and reduces
//! whatever comes back (success payload, structured rejection, transport
//! failure, timeout) to a notification plus a navigation. Transport and
//! malformed-body failures never escape as raw errors; they surface like any
//! other rejection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::form::RegistrationForm;
use crate::notify::{
    Notifier, Router, Severity, ERROR_ROUTE, HOME_ROUTE, REGISTER_FAILURE_TITLE,
    REGISTER_SUCCESS_TITLE,
};

// User-facing messages for failures the backend never saw
pub const MSG_TIMED_OUT: &str = "Request timed out.";
pub const MSG_UNREACHABLE: &str = "Could not reach the server.";
pub const MSG_UNEXPECTED: &str = "Unexpected server error.";

/// What a completed submit attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// 2xx from the endpoint; the payload is whatever the server returned.
    Success { payload: Value },
    /// Rejection or transport failure, reduced to user-facing messages.
    Failure { messages: Vec<String> },
}

/// Reasons a submit attempt never reached the network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Validation failed; the field errors stay visible on the form.
    #[error("form has validation errors")]
    Invalid,
    /// Another submission is still pending on this controller.
    #[error("a submission is already in flight")]
    InFlight,
}

// Error shape the backend uses for rejected registrations
#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    msg: String,
}

/// Orchestrates one registration submission at a time.
///
/// Holds the endpoint configuration, a client built with the configured
/// timeout, and the two presentation collaborators. The in-flight flag
/// rejects a second submit while one is pending and is released on every
/// exit path.
pub struct SubmissionController {
    config: Config,
    client: reqwest::Client,
    notifier: Arc<dyn Notifier>,
    router: Arc<dyn Router>,
    in_flight: AtomicBool,
}

impl SubmissionController {
    pub fn new(
        config: Config,
        notifier: Arc<dyn Notifier>,
        router: Arc<dyn Router>,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            config,
            client,
            notifier,
            router,
            in_flight: AtomicBool::new(false),
        })
    }

    /// Run one submit attempt against the current form state.
    ///
    /// Returns `Err` only when nothing was sent (invalid form, or a prior
    /// submission still pending). Every attempt that reaches the network
    /// resolves to a `SubmissionOutcome`, with the matching notification
    /// shown and navigation performed before this returns.
    pub async fn submit(
        &self,
        form: &mut RegistrationForm,
    ) -> Result<SubmissionOutcome, SubmitError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            warn!("Submission already in flight, ignoring");
            return Err(SubmitError::InFlight);
        }
        let result = self.do_submit(form).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn do_submit(
        &self,
        form: &mut RegistrationForm,
    ) -> Result<SubmissionOutcome, SubmitError> {
        if !form.validate_all() {
            info!(
                "Registration form invalid ({} field errors), not submitting",
                form.errors().len()
            );
            return Err(SubmitError::Invalid);
        }

        let record = form.snapshot();
        let url = self.config.create_user_url();
        info!("Submitting registration for {} to {}", record.email, url);

        let outcome = match self.client.post(&url).json(&record).send().await {
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                if status.is_success() {
                    self.succeed(&body)
                } else {
                    let messages = match serde_json::from_str::<ErrorBody>(&body) {
                        Ok(parsed) => parsed.errors.into_iter().map(|e| e.msg).collect(),
                        Err(_) => {
                            warn!("Unexpected error body from server ({}): {}", status, body);
                            vec![MSG_UNEXPECTED.to_string()]
                        }
                    };
                    self.fail(messages)
                }
            }
            Err(err) => {
                warn!("Registration request failed: {}", err);
                let message = if err.is_timeout() {
                    MSG_TIMED_OUT
                } else {
                    MSG_UNREACHABLE
                };
                self.fail(vec![message.to_string()])
            }
        };
        Ok(outcome)
    }

    /// Success path: show the payload, then go home.
    fn succeed(&self, body: &str) -> SubmissionOutcome {
        // Arbitrary payloads are fine; a non-JSON body is carried as a string
        let payload = serde_json::from_str::<Value>(body)
            .unwrap_or_else(|_| Value::String(body.to_string()));
        self.notifier
            .notify(REGISTER_SUCCESS_TITLE, &payload_text(&payload), Severity::Success);
        self.router.navigate(HOME_ROUTE);
        SubmissionOutcome::Success { payload }
    }

    /// Failure path: every message on its own line, then the error route.
    fn fail(&self, messages: Vec<String>) -> SubmissionOutcome {
        let body: String = messages.iter().map(|m| format!("{}\n", m)).collect();
        self.notifier
            .notify(REGISTER_FAILURE_TITLE, &body, Severity::Error);
        self.router.navigate(ERROR_ROUTE);
        SubmissionOutcome::Failure { messages }
    }
}

/// Raw display text for an arbitrary success payload.
fn payload_text(payload: &Value) -> String {
    match payload {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Error Body Decoding Tests ====================

    #[test]
    fn test_error_body_decodes_expected_shape() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"errors":[{"msg":"Email already exists"},{"msg":"Name too plain"}]}"#,
        )
        .expect("Should decode");
        assert_eq!(body.errors.len(), 2);
        assert_eq!(body.errors[0].msg, "Email already exists");
    }

    #[test]
    fn test_error_body_tolerates_extra_fields() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"errors":[{"msg":"nope","param":"email","location":"body"}],"status":400}"#,
        )
        .expect("Should decode");
        assert_eq!(body.errors[0].msg, "nope");
    }

    #[test]
    fn test_error_body_rejects_missing_errors_key() {
        assert!(serde_json::from_str::<ErrorBody>(r#"{"message":"boom"}"#).is_err());
    }

    #[test]
    fn test_error_body_rejects_non_json() {
        assert!(serde_json::from_str::<ErrorBody>("Internal Server Error").is_err());
    }

    // ==================== Payload Text Tests ====================

    #[test]
    fn test_payload_text_string_shown_raw() {
        let payload = Value::String("Welcome aboard".to_string());
        assert_eq!(payload_text(&payload), "Welcome aboard");
    }

    #[test]
    fn test_payload_text_object_shown_compact() {
        let payload: Value = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(payload_text(&payload), r#"{"id":1}"#);
    }
}
