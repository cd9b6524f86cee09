//! Contact form submission.
//!
//! ```text
//! idle ──submit──> sending ──relay ok──> success ──┐
//!                     │                            ├──cleanup──> idle
//!                     └──rejected / error──> failure ┘
//! ```
//!
//! Cleanup (re-enabling the submit control) runs on every path.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Label of the submit control while idle.
pub const SUBMIT_LABEL: &str = "Send Message";

/// Label of the submit control while a submission is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Where the submitter is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Success,
    Failure,
}

/// Final result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    Failed,
}

/// Relay reply. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RelayResponse {
    /// Parse a relay body; any other shape is an error.
    pub fn from_body(body: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Ordered name/value pairs read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Inline message shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    Success,
    Failure,
}

impl FormMessage {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Success => "✅ Thank you! Your message has been sent successfully.",
            Self::Failure => "❌ Sorry, there was an error sending your message. Please try again.",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Success => "form-message success",
            Self::Failure => "form-message error",
        }
    }
}

/// Posts form data to the relay endpoint.
#[allow(async_fn_in_trait)]
pub trait RelayClient {
    async fn submit(&self, endpoint: &str, fields: &FormFields) -> PortfolioResult<RelayResponse>;
}

/// The form controls the submitter drives.
pub trait ContactSurface {
    fn fields(&self) -> FormFields;

    /// Disable/enable the submit control and swap its label and spinner.
    fn set_sending(&self, sending: bool);

    fn show_message(&self, message: FormMessage);

    fn hide_message(&self);

    /// Clear every input.
    fn reset(&self);
}

/// Drives one contact form through the submission cycle.
pub struct ContactSubmitter<R, F> {
    relay: R,
    form: F,
    endpoint: String,
    state: Cell<SubmissionState>,
}

impl<R: RelayClient, F: ContactSurface> ContactSubmitter<R, F> {
    pub fn new(relay: R, form: F, endpoint: impl Into<String>) -> Self {
        Self {
            relay,
            form,
            endpoint: endpoint.into(),
            state: Cell::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the form once.
    ///
    /// Returns `None` if a submission is already in flight.
    pub async fn submit(&self) -> Option<SubmissionOutcome> {
        if self.state.get() == SubmissionState::Sending {
            tracing::debug!("Submission already in flight; ignoring");
            return None;
        }

        self.state.set(SubmissionState::Sending);
        self.form.set_sending(true);
        self.form.hide_message();

        let fields = self.form.fields();
        let result = match self.relay.submit(&self.endpoint, &fields).await {
            Ok(reply) if reply.success => Ok(()),
            Ok(_) => Err(PortfolioError::RelayRejected),
            Err(e) => Err(e),
        };

        let outcome = match result {
            Ok(()) => {
                self.state.set(SubmissionState::Success);
                self.form.show_message(FormMessage::Success);
                self.form.reset();
                tracing::info!(fields = fields.len(), "Contact form delivered");
                SubmissionOutcome::Delivered
            }
            Err(e) => {
                self.state.set(SubmissionState::Failure);
                self.form.show_message(FormMessage::Failure);
                tracing::error!("Form submission error: {}", e);
                SubmissionOutcome::Failed
            }
        };

        self.form.set_sending(false);
        self.state.set(SubmissionState::Idle);
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_response_shapes() {
        assert!(RelayResponse::from_body(r#"{"success":true,"message":"Email sent"}"#).unwrap().success);
        assert!(!RelayResponse::from_body(r#"{"success":false}"#).unwrap().success);
        assert!(RelayResponse::from_body(r#"{"ok":true}"#).is_err());
        assert!(RelayResponse::from_body(r#"{"success":"yes"}"#).is_err());
        assert!(RelayResponse::from_body("<html>").is_err());
    }

    #[test]
    fn test_form_fields() {
        let fields: FormFields = [("name", "Ada"), ("email", "ada@example.com")].into_iter().collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("email"), Some("ada@example.com"));
        assert_eq!(fields.get("message"), None);
        assert_eq!(fields.iter().next(), Some(("name", "Ada")));
    }

    #[test]
    fn test_form_message_classes() {
        assert_eq!(FormMessage::Success.class_name(), "form-message success");
        assert_eq!(FormMessage::Failure.class_name(), "form-message error");
        assert!(FormMessage::Failure.text().contains("try again"));
    }
}
