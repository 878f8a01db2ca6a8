use serde::Deserialize;
use serde_json::Value;

use crate::feedback::Feedback;
use crate::form::{FormTarget, RegisterFormData};
use crate::transport::{SubmissionRequest, Transport, TransportError};
use crate::validation::{self, ValidationError};

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Registration successful!";
pub const DEFAULT_REDIRECT_URL: &str = "/login";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Unknown error";
pub const VALIDATED_MESSAGE: &str = "Registration form is valid.";
pub const RETRY_MESSAGE: &str = "There was a problem submitting the form. Please try again.";

/// Whether a valid form goes to the server or only gets acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    #[default]
    Submit,
    ValidateOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,
    pub redirect_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Registration failed: {message}")]
    Rejected { message: String },
}

impl SubmitError {
    /// Text of the alert for this failure.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Transport(_) => RETRY_MESSAGE.to_string(),
            e => e.to_string(),
        }
    }
}

/// JSON body the registration endpoint answers with. Fields are read loosely:
/// any JSON value is accepted and judged by truthiness.
#[derive(Debug, Default, Deserialize)]
struct ServerReply {
    #[serde(default)]
    success: Value,
    #[serde(default)]
    message: Value,
    #[serde(default)]
    redirect_url: Value,
}

/// `null`, `false`, `0` and `""` are falsy; every other value is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a truthy value, or `default`. Non-strings render as JSON.
fn text_or(value: &Value, default: &str) -> String {
    match value {
        v if !is_truthy(v) => default.to_string(),
        Value::String(s) => s.clone(),
        v => v.to_string(),
    }
}

/// Handles submit events of the registration form.
pub struct RegistrationFormController<T, F> {
    target: FormTarget,
    mode: SubmitMode,
    transport: T,
    feedback: F,
}

impl<T: Transport, F: Feedback> RegistrationFormController<T, F> {
    pub fn new(target: FormTarget, mode: SubmitMode, transport: T, feedback: F) -> Self {
        Self {
            target,
            mode,
            transport,
            feedback,
        }
    }

    pub fn target(&self) -> &FormTarget {
        &self.target
    }

    pub fn mode(&self) -> SubmitMode {
        self.mode
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Validates the form and, in submit mode, sends it and interprets the
    /// reply. Nothing is sent unless every check passed.
    pub async fn handle_submit(
        &self,
        input: &RegisterFormData,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let input = input.normalized();
        validation::validate(&input)?;

        if self.mode == SubmitMode::ValidateOnly {
            return Ok(SubmissionOutcome {
                success: true,
                message: VALIDATED_MESSAGE.to_string(),
                redirect_url: None,
            });
        }

        let request = SubmissionRequest::new(
            self.target.method.clone(),
            self.target.action.clone(),
            input.fields(),
        );
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(TransportError::Status(response.status).into());
        }

        let reply: ServerReply =
            serde_json::from_slice(&response.body).map_err(TransportError::from)?;

        if is_truthy(&reply.success) {
            Ok(SubmissionOutcome {
                success: true,
                message: text_or(&reply.message, DEFAULT_SUCCESS_MESSAGE),
                redirect_url: Some(text_or(&reply.redirect_url, DEFAULT_REDIRECT_URL)),
            })
        } else {
            Err(SubmitError::Rejected {
                message: text_or(&reply.message, DEFAULT_FAILURE_MESSAGE),
            })
        }
    }

    /// Submit event handler: exactly one alert per attempt, navigation only
    /// after the server accepted the registration.
    pub async fn on_submit(
        &self,
        input: &RegisterFormData,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let result = self.handle_submit(input).await;

        match &result {
            Ok(outcome) => {
                self.feedback.alert(&outcome.message);
                if let Some(location) = &outcome.redirect_url {
                    self.feedback.navigate(location);
                }
            }
            Err(e) => {
                match e {
                    SubmitError::Validation(v) => log::info!("form rejected: {v:?}"),
                    SubmitError::Transport(t) => log::error!("submission error: {t}"),
                    SubmitError::Rejected { message } => {
                        log::warn!("registration refused by server: {message}")
                    }
                }
                self.feedback.alert(&e.user_message());
            }
        }

        result
    }
}
