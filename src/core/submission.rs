//! Outbound contract for submitted applications
//!
//! The wizard only produces a validated [`ApplicationForm`]. Delivering it and
//! checking email uniqueness go through an [`ApplicationGateway`], implemented
//! over HTTP in the browser and by fakes in tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::application::{ApplicationForm, FormField};
use super::validation::{ErrorMap, FieldError};
use super::wizard::Wizard;

/// Acknowledgement returned for an accepted application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl ApplicationReceipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// Short reference shown to the applicant
    pub fn reference(&self) -> String {
        self.id.simple().to_string()[..8].to_uppercase()
    }
}

impl Default for ApplicationReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Error body returned by the applications API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<ErrorMap>,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            fields: None,
        }
    }
}

/// Response of the email availability endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAvailability {
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Application was rejected: some fields are invalid")]
    Validation(ErrorMap),

    #[error("Email already registered")]
    EmailTaken,

    #[error("We are not accepting new applications right now")]
    CapacityReached,

    #[error("Server error: {0}")]
    Server(String),

    #[error("Application has not been submitted yet")]
    NotSubmitted,
}

impl SubmissionError {
    /// Map an API error body to the matching variant
    pub fn from_api(body: ApiErrorBody) -> Self {
        match body.code.as_str() {
            "VALIDATION_FAILED" => SubmissionError::Validation(body.fields.unwrap_or_default()),
            "EMAIL_EXISTS" => SubmissionError::EmailTaken,
            "CAPACITY_REACHED" => SubmissionError::CapacityReached,
            _ => SubmissionError::Server(body.error),
        }
    }

    /// Whether trying again later can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SubmissionError::Network(_)
                | SubmissionError::Server(_)
                | SubmissionError::CapacityReached
        )
    }
}

/// External collaborator receiving applications
#[allow(async_fn_in_trait)]
pub trait ApplicationGateway {
    async fn check_email_available(&self, email: &str) -> Result<bool, SubmissionError>;

    async fn submit_application(
        &self,
        form: &ApplicationForm,
    ) -> Result<ApplicationReceipt, SubmissionError>;
}

/// Ask the gateway whether the admin email is free.
///
/// Returns an [`ErrorMap`] to merge into the step-2 advance; empty when the
/// address is available or the email field is blank (the local validator
/// reports that case).
pub async fn check_admin_email<G: ApplicationGateway>(
    form: &ApplicationForm,
    gateway: &G,
) -> Result<ErrorMap, SubmissionError> {
    let mut errors = ErrorMap::new();
    if form.email.is_empty() {
        return Ok(errors);
    }
    if !gateway.check_email_available(&form.email).await? {
        errors.add(FormField::Email, FieldError::EmailTaken);
    }
    Ok(errors)
}

/// Hand a submitted application to the gateway
pub async fn deliver<G: ApplicationGateway>(
    wizard: &Wizard,
    gateway: &G,
) -> Result<ApplicationReceipt, SubmissionError> {
    if !wizard.is_submitted() {
        return Err(SubmissionError::NotSubmitted);
    }
    gateway.submit_application(wizard.form()).await
}

/// Delivery progress shown on the confirmation screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeliveryStatus {
    #[default]
    Sending,
    Failed(SubmissionError),
    Delivered(ApplicationReceipt),
}

impl DeliveryStatus {
    pub fn from_result(result: Result<ApplicationReceipt, SubmissionError>) -> Self {
        match result {
            Ok(receipt) => DeliveryStatus::Delivered(receipt),
            Err(err) => DeliveryStatus::Failed(err),
        }
    }

    pub fn is_pending(&self) -> bool {
        !matches!(self, DeliveryStatus::Delivered(_))
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, DeliveryStatus::Failed(err) if err.is_retryable())
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// In-memory gateway for tests
    #[derive(Default)]
    pub struct FakeGateway {
        pub taken: Vec<String>,
        pub offline: bool,
        pub submitted: RefCell<Vec<ApplicationForm>>,
        pub checks: Cell<usize>,
    }

    impl ApplicationGateway for FakeGateway {
        async fn check_email_available(&self, email: &str) -> Result<bool, SubmissionError> {
            self.checks.set(self.checks.get() + 1);
            if self.offline {
                return Err(SubmissionError::Network("connection refused".to_string()));
            }
            Ok(!self.taken.iter().any(|t| t == email))
        }

        async fn submit_application(
            &self,
            form: &ApplicationForm,
        ) -> Result<ApplicationReceipt, SubmissionError> {
            if self.offline {
                return Err(SubmissionError::Network("connection refused".to_string()));
            }
            self.submitted.borrow_mut().push(form.clone());
            Ok(ApplicationReceipt::new())
        }
    }
}
