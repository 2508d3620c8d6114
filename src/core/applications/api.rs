//! Applications API endpoints
//!
//! - POST /api/applications - Submit a completed application
//! - GET /api/applications/email-available?email= - Check an admin email

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;

use super::registry::{ApplicationRegistry, RegistryError};
use crate::core::application::ApplicationForm;
use crate::core::submission::{ApiErrorBody, ApplicationReceipt, EmailAvailability};
use crate::core::validation::{ErrorMap, validate_all};

/// Shared state for the applications router
#[derive(Clone)]
pub struct ApplicationsState {
    pub registry: Arc<ApplicationRegistry>,
}

impl ApplicationsState {
    pub fn new(capacity: usize) -> Self {
        Self {
            registry: Arc::new(ApplicationRegistry::new(capacity)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationsApiError {
    #[error("Invalid application body: {0}")]
    InvalidBody(String),

    #[error("Validation failed")]
    Validation(ErrorMap),

    #[error("Email already registered")]
    EmailExists,

    #[error("We are not accepting new applications right now")]
    CapacityReached,
}

impl From<RegistryError> for ApplicationsApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::EmailTaken => ApplicationsApiError::EmailExists,
            RegistryError::CapacityReached(_) => ApplicationsApiError::CapacityReached,
        }
    }
}

impl IntoResponse for ApplicationsApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApplicationsApiError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "INVALID_BODY"),
            ApplicationsApiError::Validation(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_FAILED")
            }
            ApplicationsApiError::EmailExists => (StatusCode::CONFLICT, "EMAIL_EXISTS"),
            ApplicationsApiError::CapacityReached => {
                (StatusCode::SERVICE_UNAVAILABLE, "CAPACITY_REACHED")
            }
        };

        let mut body = ApiErrorBody::new(self.to_string(), code);
        if let ApplicationsApiError::Validation(fields) = self {
            body.fields = Some(fields);
        }

        (status, Json(body)).into_response()
    }
}

/// Query parameters for the availability check
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: String,
}

/// Create the applications API router
pub fn applications_router(state: ApplicationsState) -> Router {
    Router::new()
        .route("/api/applications", post(submit_application_handler))
        .route(
            "/api/applications/email-available",
            get(email_available_handler),
        )
        .with_state(state)
}

/// POST /api/applications
async fn submit_application_handler(
    State(state): State<ApplicationsState>,
    body: Result<Json<ApplicationForm>, JsonRejection>,
) -> Result<(StatusCode, Json<ApplicationReceipt>), ApplicationsApiError> {
    let Json(form) = body.map_err(|rejection| {
        tracing::warn!("Rejected application body: {}", rejection.body_text());
        ApplicationsApiError::InvalidBody(rejection.body_text())
    })?;

    let errors = validate_all(&form);
    if !errors.is_empty() {
        tracing::warn!(
            "Rejected application for '{}': {} invalid field(s)",
            form.center_name,
            errors.len()
        );
        return Err(ApplicationsApiError::Validation(errors));
    }

    let receipt = state.registry.register(&form.email).map_err(|err| {
        tracing::warn!("Rejected application for '{}': {}", form.center_name, err);
        ApplicationsApiError::from(err)
    })?;

    tracing::info!(
        "Application {} accepted for '{}' ({} plan)",
        receipt.id,
        form.center_name,
        form.selected_plan.map(|p| p.as_str()).unwrap_or("no")
    );

    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /api/applications/email-available
async fn email_available_handler(
    State(state): State<ApplicationsState>,
    Query(query): Query<EmailQuery>,
) -> Json<EmailAvailability> {
    let available = state.registry.is_email_available(&query.email);
    tracing::debug!("Email availability check: {}", available);
    Json(EmailAvailability { available })
}
