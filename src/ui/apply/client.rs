//! HTTP implementation of the application gateway
//!
//! Talks to the server's `/api/applications` endpoints with `gloo-net`.
//! Server-side rendering never submits, so the `ssr` build only carries stubs.

use crate::core::{
    ApplicationForm, ApplicationGateway, ApplicationReceipt, SubmissionError,
};

#[cfg(not(feature = "ssr"))]
use crate::core::{ApiErrorBody, EmailAvailability};

/// Gateway backed by the applications REST API
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGateway;

impl ApplicationGateway for HttpGateway {
    async fn check_email_available(&self, email: &str) -> Result<bool, SubmissionError> {
        fetch_email_available(email).await
    }

    async fn submit_application(
        &self,
        form: &ApplicationForm,
    ) -> Result<ApplicationReceipt, SubmissionError> {
        post_application(form).await
    }
}

#[cfg(not(feature = "ssr"))]
fn network_error(err: gloo_net::Error) -> SubmissionError {
    SubmissionError::Network(err.to_string())
}

#[cfg(not(feature = "ssr"))]
async fn error_from_response(response: gloo_net::http::Response) -> SubmissionError {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => SubmissionError::from_api(body),
        Err(_) => SubmissionError::Server(format!("Unexpected response (HTTP {})", status)),
    }
}

#[cfg(not(feature = "ssr"))]
async fn fetch_email_available(email: &str) -> Result<bool, SubmissionError> {
    use gloo_net::http::Request;

    let response = Request::get("/api/applications/email-available")
        .query([("email", email)])
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body: EmailAvailability = response.json().await.map_err(network_error)?;
    Ok(body.available)
}

#[cfg(feature = "ssr")]
async fn fetch_email_available(_email: &str) -> Result<bool, SubmissionError> {
    Err(SubmissionError::Network("Not available on server".to_string()))
}

#[cfg(not(feature = "ssr"))]
async fn post_application(form: &ApplicationForm) -> Result<ApplicationReceipt, SubmissionError> {
    use gloo_net::http::Request;

    let response = Request::post("/api/applications")
        .header("Content-Type", "application/json")
        .json(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response.json().await.map_err(network_error)
}

#[cfg(feature = "ssr")]
async fn post_application(_form: &ApplicationForm) -> Result<ApplicationReceipt, SubmissionError> {
    Err(SubmissionError::Network("Not available on server".to_string()))
}
