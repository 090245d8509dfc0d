//! Response validation shared by every service.
//!
//! # Design
//! `ensure_success` is the single place that turns a non-2xx response into a
//! `ServiceError::Status`. Services pick it up through `ServiceClient`, whose
//! provided methods send a request, validate the response and optionally
//! extract its body.

use crate::error::{Result, ServiceError};
use crate::http::{status_name, HttpRequest, HttpResponse, Transport};

/// Placeholder rendered in diagnostics when a failure response has no body.
const MISSING_BODY: &str = "(null)";

/// Return the response unchanged if its status is 2xx, otherwise fail with
/// the status code and a diagnostic that includes the body.
pub fn ensure_success(response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }
    let status = response.status;
    let body = response.into_body();
    Err(ServiceError::Status {
        status,
        message: format!(
            "Received a failure response from service: {status} {}. Body: {}",
            status_name(status),
            body.as_deref().unwrap_or(MISSING_BODY),
        ),
    })
}

/// Validate-then-extract behavior for anything that owns a transport.
pub trait ServiceClient {
    type Transport: Transport;

    fn transport(&self) -> &Self::Transport;

    /// Send `request` and return the response if it succeeded.
    fn get_response(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self.transport().send(request)?;
        ensure_success(response)
    }

    /// Send `request` and return the body of the successful response, if any.
    fn get_response_content(&self, request: HttpRequest) -> Result<Option<String>> {
        Ok(self.get_response(request)?.into_body())
    }
}
