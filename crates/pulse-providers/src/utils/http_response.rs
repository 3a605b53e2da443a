//! HTTP Response Utilities
//!
//! Response handling shared by HTTP-backed providers. This is the single
//! place where an HTTP status turns into an [`ErrorCategory`]; nothing
//! downstream ever inspects status codes or provider-specific error shapes.
//!
//! Error messages are assembled from the status code and response body
//! only. Request configuration (URLs with credentials, authorization
//! headers) never reaches a message, so logs stay free of secrets.

use pulse_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse the JSON body.
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// The deserialized body on success, or a categorized provider error.
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::categorize(status.as_u16(), provider_name, &error_text));
        }

        response.json().await.map_err(|e| {
            Error::provider_unknown(format!("{provider_name} response parse failed: {e}"))
        })
    }

    /// Map an HTTP status code to a categorized provider error.
    pub fn categorize(code: u16, provider_name: &str, details: &str) -> Error {
        match code {
            401 | 403 => {
                Error::authentication(format!("{provider_name} authentication failed: {details}"))
            }
            429 => Error::throttling(format!("{provider_name} rate limit exceeded: {details}")),
            400 | 413 => {
                Error::validation(format!("{provider_name} rejected request ({code}): {details}"))
            }
            500..=599 => {
                Error::service(format!("{provider_name} server error ({code}): {details}"))
            }
            _ => Error::provider_unknown(format!(
                "{provider_name} request failed ({code}): {details}"
            )),
        }
    }

    /// Map a reqwest transport failure to a categorized provider error.
    ///
    /// Timeouts and connection failures are service-category so the retry
    /// utility treats them as transient.
    pub fn transport_error(error: &reqwest::Error, provider_name: &str) -> Error {
        if error.is_timeout() {
            Error::service(format!("{provider_name} request timed out"))
        } else if error.is_connect() {
            Error::service(format!("{provider_name} connection failed: {error}"))
        } else {
            Error::service(format!("{provider_name} HTTP request failed: {error}"))
        }
    }
}
