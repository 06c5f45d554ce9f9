//! Errors - Turn provider errors into host diagnostics
//!
//! API failures get a message derived from the HTTP status, followed by the
//! raw response body so that ISC's `detailCode` and messages reach the user.

use isc_core::provider::{Diagnostic, ProviderError};

/// User-facing explanation of an HTTP status
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => "The request was rejected as invalid. Check the resource configuration.",
        401 => "Authentication failed. Check the client id and client secret.",
        403 => "The client is not permitted to perform this operation. Check its scopes.",
        404 => "The object was not found in the tenant.",
        409 => "The request conflicts with the current state of the object.",
        429 => "The tenant is rate limiting requests. Try again later.",
        500..=599 => "The tenant returned a server error.",
        _ => "The tenant returned an unexpected status.",
    }
}

/// Build the diagnostic reported for a failed lifecycle call
///
/// `summary` names the failed call (e.g., "Error creating lifecycle state").
pub fn to_diagnostic(summary: &str, error: &ProviderError) -> Diagnostic {
    match error {
        ProviderError::Api {
            operation,
            status,
            body,
        } => Diagnostic::error(
            summary,
            format!(
                "{} failed with status {}. {}\n\nResponse body: {}",
                operation,
                status,
                status_message(*status),
                body
            ),
        ),
        ProviderError::MissingAttribute(attribute) | ProviderError::UnknownValue(attribute) => {
            Diagnostic::error(summary, error.to_string()).with_attribute(attribute.clone())
        }
        ProviderError::Conversion { attribute, .. } => {
            Diagnostic::error(summary, error.to_string()).with_attribute(attribute.clone())
        }
        ProviderError::Configuration(_) | ProviderError::Transport { .. } => {
            Diagnostic::error(summary, error.to_string())
        }
    }
}
