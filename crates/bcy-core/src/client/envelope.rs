use reqwest::StatusCode;
use tracing::debug;

use crate::error::BcyError;

/// The service's standard failure body: `{"error": "<message>"}`.
#[derive(Debug, Default, serde::Deserialize)]
pub(super) struct ErrorEnvelope {
    #[serde(default)]
    pub(super) error: String,
}

/// Turn a non-success response into [`BcyError::Service`].
///
/// A body that is not JSON, or a JSON body without a string `error` key,
/// yields an empty message. That decode failure is only logged; it is never
/// reported as an error of its own.
pub(super) fn service_error(status: StatusCode, body: &str) -> BcyError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error,
        Err(e) => {
            debug!(%status, error = %e, body_len = body.len(), "undecodable error envelope");
            String::new()
        }
    };
    BcyError::Service { status, message }
}
