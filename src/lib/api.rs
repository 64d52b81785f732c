//! HTTP helpers for the JSON auth endpoints. Unlike a typed client, the helpers
//! hand back the raw status and body so the caller can read the backend's
//! `{success, message}` envelope even on non-2xx replies. No timeout is applied;
//! a request waits for the browser to settle it.

#[cfg(target_arch = "wasm32")]
use super::errors::AppError;

/// Status and body of a settled HTTP exchange, before interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    /// True for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts a JSON body with same-origin cookies and returns the raw reply.
#[cfg(target_arch = "wasm32")]
pub async fn post_json_with_credentials<B: serde::Serialize>(
    url: &str,
    body: &B,
) -> Result<RawReply, AppError> {
    use gloo_net::http::Request;
    use web_sys::RequestCredentials;

    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let request = Request::post(url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .credentials(RequestCredentials::SameOrigin)
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    let response = request
        .send()
        .await
        .map_err(|err| AppError::Network(format!("Unable to reach the server: {err}")))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| AppError::Network(format!("Failed to read response: {err}")))?;

    Ok(RawReply { status, body })
}
