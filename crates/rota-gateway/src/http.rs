//! Shared transport plumbing for gateway operations.
//!
//! One request goes out, an opaque status-and-body pair comes back, and each
//! operation module classifies that pair itself. Status codes the service
//! uses for business outcomes (404 as "nothing scheduled yet", 400 as a rule
//! rejection) must reach the operation untouched, so nothing here treats a
//! non-2xx answer as a transport failure.

use rota_core::JsonMap;

use crate::Gateway;

/// Everything the transport reports about a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The exchange died before a status was observed (refused connection,
/// timeout, aborted body read).
#[derive(Debug)]
pub(crate) struct TransportError(pub String);

#[derive(Debug, Clone, Copy)]
pub(crate) enum Method {
    Get,
    Patch,
    Delete,
}

/// Drain a response into a [`RawResponse`].
pub(crate) async fn read_response(
    response: reqwest::Response,
) -> Result<RawResponse, TransportError> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|error| {
        tracing::debug!(%error, "response body read failed");
        TransportError(error.to_string())
    })?;
    Ok(RawResponse { status, body })
}

impl Gateway {
    /// Issue one request against the configured origin. Every observed
    /// status, success or not, comes back as data; only connection-level
    /// trouble is an error. Requests are never retried.
    pub(crate) async fn send(
        &self,
        method: Method,
        path_and_query: &str,
    ) -> Result<RawResponse, TransportError> {
        let url = format!("{}{path_and_query}", self.base_url);
        let request = match method {
            Method::Get => self.http.get(&url),
            Method::Patch => self.http.patch(&url),
            Method::Delete => self.http.delete(&url),
        };
        let response = request.send().await.map_err(|error| {
            tracing::debug!(%url, %error, "request did not reach the service");
            TransportError(error.to_string())
        })?;
        read_response(response).await
    }
}

/// Decode a body the operation expects to be one JSON object.
pub(crate) fn json_object(body: &str) -> Result<JsonMap, serde_json::Error> {
    serde_json::from_str(body)
}

/// Decode a body the operation expects to be a JSON array of objects.
pub(crate) fn json_array(body: &str) -> Result<Vec<JsonMap>, serde_json::Error> {
    serde_json::from_str(body)
}
