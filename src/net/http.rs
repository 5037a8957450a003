//! Transport POSTing calls to a deployed web-app endpoint.
//!
//! Wire format: `POST <endpoint>` with body
//! `{"functionName": name, "args": [...]}`; the reply is JSON, either a
//! plain value or an envelope.
//!
//! The body goes out as `text/plain` so the browser treats the request as a
//! simple request and skips the CORS preflight the script host cannot answer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use records::{Call, HttpRequestBody, Operation, RemoteError, reject_failed_reply};
use serde_json::Value;

use super::transport::Transport;

#[cfg(feature = "csr")]
const CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// [`Transport`] over HTTP POST.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Serialize the request body for `call`.
///
/// # Errors
///
/// Returns [`RemoteError::Transport`] if an argument cannot be serialized.
pub fn encode_request(call: &Call) -> Result<String, RemoteError> {
    serde_json::to_string(&HttpRequestBody::from(call)).map_err(|e| RemoteError::Transport(e.to_string()))
}

/// Turn a status code and body text into the call outcome.
///
/// # Errors
///
/// Non-2xx statuses reject with [`RemoteError::Http`]; unparseable bodies with
/// [`RemoteError::Decode`]; failed replies per [`reject_failed_reply`].
pub fn normalize_response(operation: Operation, status: u16, body: &str) -> Result<Value, RemoteError> {
    if !(200..300).contains(&status) {
        return Err(RemoteError::Http {
            status,
            body: body.to_owned(),
        });
    }
    let value: Value = serde_json::from_str(body)?;
    reject_failed_reply(operation, value)
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn call(&self, call: Call) -> Result<Value, RemoteError> {
        let body = encode_request(&call)?;
        let (status, text) = self.post(body).await?;
        normalize_response(call.operation, status, &text)
    }
}

impl HttpTransport {
    async fn post(&self, body: String) -> Result<(u16, String), RemoteError> {
        #[cfg(feature = "csr")]
        {
            let transport_err = |e: gloo_net::Error| RemoteError::Transport(e.to_string());
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Content-Type", CONTENT_TYPE)
                .body(body)
                .map_err(transport_err)?
                .send()
                .await
                .map_err(transport_err)?;
            let status = resp.status();
            let text = resp.text().await.map_err(transport_err)?;
            Ok((status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(RemoteError::Transport(format!(
                "HTTP tidak tersedia di luar browser ({})",
                self.endpoint
            )))
        }
    }
}
