use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::board::error::DropError;
use crate::board::models::{DropRequest, DropResponse};

/// Sends a drop to the server.
///
/// Any HTTP reply, 2xx or not, is `Ok`; `Err` means the request never
/// completed.
#[allow(async_fn_in_trait)]
pub trait DropTransport {
    async fn send(&self, request: &DropRequest) -> Result<DropResponse, DropError>;
}

/// `fetch`-backed transport.
///
/// The body is sent as a plain string, so no `Content-Type` header is added.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl DropTransport for FetchTransport {
    async fn send(&self, request: &DropRequest) -> Result<DropResponse, DropError> {
        let body = request
            .payload
            .to_body()
            .map_err(|e| DropError::Transport(format!("failed to encode drop payload: {}", e)))?;

        let mut builder =
            Request::post(&request.endpoint).credentials(RequestCredentials::SameOrigin);
        if let Some(token) = &request.csrf_token {
            builder = builder.header(&request.csrf_header, token);
        }

        let response = builder
            .body(body)
            .map_err(|e| DropError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| DropError::Transport(e.to_string()))?;

        Ok(DropResponse::new(response.status(), response.status_text()))
    }
}
