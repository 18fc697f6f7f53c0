//! reqwest-based client for the shortening backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{ShortenRequest, ShortenResult};
use crate::domain::gateway::ShortenerGateway;
use crate::error::GatewayError;

/// Path of the shortening endpoint relative to the base URL.
pub const SHORTEN_PATH: &str = "/api/shorten";

/// Field whose backend errors are reported inline.
const URL_FIELD: &str = "url";

/// Body of a non-2xx response.
///
/// Both keys are optional and may have any shape; only string values are
/// used. Anything else in the body is ignored.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
}

/// Talks to `POST {base_url}/api/shorten` over HTTP.
///
/// No timeout is configured beyond reqwest's defaults, and failed requests are
/// never retried.
#[derive(Debug, Clone)]
pub struct HttpShortenerGateway {
    client: Client,
    endpoint: String,
}

impl HttpShortenerGateway {
    /// Creates a gateway for the backend at `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: endpoint_for(base_url),
        }
    }
}

#[async_trait]
impl ShortenerGateway for HttpShortenerGateway {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        debug!(status = status.as_u16(), bytes = body.len(), "Shorten response received");

        if status.is_success() {
            return serde_json::from_str(&body)
                .map_err(|e| GatewayError::InvalidResponse(e.to_string()));
        }

        Err(classify_failure(status.as_u16(), &body))
    }
}

fn endpoint_for(base_url: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), SHORTEN_PATH)
}

/// Turns a non-2xx body into a [`GatewayError`].
///
/// A field error for `url` wins over a general message. An unreadable body is
/// a failure without message.
fn classify_failure(status: u16, body: &str) -> GatewayError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_else(|e| {
        debug!(status, "Error body is not JSON: {}", e);
        ErrorBody::default()
    });

    if let Some(message) = parsed
        .errors
        .as_ref()
        .and_then(|errors| errors.get(URL_FIELD))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
    {
        return GatewayError::FieldRejected {
            status,
            field: URL_FIELD.to_string(),
            message: message.to_string(),
        };
    }

    GatewayError::Failed {
        status,
        message: parsed
            .message
            .as_ref()
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string),
    }
}
