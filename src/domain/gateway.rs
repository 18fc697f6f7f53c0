//! Access to the external shortening backend.

use crate::domain::entities::{ShortenRequest, ShortenResult};
use crate::error::GatewayError;
use async_trait::async_trait;

/// The one backend operation the client depends on: `POST /api/shorten`.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortenerGateway`] - reqwest-based HTTP client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerGateway: Send + Sync {
    /// Submits one request and waits for the backend's answer.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::FieldRejected`] - non-2xx with a field-level error
    /// - [`GatewayError::Failed`] - non-2xx with an optional general message
    /// - [`GatewayError::Transport`] - no response was obtained
    /// - [`GatewayError::InvalidResponse`] - 2xx whose body is not a [`ShortenResult`]
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, GatewayError>;
}
