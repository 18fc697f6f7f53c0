//! Submission lifecycle of a single shortening request.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::{ShortenForm, ShortenRequest, ShortenResult};
use crate::domain::gateway::ShortenerGateway;
use crate::domain::validation::validate_url;
use crate::error::{
    DEFAULT_REQUEST_ERROR, GatewayError, INVALID_RESPONSE_ERROR, SubmitError, ValidationError,
};

/// Where the controller is in the request lifecycle.
///
/// ```text
/// prepare: Idle -> Validating -> Invalid -> Idle
///                             -> Idle (PreparedRequest)
/// send:    Idle -> Submitting -> Succeeded -> Idle
///                             -> Failed    -> Idle
/// ```
///
/// `Invalid`, `Succeeded` and `Failed` are passed through on the way back to
/// `Idle`; the most recent one is available from
/// [`SubmissionController::last_outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Drives one submission at a time against a [`ShortenerGateway`].
///
/// At most one request is outstanding: [`send`](Self::send) holds the
/// controller mutably for the whole round trip and [`prepare`](Self::prepare)
/// refuses to start while a request is in flight. There are no retries.
pub struct SubmissionController<G: ShortenerGateway> {
    gateway: Arc<G>,
    state: SubmissionState,
    last_outcome: Option<SubmissionState>,
}

impl<G: ShortenerGateway> SubmissionController<G> {
    /// Creates a controller in the `Idle` state.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            state: SubmissionState::Idle,
            last_outcome: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Terminal state reached by the previous submission, if any.
    pub fn last_outcome(&self) -> Option<SubmissionState> {
        self.last_outcome
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Validates the form and, if valid, returns the request to send.
    ///
    /// The controller passes through `Validating` and is back in `Idle` when
    /// this returns; only [`send`](Self::send) enters `Submitting`, so a
    /// prepared request that is never sent leaves nothing behind.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Busy`] if a request is already in flight
    /// - [`SubmitError::Invalid`] if the URL fails validation; the controller
    ///   passes through `Invalid` back to `Idle`
    pub fn prepare(&mut self, form: &ShortenForm) -> Result<PreparedRequest, SubmitError> {
        if self.is_submitting() {
            warn!("Submission rejected: another request is in flight");
            return Err(SubmitError::Busy);
        }

        self.state = SubmissionState::Validating;
        let url = form.trimmed_url();

        if let Err(e) = validate_url(url) {
            debug!(reason = %e, "URL rejected by validation");
            self.finish(SubmissionState::Invalid);
            return Err(e.into());
        }

        self.state = SubmissionState::Idle;
        Ok(PreparedRequest(ShortenRequest::new(
            url,
            form.normalized_expires_at().map(str::to_string),
        )))
    }

    /// Sends a prepared request and returns to `Idle` once it completes.
    ///
    /// Only requests built by [`prepare`](Self::prepare) are accepted:
    ///
    /// ```compile_fail
    /// # use std::sync::Arc;
    /// # use shortifier::prelude::*;
    /// # async fn run() {
    /// let gateway = Arc::new(HttpShortenerGateway::new("http://localhost:8080"));
    /// let mut controller = SubmissionController::new(gateway);
    /// let _ = controller.send(ShortenRequest::new("ftp://x.com", None)).await;
    /// # }
    /// ```
    ///
    /// Dropping the returned future before it completes also returns the
    /// controller to `Idle`.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Invalid`] with [`ValidationError::Rejected`] for a
    ///   field-level error on `url`
    /// - [`SubmitError::Request`] for any other non-2xx response or an
    ///   unreadable 2xx body
    /// - [`SubmitError::Transport`] if no response was obtained
    pub async fn send(&mut self, prepared: PreparedRequest) -> Result<ShortenResult, SubmitError> {
        let PreparedRequest(request) = prepared;
        let gateway = Arc::clone(&self.gateway);
        let in_flight = InFlight::enter(&mut self.state);

        info!(url = %request.url, expires_at = ?request.expires_at, "Submitting URL");
        let response = gateway.shorten(&request).await;
        drop(in_flight);

        match response {
            Ok(result) => {
                info!(short_url = %result.short_url, "URL shortened");
                self.finish(SubmissionState::Succeeded);
                Ok(result)
            }
            Err(e) => {
                self.finish(SubmissionState::Failed);
                Err(map_gateway_error(e))
            }
        }
    }

    /// Validates and sends in one step.
    ///
    /// # Errors
    ///
    /// See [`prepare`](Self::prepare) and [`send`](Self::send).
    pub async fn submit(&mut self, form: &ShortenForm) -> Result<ShortenResult, SubmitError> {
        let request = self.prepare(form)?;
        self.send(request).await
    }

    fn finish(&mut self, outcome: SubmissionState) {
        self.last_outcome = Some(outcome);
        self.state = SubmissionState::Idle;
    }
}

/// A request whose URL passed validation.
///
/// Only [`SubmissionController::prepare`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest(ShortenRequest);

impl PreparedRequest {
    pub fn request(&self) -> &ShortenRequest {
        &self.0
    }
}

/// Keeps the controller in `Submitting` for as long as it is alive.
struct InFlight<'a> {
    state: &'a mut SubmissionState,
}

impl<'a> InFlight<'a> {
    fn enter(state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Submitting;
        Self { state }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.state = SubmissionState::Idle;
    }
}

fn map_gateway_error(err: GatewayError) -> SubmitError {
    match err {
        GatewayError::FieldRejected {
            status,
            field,
            message,
        } => {
            debug!(status, field = %field, "Backend rejected URL");
            ValidationError::Rejected(message).into()
        }
        GatewayError::Failed { status, message } => {
            warn!(status, message = ?message, "Backend failed to shorten URL");
            SubmitError::Request(message.unwrap_or_else(|| DEFAULT_REQUEST_ERROR.to_string()))
        }
        GatewayError::Transport(reason) => {
            error!("Request to shortening service failed: {}", reason);
            SubmitError::Transport { reason }
        }
        GatewayError::InvalidResponse(reason) => {
            error!("Unreadable response from shortening service: {}", reason);
            SubmitError::Request(INVALID_RESPONSE_ERROR.to_string())
        }
    }
}
