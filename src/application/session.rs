//! Client session: the one object that owns all client state.
//!
//! A front end creates a session at startup and forwards each user event to
//! the matching method. The session drives the [`View`] in response; nothing
//! else holds client state.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::application::services::{HistoryStore, SubmissionController, SubmissionState};
use crate::domain::entities::{HistoryItem, ShortenForm, ShortenResult};
use crate::domain::gateway::ShortenerGateway;
use crate::domain::repositories::HistoryStorage;
use crate::error::{HistoryError, SubmitError};
use crate::presentation::clipboard::Clipboard;
use crate::presentation::format::{ResultPanel, project_history};
use crate::presentation::view::View;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const DELETED_MESSAGE: &str = "Item deleted";
pub const CLEARED_MESSAGE: &str = "History cleared";
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all history?";

/// Submission controller, history store, view and clipboard of one client.
pub struct ShortifierSession<G, S, V, C>
where
    G: ShortenerGateway,
    S: HistoryStorage,
    V: View,
    C: Clipboard,
{
    controller: SubmissionController<G>,
    history: HistoryStore<S>,
    view: V,
    clipboard: C,
    current: Option<ShortenResult>,
}

impl<G, S, V, C> ShortifierSession<G, S, V, C>
where
    G: ShortenerGateway,
    S: HistoryStorage,
    V: View,
    C: Clipboard,
{
    /// Loads the history from `storage` and renders it.
    pub fn start(gateway: Arc<G>, storage: S, view: V, clipboard: C) -> Self {
        let mut session = Self {
            controller: SubmissionController::new(gateway),
            history: HistoryStore::load(storage),
            view,
            clipboard,
            current: None,
        };
        session.render_history();
        session
    }

    pub fn history(&self) -> &[HistoryItem] {
        self.history.items()
    }

    pub fn state(&self) -> SubmissionState {
        self.controller.state()
    }

    /// Result currently shown in the result panel.
    pub fn current_result(&self) -> Option<&ShortenResult> {
        self.current.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Handles a form submission.
    ///
    /// # Flow
    ///
    /// 1. Hide the previous result and errors
    /// 2. Validate; on failure show the inline error and stop
    /// 3. Show loading and send the request
    /// 4. On success show the result, record it in history, re-render and
    ///    reset the form
    /// 5. On failure show the inline error (field-level) or the error panel
    ///
    /// # Errors
    ///
    /// Returns the [`SubmitError`] that was shown to the user, or
    /// [`SubmitError::Busy`] (with no view changes) if a request is in flight.
    pub async fn submit(&mut self, form: &ShortenForm) -> Result<ShortenResult, SubmitError> {
        let prepared = self.controller.prepare(form);
        if let Err(SubmitError::Busy) = prepared {
            return Err(SubmitError::Busy);
        }

        self.view.hide_result();
        self.current = None;
        self.view.hide_error();
        self.view.clear_validation_error();

        let request = match prepared {
            Ok(request) => request,
            Err(e) => {
                self.show_failure(&e);
                return Err(e);
            }
        };

        self.view.show_loading();
        let outcome = self.controller.send(request).await;
        self.view.hide_loading();

        match outcome {
            Ok(result) => {
                self.view.show_result(&ResultPanel::from_result(&result));
                self.history.add(result.clone());
                self.render_history();
                self.view.reset_form();
                self.current = Some(result.clone());
                Ok(result)
            }
            Err(e) => {
                self.show_failure(&e);
                Err(e)
            }
        }
    }

    /// The URL input changed; the inline error no longer applies.
    pub fn input_changed(&mut self) {
        self.view.clear_validation_error();
    }

    /// Copies the short URL from the result panel.
    ///
    /// If the clipboard fails the URL is handed to [`View::select_text`] and the
    /// copy is still reported. Returns false if no result is shown.
    pub fn copy_result(&mut self) -> bool {
        let Some(short_url) = self.current.as_ref().map(|r| r.short_url.clone()) else {
            return false;
        };

        if let Err(e) = self.clipboard.copy(&short_url) {
            warn!("Failed to copy: {}", e);
            self.view.select_text(&short_url);
        }
        self.view.toast(COPIED_MESSAGE);
        true
    }

    /// Copies the short URL of a history entry.
    ///
    /// Clipboard failures are logged only.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] for an unknown index.
    pub fn copy_history_item(&mut self, index: usize) -> Result<(), HistoryError> {
        let short_url = self
            .history
            .get(index)
            .map(|item| item.short_url.clone())
            .ok_or(HistoryError::IndexOutOfRange {
                index,
                len: self.history.len(),
            })?;

        match self.clipboard.copy(&short_url) {
            Ok(()) => self.view.toast(COPIED_MESSAGE),
            Err(e) => warn!("Failed to copy: {}", e),
        }
        Ok(())
    }

    /// Deletes a history entry.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] for an unknown index; the
    /// view is left untouched in that case.
    pub fn delete_history_item(&mut self, index: usize) -> Result<HistoryItem, HistoryError> {
        let removed = self.history.remove(index)?;
        info!(short_url = %removed.short_url, "History item deleted");
        self.render_history();
        self.view.toast(DELETED_MESSAGE);
        Ok(removed)
    }

    /// Clears the history after the user confirms.
    ///
    /// Returns false, changing nothing, if the user declines.
    pub fn clear_history(&mut self) -> bool {
        if !self.view.confirm(CLEAR_PROMPT) {
            return false;
        }

        self.history.clear();
        info!("History cleared");
        self.render_history();
        self.view.toast(CLEARED_MESSAGE);
        true
    }

    /// Re-renders the history list against the current time.
    pub fn render_history(&mut self) {
        let rows = project_history(self.history.items(), Utc::now());
        self.view.render_history(&rows);
    }

    fn show_failure(&mut self, err: &SubmitError) {
        match err {
            SubmitError::Invalid(e) => self.view.show_validation_error(&e.to_string()),
            SubmitError::Request(_) | SubmitError::Transport { .. } => {
                self.view.show_error(&err.to_string())
            }
            SubmitError::Busy => {}
        }
    }
}
