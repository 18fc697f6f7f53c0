//! Front-end interface driven by the session.

use super::format::{HistoryRow, ResultPanel};

/// Everything the session needs from a user interface.
///
/// Calls arrive in event order; an implementation only lays out what it is
/// given and never owns client state.
pub trait View {
    /// A request is in flight; submission should look disabled.
    fn show_loading(&mut self);
    fn hide_loading(&mut self);

    fn show_result(&mut self, panel: &ResultPanel);
    fn hide_result(&mut self);

    /// General error panel.
    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);

    /// Inline error next to the URL input.
    fn show_validation_error(&mut self, message: &str);
    fn clear_validation_error(&mut self);

    /// Replaces the history list. An empty slice shows the empty state.
    fn render_history(&mut self, rows: &[HistoryRow]);

    /// Clears the input form after a successful submission.
    fn reset_form(&mut self);

    /// Short-lived notification.
    fn toast(&mut self, message: &str);

    /// Puts `text` where the user can select and copy it by hand.
    fn select_text(&mut self, text: &str);

    /// Asks the user to confirm a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;
}
