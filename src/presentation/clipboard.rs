//! System clipboard access.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ClipboardError;

/// How long a one-shot command keeps serving the clipboard before exiting.
pub const ONE_SHOT_HOLD: Duration = Duration::from_secs(15);

/// Destination for copied short URLs.
pub trait Clipboard {
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the clipboard cannot be reached or written.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard of the desktop session, via `arboard`.
///
/// The connection is opened lazily on first use so that headless sessions
/// only fail when a copy is actually requested.
///
/// On X11 and Wayland the copying process owns the selection, so text copied
/// by a short-lived process disappears when it exits. A clipboard built with
/// [`one_shot`](Self::one_shot) serves its last copy for up to the hold time
/// when dropped, or until another application takes over the clipboard.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
    last_copied: Option<String>,
}

impl SystemClipboard {
    /// Clipboard for a long-running session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard for a process that exits right after copying.
    pub fn one_shot(hold: Duration) -> Self {
        Self {
            inner: None,
            hold: Some(hold),
            last_copied: None,
        }
    }

    /// Time the last copy is served on drop, if any.
    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }

    fn connection(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        Ok(self.inner.insert(clipboard))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.connection()?
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        if self.hold.is_some() {
            self.last_copied = Some(text.to_string());
        }
        Ok(())
    }
}

impl Drop for SystemClipboard {
    fn drop(&mut self) {
        let (Some(hold), Some(text), Some(clipboard)) =
            (self.hold, self.last_copied.take(), self.inner.as_mut())
        else {
            return;
        };

        debug!(hold_secs = hold.as_secs(), "Serving clipboard before exit");
        if let Err(e) = serve_until(clipboard, &text, hold) {
            warn!("Failed to keep clipboard contents: {}", e);
        }
    }
}

/// Sets `text` again and blocks until `hold` elapses or another application
/// owns the clipboard.
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn serve_until(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: Duration,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard
        .set()
        .wait_until(std::time::Instant::now() + hold)
        .text(text)
}

/// Other platforms keep clipboard contents after the owner exits.
#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn serve_until(
    _clipboard: &mut arboard::Clipboard,
    _text: &str,
    _hold: Duration,
) -> Result<(), arboard::Error> {
    Ok(())
}
