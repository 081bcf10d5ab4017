//! Clipboard access
//!
//! The system clipboard is not reachable everywhere (headless sessions,
//! containers). Acquisition failures are deferred to the first write, which
//! then reports [`ClipboardError::Unavailable`].
//!
//! On X11 and Wayland the copying process owns the clipboard contents, which
//! vanish when it exits. A short-lived process should use
//! [`ArboardClipboard::handing_over`], which blocks in `set_text` until a
//! clipboard manager or another program has taken the contents over.

use super::error::ClipboardError;

/// A place selected text can be copied to
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError::Unavailable` when no clipboard can be reached.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard
pub struct ArboardClipboard {
    inner: Option<arboard::Clipboard>,
    hand_over: bool,
}

impl ArboardClipboard {
    /// Connect to the system clipboard
    ///
    /// Never fails; an unreachable clipboard surfaces on [`Clipboard::set_text`].
    #[must_use]
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                None
            }
        };

        Self {
            inner,
            hand_over: false,
        }
    }

    /// Keep ownership of written text until another owner takes it over
    ///
    /// Only has an effect on Linux.
    #[must_use]
    pub fn handing_over(mut self, hand_over: bool) -> Self {
        self.hand_over = hand_over;
        self
    }

    /// Whether writes wait for a hand-over
    #[must_use]
    pub const fn hands_over(&self) -> bool {
        self.hand_over
    }

    /// Whether a clipboard backend was reached
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for ArboardClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable);
        };

        #[cfg(target_os = "linux")]
        if self.hand_over {
            use arboard::SetExtLinux;

            tracing::debug!("waiting for clipboard hand-over");
            return clipboard
                .set()
                .wait()
                .text(text)
                .map_err(|e| ClipboardError::Write(e.to_string()));
        }

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
