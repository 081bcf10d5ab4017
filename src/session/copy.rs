//! Copy the selection as text

use super::ListSession;
use super::error::Result;
use crate::remote::Transport;
use crate::ui::Clipboard;

impl<T: Transport> ListSession<T> {
    /// Selected labels joined by newlines, in canonical order
    ///
    /// With `clean`, each label goes through [`crate::listing::clean`] first.
    pub fn selection_text(&self, clean: bool) -> String {
        self.snapshot()
            .iter()
            .map(|entry| entry.text(clean))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the selection to the clipboard
    ///
    /// Returns the number of entries copied; an empty selection copies
    /// nothing and leaves the clipboard alone.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Clipboard` if the clipboard cannot be written.
    pub fn copy_selection(&self, clipboard: &mut dyn Clipboard, clean: bool) -> Result<usize> {
        let count = self.registry.selected_count();
        if count == 0 {
            return Ok(0);
        }

        clipboard.set_text(&self.selection_text(clean))?;
        tracing::debug!(count, clean, "selection copied");
        Ok(count)
    }
}
