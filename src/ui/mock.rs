//! Scripted input and clipboard for testing

use super::clipboard::Clipboard;
use super::error::{ClipboardError, Result};
use super::input::UserInput;
use std::cell::RefCell;

/// Mock input that returns predetermined answers
///
/// `None` answers simulate the user cancelling the prompt. Every prompt
/// shown is recorded.
#[derive(Debug, Default)]
pub struct MockInput {
    /// Answer to confirmation prompts
    pub confirm: Option<bool>,
    /// Answer to text prompts
    pub text: Option<String>,
    prompts: RefCell<Vec<String>>,
}

impl MockInput {
    /// Confirm everything and answer text prompts with `text`
    #[must_use]
    pub fn answering(text: &str) -> Self {
        Self {
            confirm: Some(true),
            text: Some(text.to_string()),
            prompts: RefCell::default(),
        }
    }

    /// Answer confirmation prompts with `answer`
    #[must_use]
    pub fn confirming(answer: bool) -> Self {
        Self {
            confirm: Some(answer),
            text: None,
            prompts: RefCell::default(),
        }
    }

    /// Cancel every prompt
    #[must_use]
    pub fn cancelled() -> Self {
        Self::default()
    }

    /// Prompts shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    fn record(&self, prompt: &str) {
        self.prompts.borrow_mut().push(prompt.to_string());
    }
}

impl UserInput for MockInput {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        self.record(prompt);
        Ok(self.text.clone())
    }

    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<Option<bool>> {
        self.record(prompt);
        Ok(self.confirm)
    }
}

/// In-memory clipboard
#[derive(Debug, Clone)]
pub struct MockClipboard {
    /// Whether writes succeed
    pub available: bool,
    /// Last text written
    pub contents: Option<String>,
}

impl MockClipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            available: true,
            contents: None,
        }
    }

    /// A clipboard that rejects every write
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            available: false,
            contents: None,
        }
    }
}

impl Default for MockClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for MockClipboard {
    fn set_text(&mut self, text: &str) -> std::result::Result<(), ClipboardError> {
        if !self.available {
            return Err(ClipboardError::Unavailable);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_input_records_prompts() {
        let input = MockInput::answering("Season 2");

        assert_eq!(input.prompt_confirm("Move?", false).unwrap(), Some(true));
        assert_eq!(input.prompt_text("Folder").unwrap().as_deref(), Some("Season 2"));
        assert_eq!(input.prompts(), vec!["Move?", "Folder"]);
    }

    #[test]
    fn test_mock_input_cancelled() {
        let input = MockInput::cancelled();

        assert_eq!(input.prompt_confirm("Move?", true).unwrap(), None);
        assert_eq!(input.prompt_text("Folder").unwrap(), None);
    }

    #[test]
    fn test_mock_clipboard() {
        let mut clipboard = MockClipboard::new();
        clipboard.set_text("a\nb").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("a\nb"));

        let mut unavailable = MockClipboard::unavailable();
        assert!(matches!(
            unavailable.set_text("a"),
            Err(ClipboardError::Unavailable)
        ));
    }
}
