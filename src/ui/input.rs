//! User input abstraction layer
//!
//! Actions may need a confirmation or a free-text value before they are
//! sent. This trait hides how those are obtained, so the dispatcher can be
//! driven by dialoguer on a terminal or by a scripted mock in tests.

use super::error::{InputError, Result};
use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use rowpick::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
///
/// if let Some(true) = input.prompt_confirm("Remove 3 entries?", false).unwrap() {
///     println!("Removing...");
/// }
/// ```
pub trait UserInput {
    /// Prompt user for text input
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered text (possibly empty)
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the terminal cannot be read.
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>>;

    /// Prompt user for confirmation (yes/no)
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bool))` - User confirmed (true) or denied (false)
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the terminal cannot be read.
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        use dialoguer::Input;

        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(InputError::Io(io::Error::other(e))),
        }
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}

/// Input handler with answers supplied up front
///
/// Prompts with a preset answer are not shown; everything else is passed to
/// the wrapped handler.
#[derive(Debug, Clone, Default)]
pub struct PresetInput<I> {
    text: Option<String>,
    assume_yes: bool,
    fallback: I,
}

impl<I: UserInput> PresetInput<I> {
    /// Wrap `fallback` with no presets
    #[must_use]
    pub const fn new(fallback: I) -> Self {
        Self {
            text: None,
            assume_yes: false,
            fallback,
        }
    }

    /// Answer text prompts with `text`
    #[must_use]
    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    /// Answer confirmations with yes
    #[must_use]
    pub const fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }
}

impl<I: UserInput> UserInput for PresetInput<I> {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        match &self.text {
            Some(text) => Ok(Some(text.clone())),
            None => self.fallback.prompt_text(prompt),
        }
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        if self.assume_yes {
            return Ok(Some(true));
        }
        self.fallback.prompt_confirm(prompt, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockInput;

    #[test]
    fn test_dialoguer_input_creation() {
        let _input = DialoguerInput::new();
        let _input2 = DialoguerInput::default();
    }

    #[test]
    fn test_preset_input_answers_before_fallback() {
        let input = PresetInput::new(MockInput::confirming(false))
            .with_text(Some("Season 2".into()))
            .assume_yes(true);

        assert_eq!(input.prompt_text("?").unwrap().as_deref(), Some("Season 2"));
        assert_eq!(input.prompt_confirm("?", false).unwrap(), Some(true));
    }

    #[test]
    fn test_preset_input_defers_missing_answers() {
        let input = PresetInput::new(MockInput::confirming(false));

        assert_eq!(input.prompt_confirm("Remove?", true).unwrap(), Some(false));
        assert_eq!(input.prompt_text("Folder").unwrap(), None);
    }
}
