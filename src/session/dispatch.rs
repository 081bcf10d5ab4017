//! Action dispatch - send the selection to a remote endpoint
//!
//! The form body carries, in order: the prompted `input` value (if the
//! action asks for one), one identifier field per selected entry in
//! canonical order, then the action's fixed fields.

use super::ListSession;
use super::error::{Result, SessionError};
use crate::remote::Transport;
use crate::ui::UserInput;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Question asked before actions marked `confirm`
pub const CONFIRM_PROMPT: &str = "Are you sure you want to proceed with the requested action?";

/// Form field holding the prompted value
pub const INPUT_FIELD: &str = "input";

/// What to do when the user confirms an empty prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyInput {
    /// Send the empty string
    Forward,

    /// Treat it like a cancellation
    #[default]
    Abort,
}

/// A remote action as declared in the configuration
///
/// ```toml
/// [[listings.files.actions]]
/// name = "move"
/// endpoint = "/files/move"
/// prompt = "Destination folder"
/// refresh = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub name: String,
    pub endpoint: String,

    /// Form field repeated once per selected entry
    #[serde(default = "default_field")]
    pub field: String,

    /// Ask for confirmation first
    #[serde(default)]
    pub confirm: bool,

    /// Ask for a value with this prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Refresh the listing after a successful request
    #[serde(default)]
    pub refresh: bool,

    #[serde(default)]
    pub empty_input: EmptyInput,

    /// Fixed fields appended to every request
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

fn default_field() -> String {
    "path".to_string()
}

impl ActionSpec {
    /// A plain action: no confirmation, no prompt, no refresh
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            field: default_field(),
            confirm: false,
            prompt: None,
            refresh: false,
            empty_input: EmptyInput::default(),
            extra: BTreeMap::new(),
        }
    }

    /// Build the form body for the given input value and identifiers
    #[must_use]
    pub fn form(&self, input: Option<&str>, identifiers: &[String]) -> Vec<(String, String)> {
        let mut form = Vec::with_capacity(identifiers.len() + self.extra.len() + 1);

        if let Some(input) = input {
            form.push((INPUT_FIELD.to_string(), input.to_string()));
        }

        form.extend(identifiers.iter().map(|id| (self.field.clone(), id.clone())));

        form.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        form
    }
}

/// How a dispatch ended, when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The server accepted the request for `count` entries
    Sent { count: usize },

    /// The user declined the confirmation or cancelled the prompt
    Cancelled,

    /// Nothing was selected; no request was made
    NothingSelected,
}

impl<T: Transport> ListSession<T> {
    /// Send the current selection to `action.endpoint`
    ///
    /// Nothing is asked or sent when the selection is empty. On success the
    /// listing is refreshed if the action asks for it.
    ///
    /// # Errors
    ///
    /// - `SessionError::Input` if prompting fails
    /// - `SessionError::Transport` if the request fails
    /// - `SessionError::Rejected` if the server answers with a non-200 status
    ///
    /// The session is unchanged after any of these. Errors from the follow-up
    /// refresh are returned as they are from [`refresh`](Self::refresh).
    pub async fn dispatch(
        &mut self,
        action: &ActionSpec,
        input: &dyn UserInput,
    ) -> Result<DispatchOutcome> {
        let identifiers: Vec<String> = self
            .snapshot()
            .iter()
            .map(|entry| entry.raw_label.clone())
            .collect();

        if identifiers.is_empty() {
            tracing::debug!(action = %action.name, "nothing selected");
            return Ok(DispatchOutcome::NothingSelected);
        }

        if action.confirm && input.prompt_confirm(CONFIRM_PROMPT, false)? != Some(true) {
            return Ok(DispatchOutcome::Cancelled);
        }

        let value = match &action.prompt {
            Some(prompt) => match input.prompt_text(prompt)? {
                None => return Ok(DispatchOutcome::Cancelled),
                Some(value) if value.is_empty() && action.empty_input == EmptyInput::Abort => {
                    return Ok(DispatchOutcome::Cancelled);
                }
                Some(value) => Some(value),
            },
            None => None,
        };

        let form = action.form(value.as_deref(), &identifiers);
        tracing::info!(
            action = %action.name,
            endpoint = %action.endpoint,
            entries = identifiers.len(),
            "dispatching"
        );

        let response = self.transport.post_form(&action.endpoint, &form).await?;
        if !response.is_success() {
            tracing::warn!(action = %action.name, status = response.status, "action rejected");
            return Err(SessionError::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        if action.refresh {
            self.refresh().await?;
        }

        Ok(DispatchOutcome::Sent {
            count: identifiers.len(),
        })
    }
}
