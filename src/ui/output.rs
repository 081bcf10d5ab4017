//! Output abstraction layer
//!
//! Commands report through [`OutputWriter`] so the same code can print to a
//! terminal or collect messages for a host that renders them itself.

use colored::Colorize;
use std::sync::{Arc, Mutex};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use rowpick::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Show - 01.mkv");
/// output.success("Copied 1 entry");
/// output.error("disk error");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Info,
}

/// Writer that keeps every message in memory
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Arc<Mutex<Vec<(MessageLevel, String)>>>,
}

impl MessageLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in the order they were written
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Messages of one level
    #[must_use]
    pub fn at_level(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg)
            .collect()
    }

    fn add(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl OutputWriter for MessageLog {
    fn write(&self, message: &str) {
        self.add(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add(MessageLevel::Success, message);
    }

    fn info(&self, message: &str) {
        self.add(MessageLevel::Info, message);
    }
}
