//! UI abstraction layer
//!
//! Everything the list controller needs from its surroundings that is not
//! HTTP: prompts before an action is sent, the clipboard, and a place to
//! report outcomes and errors.
//!
//! # Core Traits
//!
//! - **`UserInput`** - Confirmations and free-text prompts
//! - **`Clipboard`** - Plain-text clipboard writes
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Controller Layer                   │
//! │   (session, commands)                   │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │  (UserInput, Clipboard, OutputWriter)   │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI Adapters  │  │ Test Doubles      │
//! │ - Dialoguer   │  │ - MockInput       │
//! │ - Arboard     │  │ - MockClipboard   │
//! │ - Stdout      │  │ - MessageLog      │
//! └───────────────┘  └───────────────────┘
//! ```

pub mod clipboard;
pub mod error;
pub mod input;
pub mod mock;
pub mod output;

pub use clipboard::{ArboardClipboard, Clipboard};
pub use error::{CLIPBOARD_UNAVAILABLE, ClipboardError, InputError};
pub use input::{DialoguerInput, PresetInput, UserInput};
pub use mock::{MockClipboard, MockInput};
pub use output::{MessageLevel, MessageLog, OutputWriter, StdoutWriter};
