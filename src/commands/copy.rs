//! Copy command - put selected entries on the clipboard

use super::{Result, open, select};
use crate::cli::{SelectArgs, ViewArgs};
use crate::remote::Transport;
use crate::session::ListSession;
use crate::ui::{Clipboard, OutputWriter};

/// Execute the copy command
///
/// Returns the number of entries copied. With a clipboard that hands its
/// contents over (see [`crate::ui::ArboardClipboard::handing_over`]) this
/// returns only once another owner holds the text.
///
/// # Errors
///
/// Returns `RowpickError::Session` if the refresh fails or the clipboard is
/// unavailable, and `RowpickError::NoSuchEntry` for an index that is out of
/// range.
pub async fn execute<T: Transport>(
    session: &mut ListSession<T>,
    selection: &SelectArgs,
    view: &ViewArgs,
    clean: bool,
    clipboard: &mut dyn Clipboard,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<usize> {
    open(session, view).await?;
    select(session, selection)?;

    let count = session.copy_selection(clipboard, clean)?;

    if !quiet {
        if count == 0 {
            output.info("Nothing selected");
        } else {
            output.success(&format!("Copied {count} to the clipboard"));
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RowpickError;
    use crate::remote::MockTransport;
    use crate::session::SessionError;
    use crate::ui::{MessageLevel, MessageLog, MockClipboard};

    fn session() -> ListSession<MockTransport> {
        let body = "<div>A.mkv</div><div>[Group] B - 02 (1080p).mkv</div><div>C.mkv</div>";
        ListSession::new(MockTransport::new().reply(200, body), "/list")
    }

    #[tokio::test]
    async fn test_copy_clean_labels_in_order() {
        let mut session = session();
        let mut clipboard = MockClipboard::new();
        let log = MessageLog::new();
        let selection = SelectArgs {
            select: vec![3, 2],
            ..SelectArgs::default()
        };

        let count = execute(
            &mut session,
            &selection,
            &ViewArgs::default(),
            true,
            &mut clipboard,
            &log,
            false,
        )
        .await
        .unwrap();

        assert_eq!(count, 2);
        assert_eq!(clipboard.contents.as_deref(), Some("C\nB"));
        assert_eq!(log.at_level(MessageLevel::Success), vec!["Copied 2 to the clipboard"]);
    }

    #[tokio::test]
    async fn test_copy_without_clipboard() {
        let mut session = session();
        let mut clipboard = MockClipboard::unavailable();
        let selection = SelectArgs {
            all: true,
            ..SelectArgs::default()
        };

        let err = execute(
            &mut session,
            &selection,
            &ViewArgs::default(),
            false,
            &mut clipboard,
            &MessageLog::new(),
            false,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            RowpickError::Session(SessionError::Clipboard(_))
        ));
        assert_eq!(err.to_string(), crate::ui::CLIPBOARD_UNAVAILABLE);
    }
}
