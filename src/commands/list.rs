//! List command - fetch a listing and print the visible entries

use super::{Result, open};
use crate::cli::ViewArgs;
use crate::listing::{Entry, EntryId};
use crate::remote::Transport;
use crate::session::ListSession;
use crate::ui::OutputWriter;
use serde::Serialize;

/// How entries are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// Index and raw label
    #[default]
    Raw,
    /// Index and clean label
    Clean,
    /// JSON array
    Json,
}

#[derive(Serialize)]
struct ListedEntry<'a> {
    index: usize,
    id: EntryId,
    label: &'a str,
    clean: String,
    child_count: usize,
    classes: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
}

impl<'a> ListedEntry<'a> {
    fn new(index: usize, entry: &'a Entry) -> Self {
        Self {
            index,
            id: entry.id,
            label: &entry.raw_label,
            clean: entry.text(true),
            child_count: entry.child_count,
            classes: &entry.classes,
            key: entry.key.as_deref(),
        }
    }
}

/// Execute the list command
///
/// Indexes are 1-based and match what `run --select` and `copy --select`
/// expect for the same view arguments.
///
/// # Errors
///
/// Returns `RowpickError::Session` if the refresh fails, or
/// `RowpickError::Json` if JSON output cannot be produced.
pub async fn execute<T: Transport>(
    session: &mut ListSession<T>,
    view: &ViewArgs,
    format: ListFormat,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let total = open(session, view).await?;
    let visible: Vec<&Entry> = session.registry().visible().collect();

    if format == ListFormat::Json {
        let rows: Vec<ListedEntry<'_>> = visible
            .iter()
            .enumerate()
            .map(|(i, entry)| ListedEntry::new(i + 1, entry))
            .collect();
        output.write(&serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let width = visible.len().to_string().len();
    for (i, entry) in visible.iter().enumerate() {
        let text = entry.text(format == ListFormat::Clean);
        output.write(&format!("{:>width$}  {text}", i + 1));
    }

    if !quiet {
        output.info(&format!("{} of {total} entries shown", visible.len()));
    }

    Ok(())
}
