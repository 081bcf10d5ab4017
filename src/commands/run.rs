//! Run command - send selected entries to an action endpoint

use super::{Result, open, select};
use crate::cli::{SelectArgs, ViewArgs};
use crate::remote::Transport;
use crate::session::{ActionSpec, DispatchOutcome, ListSession};
use crate::ui::{OutputWriter, UserInput};

/// Execute the run command
///
/// # Errors
///
/// Returns `RowpickError::Session` if the refresh, a prompt or the request
/// fails, and `RowpickError::NoSuchEntry` for an index that is out of range.
pub async fn execute<T: Transport>(
    session: &mut ListSession<T>,
    action: &ActionSpec,
    selection: &SelectArgs,
    view: &ViewArgs,
    input: &dyn UserInput,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<DispatchOutcome> {
    open(session, view).await?;
    select(session, selection)?;

    let outcome = session.dispatch(action, input).await?;

    if !quiet {
        match outcome {
            DispatchOutcome::Sent { count } => {
                let noun = if count == 1 { "entry" } else { "entries" };
                output.success(&format!("{}: sent {count} {noun}", action.name));
            }
            DispatchOutcome::Cancelled => output.info("Cancelled"),
            DispatchOutcome::NothingSelected => output.info("Nothing selected"),
        }
    }

    Ok(outcome)
}
