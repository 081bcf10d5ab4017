//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and drives a [`ListSession`]. Results and status go through an
//! [`OutputWriter`](crate::ui::OutputWriter) so commands can be tested
//! against a [`MessageLog`](crate::ui::MessageLog).

pub mod clean;
pub mod copy;
pub mod list;
pub mod run;

pub use clean::execute as clean;
pub use copy::execute as copy;
pub use list::execute as list;
pub use run::execute as run;

use crate::RowpickError;
use crate::cli::{SelectArgs, ViewArgs};
use crate::listing::EntryId;
use crate::remote::Transport;
use crate::session::ListSession;

type Result<T> = std::result::Result<T, RowpickError>;

/// Apply view arguments and fetch the listing
///
/// Toggles and the filter are set before the fetch so the new registry is
/// built with them applied.
///
/// # Errors
///
/// Returns `RowpickError::Session` if the refresh fails.
pub async fn open<T: Transport>(session: &mut ListSession<T>, view: &ViewArgs) -> Result<usize> {
    for name in &view.hide {
        session.set_toggle(name, true);
    }
    for name in &view.show {
        session.set_toggle(name, false);
    }
    if let Some(query) = &view.filter {
        session.set_filter(query);
    }

    Ok(session.refresh().await?)
}

/// Apply selection arguments to the current registry
///
/// `--select` toggles entries in the order given, `--range` replaces the
/// selection with the first index and extends it to the second, `--all`
/// selects every visible entry. Returns the number of selected entries.
///
/// # Errors
///
/// Returns `RowpickError::NoSuchEntry` if an index is out of range; nothing
/// is selected in that case.
pub fn select<T: Transport>(session: &mut ListSession<T>, args: &SelectArgs) -> Result<usize> {
    if args.all {
        let visible = session.registry().visible().count();
        if let (Some(first), Some(last)) = (
            session.nth_visible(0),
            visible.checked_sub(1).and_then(|n| session.nth_visible(n)),
        ) {
            session.replace(first);
            session.range(last);
        }
    } else if let [from, to] = args.range[..] {
        let from = resolve(session, from)?;
        let to = resolve(session, to)?;
        session.replace(from);
        session.range(to);
    } else {
        let ids = args
            .select
            .iter()
            .map(|n| resolve(session, *n))
            .collect::<Result<Vec<_>>>()?;

        for id in ids {
            session.toggle(id);
        }
    }

    Ok(session.registry().selected_count())
}

fn resolve<T: Transport>(session: &ListSession<T>, index: usize) -> Result<EntryId> {
    index
        .checked_sub(1)
        .and_then(|n| session.nth_visible(n))
        .ok_or_else(|| RowpickError::NoSuchEntry {
            index,
            visible: session.registry().visible().count(),
        })
}
