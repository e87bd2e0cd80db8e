//! Entry points used by the screens and the CLI.

use chrono::NaiveDate;
use roster_model::{EmployeeForm, EmployeeId, Locale};
use roster_store::{StorageBackend, Store};
use roster_view::{ConfirmDialog, ConfirmationGate, Decision, Selection};

use crate::action::{Action, Outcome, Plan, plan_submit};
use crate::error::Result;

/// Ask `gate` about `action` and apply it if confirmed.
fn confirm_and_apply<S, G>(
    store: &mut Store<S>,
    action: Action,
    gate: &mut G,
    locale: Locale,
) -> Result<Outcome>
where
    S: StorageBackend,
    G: ConfirmationGate + ?Sized,
{
    let prompt = action.prompt(&*store, locale);
    match gate.confirm(&prompt) {
        Decision::Confirmed => action.apply(store),
        Decision::Declined => {
            tracing::debug!(message = %prompt.message, "declined");
            Ok(Outcome::Cancelled)
        }
    }
}

/// Validate a form, confirm, then create (`editing == None`) or update.
///
/// Invalid forms return [`Outcome::Rejected`] without consulting the gate.
pub fn submit_form<S, G>(
    store: &mut Store<S>,
    form: &EmployeeForm,
    editing: Option<&EmployeeId>,
    gate: &mut G,
    locale: Locale,
    today: NaiveDate,
) -> Result<Outcome>
where
    S: StorageBackend,
    G: ConfirmationGate + ?Sized,
{
    match plan_submit(form, editing, &*store, today)? {
        Plan::Rejected(issues) => Ok(Outcome::Rejected(issues)),
        Plan::Ready(action) => confirm_and_apply(store, action, gate, locale),
    }
}

/// Confirm, then delete one employee. Unknown ids get the generic prompt
/// and delete nothing.
pub fn request_delete<S, G>(
    store: &mut Store<S>,
    id: &EmployeeId,
    gate: &mut G,
    locale: Locale,
) -> Result<Outcome>
where
    S: StorageBackend,
    G: ConfirmationGate + ?Sized,
{
    confirm_and_apply(store, Action::Delete(vec![id.clone()]), gate, locale)
}

/// Confirm once, then delete every selected employee that still exists.
///
/// Deleted and stale identifiers are dropped from `selection`. An empty
/// selection deletes nothing and asks nothing.
pub fn bulk_delete<S, G>(
    store: &mut Store<S>,
    selection: &mut Selection,
    gate: &mut G,
    locale: Locale,
) -> Result<Outcome>
where
    S: StorageBackend,
    G: ConfirmationGate + ?Sized,
{
    selection.prune(store.employees());
    if selection.is_empty() {
        return Ok(Outcome::Deleted(0));
    }

    let ids: Vec<EmployeeId> = selection.iter().cloned().collect();
    let outcome = confirm_and_apply(store, Action::Delete(ids), gate, locale)?;
    selection.prune(store.employees());
    Ok(outcome)
}

/// Open `dialog` for `action`. The action is applied by [`finish`].
pub fn stage<S: StorageBackend>(
    store: &Store<S>,
    dialog: &mut ConfirmDialog<Action>,
    action: Action,
    locale: Locale,
) -> Result<()> {
    let prompt = action.prompt(store, locale);
    dialog.request(prompt, action)?;
    Ok(())
}

/// Resolve `dialog` with `decision` and apply the parked action if confirmed.
///
/// Returns `None` when nothing was pending.
pub fn finish<S: StorageBackend>(
    store: &mut Store<S>,
    dialog: &mut ConfirmDialog<Action>,
    decision: Decision,
) -> Result<Option<Outcome>> {
    match dialog.resolve(decision) {
        None => Ok(None),
        Some((action, Decision::Confirmed)) => action.apply(store).map(Some),
        Some((_, Decision::Declined)) => Ok(Some(Outcome::Cancelled)),
    }
}
