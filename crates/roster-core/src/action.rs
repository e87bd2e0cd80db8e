//! Validated mutations waiting for confirmation.

use chrono::NaiveDate;
use roster_model::{Employee, EmployeeDirectory, EmployeeDraft, EmployeeForm, EmployeeId, Locale, Message};
use roster_store::{StorageBackend, Store, create_employee, delete_employee, delete_employees, update_employee};
use roster_validate::{Issue, validate};
use roster_view::ConfirmPrompt;

use crate::error::Result;

/// A mutation that has passed validation but not yet confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create(EmployeeDraft),
    Update(EmployeeId, EmployeeDraft),
    Delete(Vec<EmployeeId>),
}

/// What a workflow ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The employee as stored.
    Saved(Employee),
    /// Number of employees actually removed.
    Deleted(usize),
    /// Validation failed; nothing was asked or changed.
    Rejected(Vec<Issue>),
    /// The gate declined.
    Cancelled,
    /// An update targeted an employee that no longer exists.
    NotFound(EmployeeId),
}

/// Result of validating a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Ready(Action),
    Rejected(Vec<Issue>),
}

/// Validate `form` and turn it into a create or update [`Action`].
pub fn plan_submit<D>(
    form: &EmployeeForm,
    editing: Option<&EmployeeId>,
    directory: &D,
    today: NaiveDate,
) -> Result<Plan>
where
    D: EmployeeDirectory + ?Sized,
{
    let issues = validate(form, editing, directory, today);
    if !issues.is_empty() {
        return Ok(Plan::Rejected(issues));
    }

    let draft = form.to_draft()?;
    let action = match editing {
        Some(id) => Action::Update(id.clone(), draft),
        None => Action::Create(draft),
    };
    Ok(Plan::Ready(action))
}

impl Action {
    /// Prompt shown before applying this action.
    ///
    /// A single deletion names the employee when it can be found; otherwise
    /// the generic wording is used.
    pub fn prompt<D>(&self, directory: &D, locale: Locale) -> ConfirmPrompt
    where
        D: EmployeeDirectory + ?Sized,
    {
        match self {
            Self::Create(_) => ConfirmPrompt::update(locale.translate(Message::Save)),
            Self::Update(..) => ConfirmPrompt::update(locale.translate(Message::ConfirmUpdate)),
            Self::Delete(ids) => match ids.as_slice() {
                [id] => match directory.find_by_id(id) {
                    Some(employee) => ConfirmPrompt::delete(format!(
                        "{} {}",
                        employee.full_name(),
                        locale.translate(Message::ConfirmDeleteEmployee)
                    )),
                    None => ConfirmPrompt::delete(locale.translate(Message::ConfirmDelete)),
                },
                many => ConfirmPrompt::delete(format!(
                    "{} {}",
                    many.len(),
                    locale.translate(Message::ConfirmDeleteSelected)
                )),
            },
        }
    }

    /// Perform the mutation.
    pub fn apply<S: StorageBackend>(self, store: &mut Store<S>) -> Result<Outcome> {
        match self {
            Self::Create(draft) => {
                let employee = create_employee(store, draft)?;
                tracing::info!(id = %employee.id, "employee created");
                Ok(Outcome::Saved(employee))
            }
            Self::Update(id, draft) => {
                let employee = Employee::from_draft(id.clone(), draft.clone());
                if update_employee(store, &id, draft)? {
                    tracing::info!(%id, "employee updated");
                    Ok(Outcome::Saved(employee))
                } else {
                    tracing::warn!(%id, "update target no longer exists");
                    Ok(Outcome::NotFound(id))
                }
            }
            Self::Delete(ids) => {
                let removed = match ids.as_slice() {
                    [id] => usize::from(delete_employee(store, id)?),
                    ids => delete_employees(store, ids)?,
                };
                tracing::info!(requested = ids.len(), removed, "employees deleted");
                Ok(Outcome::Deleted(removed))
            }
        }
    }
}
