//! Employee form validation.
//!
//! [`validate`] runs every check against a submitted [`EmployeeForm`] and
//! returns all issues it finds; it never stops at the first one. An empty
//! list means the form may be submitted.
//!
//! Checks, in reporting order:
//!
//! 1. Presence - every field is non-blank
//! 2. Contact - email syntax and uniqueness, phone digit count and uniqueness
//! 3. Dates - age of at least 18, employment after birth

mod checks;
mod issue;

pub use checks::{MIN_AGE_YEARS, MIN_PHONE_DIGITS, age_in_years, phone_digits};
pub use issue::Issue;

use chrono::{Local, NaiveDate};
use roster_model::{EmployeeDirectory, EmployeeForm, EmployeeId, Locale};

/// Validate a submitted form.
///
/// `editing` is the employee being edited (`None` when creating); its own
/// email and phone do not count as duplicates. `today` anchors the age
/// check.
pub fn validate<D>(
    form: &EmployeeForm,
    editing: Option<&EmployeeId>,
    directory: &D,
    today: NaiveDate,
) -> Vec<Issue>
where
    D: EmployeeDirectory + ?Sized,
{
    let mut issues = checks::presence::check(form);
    issues.extend(checks::contact::check(form, editing, directory));
    issues.extend(checks::dates::check(form, today));

    if !issues.is_empty() {
        tracing::debug!(count = issues.len(), "form rejected");
    }
    issues
}

/// [`validate`] against the local calendar date.
pub fn validate_now<D>(form: &EmployeeForm, editing: Option<&EmployeeId>, directory: &D) -> Vec<Issue>
where
    D: EmployeeDirectory + ?Sized,
{
    validate(form, editing, directory, Local::now().date_naive())
}

/// Render issues as messages in `locale`.
pub fn messages(issues: &[Issue], locale: Locale) -> Vec<String> {
    issues.iter().map(|issue| issue.message(locale)).collect()
}
