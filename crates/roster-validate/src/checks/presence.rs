//! Required-field checks.

use roster_model::{EmployeeForm, FormField};

use crate::issue::Issue;

/// Every field must hold something other than whitespace.
pub fn check(form: &EmployeeForm) -> Vec<Issue> {
    FormField::ALL
        .into_iter()
        .filter(|field| form.value(*field).trim().is_empty())
        .map(|field| Issue::Required { field })
        .collect()
}
