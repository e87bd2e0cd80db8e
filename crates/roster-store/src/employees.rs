//! Create/update/delete operations.
//!
//! Thin wrappers over [`Store`]; they assign identifiers but never validate.

use roster_model::{Employee, EmployeeDraft, EmployeeId};

use crate::error::Result;
use crate::storage::StorageBackend;
use crate::store::Store;

/// Store a new employee under a freshly generated id and return it.
pub fn create_employee<S: StorageBackend>(
    store: &mut Store<S>,
    draft: EmployeeDraft,
) -> Result<Employee> {
    let employee = Employee::from_draft(EmployeeId::generate(), draft);
    store.add(employee.clone())?;
    Ok(employee)
}

/// Replace the employee `id` with `draft`. Returns whether `id` existed.
pub fn update_employee<S: StorageBackend>(
    store: &mut Store<S>,
    id: &EmployeeId,
    draft: EmployeeDraft,
) -> Result<bool> {
    store.update(Employee::from_draft(id.clone(), draft))
}

/// Remove the employee `id`. Returns whether it existed.
pub fn delete_employee<S: StorageBackend>(store: &mut Store<S>, id: &EmployeeId) -> Result<bool> {
    store.remove(id)
}

/// Remove all of `ids` in one mutation. Returns how many existed.
pub fn delete_employees<S: StorageBackend>(
    store: &mut Store<S>,
    ids: &[EmployeeId],
) -> Result<usize> {
    store.remove_many(ids)
}
