//! Row selection for bulk operations.

use std::collections::BTreeSet;

use roster_model::{Employee, EmployeeId};

/// Set of selected employee identifiers.
///
/// Selection outlives paging and filtering: rows that scroll out of view
/// stay selected. Identifiers of deleted employees are tolerated until
/// [`Selection::prune`] drops them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<EmployeeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmployeeId> {
        self.ids.iter()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Row checkbox: add on `checked`, remove otherwise.
    pub fn toggle_row(&mut self, id: &EmployeeId, checked: bool) {
        if checked {
            self.ids.insert(id.clone());
        } else {
            self.ids.remove(id);
        }
    }

    /// Header checkbox: add or remove every visible identifier.
    ///
    /// Selections outside `visible` are left alone.
    pub fn toggle_all<'a, I>(&mut self, visible: I, checked: bool)
    where
        I: IntoIterator<Item = &'a EmployeeId>,
    {
        for id in visible {
            self.toggle_row(id, checked);
        }
    }

    /// Whether every visible identifier is selected. False when nothing is visible.
    pub fn all_selected<'a, I>(&self, visible: I) -> bool
    where
        I: IntoIterator<Item = &'a EmployeeId>,
    {
        let mut any = false;
        for id in visible {
            if !self.ids.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Selected employees that still exist, in collection order.
    pub fn resolve<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees
            .iter()
            .filter(|employee| self.ids.contains(&employee.id))
            .collect()
    }

    /// Drop identifiers with no matching employee. Returns how many were dropped.
    pub fn prune(&mut self, employees: &[Employee]) -> usize {
        let before = self.ids.len();
        self.ids
            .retain(|id| employees.iter().any(|employee| &employee.id == id));
        let dropped = before - self.ids.len();
        if dropped > 0 {
            tracing::debug!(dropped, "pruned stale selection");
        }
        dropped
    }
}

impl FromIterator<EmployeeId> for Selection {
    fn from_iter<T: IntoIterator<Item = EmployeeId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
