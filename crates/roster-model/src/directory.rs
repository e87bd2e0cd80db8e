//! Read-only employee lookups.

use crate::employee::{Employee, EmployeeId};

/// Read-only queries over an employee collection.
///
/// `except` excludes one identifier from uniqueness checks, so that an
/// employee being edited does not collide with its own unchanged email or
/// phone.
pub trait EmployeeDirectory {
    fn find_by_id(&self, id: &EmployeeId) -> Option<&Employee>;

    /// Case-insensitive email lookup.
    fn email_exists(&self, email: &str, except: Option<&EmployeeId>) -> bool;

    /// Exact phone lookup. Formatting matters: `+90 555 111 2233` and
    /// `+905551112233` are different phones here.
    fn phone_exists(&self, phone: &str, except: Option<&EmployeeId>) -> bool;
}

impl EmployeeDirectory for [Employee] {
    fn find_by_id(&self, id: &EmployeeId) -> Option<&Employee> {
        self.iter().find(|employee| &employee.id == id)
    }

    fn email_exists(&self, email: &str, except: Option<&EmployeeId>) -> bool {
        let email = email.to_lowercase();
        self.iter().any(|employee| {
            employee.email.to_lowercase() == email && Some(&employee.id) != except
        })
    }

    fn phone_exists(&self, phone: &str, except: Option<&EmployeeId>) -> bool {
        self.iter()
            .any(|employee| employee.phone == phone && Some(&employee.id) != except)
    }
}
