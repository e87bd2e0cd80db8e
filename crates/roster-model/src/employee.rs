//! Employee records and their identifiers.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Department, Position};

/// Opaque, unique employee identifier.
///
/// Freshly created employees get a UUID v4, but any string read back from
/// storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A stored employee.
///
/// The serialized field names (`firstName`, `dob`, `doe`, ...) are the
/// persisted layout and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    #[serde(rename = "doe")]
    pub date_of_employment: NaiveDate,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}

impl Employee {
    /// Attach an identifier to a payload.
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            date_of_birth: draft.date_of_birth,
            date_of_employment: draft.date_of_employment,
            phone: draft.phone,
            email: draft.email,
            department: draft.department,
            position: draft.position,
        }
    }

    /// The payload part of this employee (everything but the id).
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
            date_of_employment: self.date_of_employment,
            phone: self.phone.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
        }
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Employee payload without an identifier.
///
/// This is what create/update operations receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    #[serde(rename = "doe")]
    pub date_of_employment: NaiveDate,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}
