//! Raw form payloads.
//!
//! A form carries exactly what the user typed. Nothing here is checked
//! except what is needed to build a draft; the rules live in
//! `roster-validate`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::employee::{Employee, EmployeeDraft};
use crate::error::{ModelError, Result};
use crate::i18n::Message;

/// Date format used by forms and by the persisted layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Fields of the employee form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormField {
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    Phone,
    Email,
    Department,
    Position,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::DateOfEmployment,
        FormField::DateOfBirth,
        FormField::Phone,
        FormField::Email,
        FormField::Department,
        FormField::Position,
    ];

    /// Form input name (matches the persisted key).
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfEmployment => "doe",
            Self::DateOfBirth => "dob",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Department => "department",
            Self::Position => "position",
        }
    }

    /// Label message for this field.
    pub fn label(&self) -> Message {
        match self {
            Self::FirstName => Message::FirstName,
            Self::LastName => Message::LastName,
            Self::DateOfEmployment => Message::DateOfEmployment,
            Self::DateOfBirth => Message::DateOfBirth,
            Self::Phone => Message::Phone,
            Self::Email => Message::Email,
            Self::Department => Message::Department,
            Self::Position => Message::Position,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Submitted field values, all as raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "dob")]
    pub date_of_birth: String,
    #[serde(rename = "doe")]
    pub date_of_employment: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

impl EmployeeForm {
    /// Pre-fill a form from an existing employee (edit mode).
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            date_of_birth: employee.date_of_birth.format(DATE_FORMAT).to_string(),
            date_of_employment: employee.date_of_employment.format(DATE_FORMAT).to_string(),
            phone: employee.phone.clone(),
            email: employee.email.clone(),
            department: employee.department.to_string(),
            position: employee.position.to_string(),
        }
    }

    /// Raw value of one field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::DateOfEmployment => &self.date_of_employment,
            FormField::DateOfBirth => &self.date_of_birth,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Department => &self.department,
            FormField::Position => &self.position,
        }
    }

    /// Mutable access to one field.
    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::DateOfEmployment => &mut self.date_of_employment,
            FormField::DateOfBirth => &mut self.date_of_birth,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
            FormField::Department => &mut self.department,
            FormField::Position => &mut self.position,
        }
    }

    /// Build the payload that gets stored.
    ///
    /// Text fields are trimmed. Fails on the first blank field or
    /// unparseable date; callers are expected to have validated first.
    pub fn to_draft(&self) -> Result<EmployeeDraft> {
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(ModelError::MissingField { field });
            }
        }
        Ok(EmployeeDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            date_of_birth: date_field(FormField::DateOfBirth, &self.date_of_birth)?,
            date_of_employment: date_field(FormField::DateOfEmployment, &self.date_of_employment)?,
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().into(),
            position: self.position.trim().into(),
        })
    }
}

fn date_field(field: FormField, value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| ModelError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Department, Position};

    fn filled() -> EmployeeForm {
        EmployeeForm {
            first_name: "  Elif ".to_string(),
            last_name: "Kaya".to_string(),
            date_of_birth: "1998-01-22".to_string(),
            date_of_employment: "2022-09-05".to_string(),
            phone: " +90 555 333 4455 ".to_string(),
            email: "elif.kaya@example.com ".to_string(),
            department: "Tech".to_string(),
            position: "Junior".to_string(),
        }
    }

    #[test]
    fn to_draft_trims_and_parses() {
        let draft = filled().to_draft().unwrap();
        assert_eq!(draft.first_name, "Elif");
        assert_eq!(draft.phone, "+90 555 333 4455");
        assert_eq!(draft.email, "elif.kaya@example.com");
        assert_eq!(draft.department, Department::Tech);
        assert_eq!(draft.position, Position::Junior);
        assert_eq!(
            draft.date_of_birth,
            NaiveDate::from_ymd_opt(1998, 1, 22).unwrap()
        );
    }

    #[test]
    fn to_draft_reports_blank_field() {
        let mut form = filled();
        form.last_name = "   ".to_string();
        assert_eq!(
            form.to_draft(),
            Err(ModelError::MissingField {
                field: FormField::LastName
            })
        );
    }

    #[test]
    fn to_draft_reports_bad_date() {
        let mut form = filled();
        form.date_of_employment = "05/09/2022".to_string();
        assert!(matches!(
            form.to_draft(),
            Err(ModelError::InvalidDate {
                field: FormField::DateOfEmployment,
                ..
            })
        ));
    }

    #[test]
    fn from_employee_round_trips() {
        let draft = filled().to_draft().unwrap();
        let employee = Employee::from_draft("e-1".into(), draft.clone());
        let form = EmployeeForm::from_employee(&employee);
        assert_eq!(form.date_of_birth, "1998-01-22");
        assert_eq!(form.to_draft().unwrap(), draft);
    }
}
