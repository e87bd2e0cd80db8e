//! Validation issue types.
//!
//! Each variant carries only the data needed to explain it.

use serde::{Deserialize, Serialize};

use roster_model::{FormField, Locale, Message};

/// A single reason a form cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Presence checks
    /// Field left blank
    Required { field: FormField },

    // Contact checks
    /// Email lacks `@` or `.`
    InvalidEmail { email: String },
    /// Email already used by another employee
    DuplicateEmail { email: String },
    /// Fewer than ten digits once formatting is stripped
    InvalidPhone { digits: usize },
    /// Phone already used by another employee
    DuplicatePhone { phone: String },

    // Date checks
    /// Younger than 18, or date of birth unreadable
    Underage,
    /// Employment not strictly after birth, or a date unreadable
    EmploymentBeforeBirth,
}

impl Issue {
    /// Field the issue should be shown next to.
    pub fn field(&self) -> FormField {
        match self {
            Issue::Required { field } => *field,
            Issue::InvalidEmail { .. } | Issue::DuplicateEmail { .. } => FormField::Email,
            Issue::InvalidPhone { .. } | Issue::DuplicatePhone { .. } => FormField::Phone,
            Issue::Underage => FormField::DateOfBirth,
            Issue::EmploymentBeforeBirth => FormField::DateOfEmployment,
        }
    }

    /// Catalog key of the message.
    pub fn message_key(&self) -> Message {
        match self {
            Issue::Required { .. } => Message::Required,
            Issue::InvalidEmail { .. } => Message::InvalidEmail,
            Issue::DuplicateEmail { .. } => Message::UniqueEmail,
            Issue::InvalidPhone { .. } => Message::InvalidPhone,
            Issue::DuplicatePhone { .. } => Message::UniquePhone,
            Issue::Underage => Message::AgeError,
            Issue::EmploymentBeforeBirth => Message::DateOrder,
        }
    }

    /// Human-readable message.
    pub fn message(&self, locale: Locale) -> String {
        match self {
            Issue::Required { field } => format!(
                "{} {}",
                locale.translate(field.label()),
                locale.translate(Message::Required)
            ),
            other => locale.translate(other.message_key()).to_string(),
        }
    }
}
