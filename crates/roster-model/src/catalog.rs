//! Department and position value sets.
//!
//! Both are open sets: the well-known values get their own variants (and
//! translated labels), anything else is carried verbatim in `Other` so that
//! stored data always round-trips unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, Message};

/// Organizational department.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Department {
    Analytics,
    Tech,
    Hr,
    Marketing,
    Sales,
    Finance,
    Operations,
    Other(String),
}

impl Department {
    /// Departments offered by the entry form.
    pub const FORM_CHOICES: [Department; 2] = [Department::Analytics, Department::Tech];

    /// Every well-known department, in display order.
    pub const KNOWN: [Department; 7] = [
        Department::Analytics,
        Department::Tech,
        Department::Hr,
        Department::Marketing,
        Department::Sales,
        Department::Finance,
        Department::Operations,
    ];

    /// Stored value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Analytics => "Analytics",
            Self::Tech => "Tech",
            Self::Hr => "HR",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Finance => "Finance",
            Self::Operations => "Operations",
            Self::Other(value) => value,
        }
    }

    /// Display label in the given locale; unknown values show as stored.
    pub fn label(&self, locale: Locale) -> String {
        let message = match self {
            Self::Analytics => Message::Analytics,
            Self::Tech => Message::Tech,
            Self::Hr => Message::Hr,
            _ => return self.as_str().to_string(),
        };
        locale.translate(message).to_string()
    }
}

impl From<String> for Department {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Analytics" => Self::Analytics,
            "Tech" => Self::Tech,
            "HR" => Self::Hr,
            "Marketing" => Self::Marketing,
            "Sales" => Self::Sales,
            "Finance" => Self::Finance,
            "Operations" => Self::Operations,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Department {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Department> for String {
    fn from(value: Department) -> Self {
        match value {
            Department::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Intern,
    Junior,
    Medior,
    Senior,
    Lead,
    Manager,
    Other(String),
}

impl Position {
    /// Positions offered by the entry form.
    pub const FORM_CHOICES: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    /// Every well-known position, in display order.
    pub const KNOWN: [Position; 6] = [
        Position::Intern,
        Position::Junior,
        Position::Medior,
        Position::Senior,
        Position::Lead,
        Position::Manager,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Intern => "Intern",
            Self::Junior => "Junior",
            Self::Medior => "Medior",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
            Self::Manager => "Manager",
            Self::Other(value) => value,
        }
    }

    pub fn label(&self, locale: Locale) -> String {
        let message = match self {
            Self::Intern => Message::Intern,
            Self::Junior => Message::Junior,
            Self::Medior => Message::Medior,
            Self::Senior => Message::Senior,
            Self::Lead => Message::Lead,
            _ => return self.as_str().to_string(),
        };
        locale.translate(message).to_string()
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Intern" => Self::Intern,
            "Junior" => Self::Junior,
            "Medior" => Self::Medior,
            "Senior" => Self::Senior,
            "Lead" => Self::Lead,
            "Manager" => Self::Manager,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        match value {
            Position::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
