//! Data model for Roster.
//!
//! This crate holds the types every other Roster crate speaks:
//!
//! - `employee` - [`Employee`], its payload [`EmployeeDraft`] and [`EmployeeId`]
//! - `catalog` - the open department/position value sets
//! - `form` - raw submitted form values and their conversion into a draft
//! - `directory` - the read-only [`EmployeeDirectory`] query seam
//! - `i18n` - [`Locale`] and the [`Message`] catalog

pub mod catalog;
pub mod directory;
pub mod employee;
pub mod error;
pub mod form;
pub mod i18n;

pub use catalog::{Department, Position};
pub use directory::EmployeeDirectory;
pub use employee::{Employee, EmployeeDraft, EmployeeId};
pub use error::{ModelError, Result};
pub use form::{DATE_FORMAT, EmployeeForm, FormField, parse_date};
pub use i18n::{Locale, Message};
