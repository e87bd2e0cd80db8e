use thiserror::Error;

use crate::form::FormField;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("{field} is required")]
    MissingField { field: FormField },
    #[error("{field} is not a valid date: {value:?}")]
    InvalidDate { field: FormField, value: String },
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
