//! Workflow errors.

use roster_model::ModelError;
use roster_store::StoreError;
use roster_view::ConfirmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("form could not be converted: {0}")]
    Form(#[from] ModelError),

    #[error(transparent)]
    Confirm(#[from] ConfirmError),
}

impl CoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(err) => err.user_message(),
            Self::Form(err) => format!("The form could not be read: {err}"),
            Self::Confirm(_) => "Another confirmation is still open.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Store(err) => err.suggestion(),
            Self::Form(_) => None,
            Self::Confirm(_) => Some("Answer the open confirmation first.".into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
