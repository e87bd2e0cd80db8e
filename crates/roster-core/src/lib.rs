//! Employee workflows.
//!
//! Every user intent follows the same path:
//!
//! ```text
//! form / row action ─▶ validate ─▶ confirmation gate ─▶ store mutation
//! ```
//!
//! The synchronous entry points ([`submit_form`], [`request_delete`],
//! [`bulk_delete`]) ask a [`ConfirmationGate`] inline. Screens that show a
//! modal instead park an [`Action`] in a [`ConfirmDialog`] with
//! [`stage`] and apply it once answered with [`finish`].
//!
//! [`ConfirmationGate`]: roster_view::ConfirmationGate
//! [`ConfirmDialog`]: roster_view::ConfirmDialog

mod action;
mod error;
mod workflow;

pub use action::{Action, Outcome, Plan, plan_submit};
pub use error::{CoreError, Result};
pub use workflow::{bulk_delete, finish, request_delete, stage, submit_form};
