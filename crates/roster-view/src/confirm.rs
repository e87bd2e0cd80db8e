//! Confirmation gates.
//!
//! Mutating workflows ask a gate before touching the store. Two shapes are
//! supported:
//!
//! - [`ConfirmationGate`]: answered synchronously (a terminal prompt, a
//!   `--yes` flag, a fixed [`Decision`] in tests).
//! - [`ConfirmDialog`]: a modal that is opened now and answered later. It
//!   holds the caller's intent until resolved, and resolves it exactly once.

use roster_model::{Locale, Message};
use thiserror::Error;

/// Outcome of a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Declined,
}

impl Decision {
    pub fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl From<bool> for Decision {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// What the prompt is guarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    /// Saving a new or edited employee.
    Update,
    /// Removing one or more employees.
    Delete,
}

/// Text shown to the user when confirmation is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub kind: ConfirmKind,
    pub message: String,
}

impl ConfirmPrompt {
    pub fn update(message: impl Into<String>) -> Self {
        Self {
            kind: ConfirmKind::Update,
            message: message.into(),
        }
    }

    pub fn delete(message: impl Into<String>) -> Self {
        Self {
            kind: ConfirmKind::Delete,
            message: message.into(),
        }
    }

    /// Dialog heading.
    pub fn title(&self, locale: Locale) -> &'static str {
        match self.kind {
            ConfirmKind::Update => locale.translate(Message::ConfirmUpdate),
            ConfirmKind::Delete => locale.translate(Message::ConfirmDelete),
        }
    }

    /// Label of the confirming button.
    pub fn action_label(&self, locale: Locale) -> &'static str {
        match self.kind {
            ConfirmKind::Update => locale.translate(Message::Save),
            ConfirmKind::Delete => locale.translate(Message::Delete),
        }
    }
}

/// A synchronous yes/no prompt.
pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision;
}

/// A fixed answer, for `--yes` and tests.
impl ConfirmationGate for Decision {
    fn confirm(&mut self, _prompt: &ConfirmPrompt) -> Decision {
        *self
    }
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&ConfirmPrompt) -> Decision,
{
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision {
        self(prompt)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfirmError {
    #[error("a confirmation is already pending")]
    AlreadyPending,
}

#[derive(Debug)]
struct Pending<T> {
    prompt: ConfirmPrompt,
    intent: T,
}

/// Deferred confirmation with a single slot.
///
/// `request` opens the dialog and parks `intent`; `resolve` closes it and
/// hands the intent back together with the user's decision. A request is
/// resolved at most once: later `resolve` calls see an empty slot.
#[derive(Debug)]
pub struct ConfirmDialog<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for ConfirmDialog<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> ConfirmDialog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog. Fails if a request is already waiting for an answer;
    /// the pending request is left untouched and `intent` is dropped.
    pub fn request(&mut self, prompt: ConfirmPrompt, intent: T) -> Result<(), ConfirmError> {
        if self.pending.is_some() {
            tracing::warn!(message = %prompt.message, "confirmation already pending");
            return Err(ConfirmError::AlreadyPending);
        }
        tracing::debug!(kind = ?prompt.kind, "confirmation requested");
        self.pending = Some(Pending { prompt, intent });
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Prompt of the pending request, if any.
    pub fn prompt(&self) -> Option<&ConfirmPrompt> {
        self.pending.as_ref().map(|pending| &pending.prompt)
    }

    /// Close the dialog with `decision`. Returns the parked intent, or `None`
    /// if nothing was pending.
    pub fn resolve(&mut self, decision: Decision) -> Option<(T, Decision)> {
        let pending = self.pending.take()?;
        tracing::debug!(kind = ?pending.prompt.kind, ?decision, "confirmation resolved");
        Some((pending.intent, decision))
    }

    pub fn confirm(&mut self) -> Option<(T, Decision)> {
        self.resolve(Decision::Confirmed)
    }

    /// Cancel button, Escape key or backdrop click.
    pub fn decline(&mut self) -> Option<(T, Decision)> {
        self.resolve(Decision::Declined)
    }
}
