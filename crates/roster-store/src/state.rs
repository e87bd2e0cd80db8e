//! Persisted document shape.

use serde::{Deserialize, Serialize};

use roster_model::Employee;

/// Stored document: `{ "employees": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// Borrowed view used for writing without cloning the collection.
#[derive(Serialize)]
pub(crate) struct PersistedStateRef<'a> {
    pub employees: &'a [Employee],
}

pub(crate) fn encode(employees: &[Employee]) -> serde_json::Result<String> {
    serde_json::to_string(&PersistedStateRef { employees })
}

pub(crate) fn decode(content: &str) -> serde_json::Result<PersistedState> {
    serde_json::from_str(content)
}
