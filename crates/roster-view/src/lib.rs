//! Derived view state for the employee list.
//!
//! Nothing in this crate mutates or owns employees. Every value here is
//! recomputed from the store's collection plus transient UI state:
//!
//! - `filter` - case-insensitive search across name, email, department, position
//! - `pagination` - 1-based page slicing with clamping
//! - `pager` - compact page-number list with ellipses
//! - `selection` - selected identifiers, independent of pagination
//! - `list` - [`ListView`], the above combined the way the list screen uses them
//! - `confirm` - yes/no gates consulted before mutating operations

pub mod confirm;
pub mod filter;
pub mod list;
pub mod pager;
pub mod pagination;
pub mod selection;

pub use confirm::{ConfirmDialog, ConfirmError, ConfirmKind, ConfirmPrompt, ConfirmationGate, Decision};
pub use filter::{filter_employees, matches_query, search_text};
pub use list::{Layout, ListPage, ListView};
pub use pager::{PageItem, page_list};
pub use pagination::{DEFAULT_PER_PAGE, clamp_page, page_range, total_pages};
pub use selection::Selection;
