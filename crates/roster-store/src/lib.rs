//! Employee store for Roster.
//!
//! The [`Store`] is the single owner of the employee collection. Every
//! mutation is written through a [`StorageBackend`] before subscribers are
//! told about it.
//!
//! # Features
//!
//! - **Explicit construction**: storage, key and seed data are all passed to
//!   [`Store::open`]; there is no global state
//! - **Subscriber registry** with per-registration [`SubscriptionId`] handles
//! - **Atomic file writes** via [`FileStorage`]
//! - **Demo seeding** of fixed and randomly generated employees
//!
//! # Persisted layout
//!
//! One JSON document per storage key:
//!
//! ```text
//! { "employees": [ { "id": "...", "firstName": "...", "lastName": "...",
//!                    "dob": "YYYY-MM-DD", "doe": "YYYY-MM-DD", "phone": "...",
//!                    "email": "...", "department": "...", "position": "..." } ] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use roster_store::{MemoryStorage, Seed, Store, create_employee};
//!
//! let mut store = Store::open(MemoryStorage::new(), "employee-manager", Seed::Empty)?;
//! let id = store.subscribe(|employees| println!("{} employees", employees.len()));
//! let employee = create_employee(&mut store, draft)?;
//! store.unsubscribe(id);
//! ```

mod employees;
mod error;
mod seed;
mod state;
mod storage;
mod store;

pub use employees::{create_employee, delete_employee, delete_employees, update_employee};
pub use error::{Result, StoreError};
pub use seed::{DEFAULT_RANDOM_COUNT, Seed, generate_sample_employees, sample_employees};
pub use state::PersistedState;
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{DEFAULT_STORAGE_KEY, Store, SubscriptionId};

pub use roster_model::EmployeeDirectory;
