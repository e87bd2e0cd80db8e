//! The employee store.

use std::fmt;

use tracing::{debug, info};

use roster_model::{Employee, EmployeeDirectory, EmployeeId};

use crate::error::{Result, StoreError};
use crate::seed::Seed;
use crate::state;
use crate::storage::StorageBackend;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "employee-manager";

/// Handle for one subscriber registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[Employee])>;

/// Single owner of the employee collection.
///
/// Every mutation serializes the whole collection to storage and then calls
/// each subscriber, in registration order, before returning. If the storage
/// write fails the in-memory change stays applied, the error is returned and
/// subscribers are not called for that mutation.
pub struct Store<S: StorageBackend> {
    key: String,
    storage: S,
    employees: Vec<Employee>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: StorageBackend> Store<S> {
    /// Open the store under `key`.
    ///
    /// Loads the stored document if there is one. Otherwise the store starts
    /// from `seed`, and the seeded collection is written out immediately.
    pub fn open(storage: S, key: impl Into<String>, seed: Seed) -> Result<Self> {
        let key = key.into();
        let (employees, seeded) = match storage.read(&key)? {
            Some(content) => {
                let loaded = state::decode(&content).map_err(|e| StoreError::Deserialization {
                    key: key.clone(),
                    source: e,
                })?;
                (loaded.employees, false)
            }
            None => (seed.into_employees(), true),
        };

        let mut store = Self {
            key,
            storage,
            employees,
            listeners: Vec::new(),
            next_subscription: 0,
        };

        if seeded {
            store.persist()?;
            info!(
                "Seeded {} employees under key {}",
                store.employees.len(),
                store.key
            );
        } else {
            info!(
                "Loaded {} employees from key {}",
                store.employees.len(),
                store.key
            );
        }
        Ok(store)
    }

    /// Storage key this store writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All employees, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Append an employee.
    pub fn add(&mut self, employee: Employee) -> Result<()> {
        debug!(id = %employee.id, "add employee");
        self.employees.push(employee);
        self.commit()
    }

    /// Replace the employee with the same id.
    ///
    /// Returns whether an entry matched. A miss still persists and notifies.
    pub fn update(&mut self, employee: Employee) -> Result<bool> {
        let slot = self.employees.iter_mut().find(|e| e.id == employee.id);
        let matched = slot.is_some();
        debug!(id = %employee.id, matched, "update employee");
        if let Some(slot) = slot {
            *slot = employee;
        }
        self.commit()?;
        Ok(matched)
    }

    /// Remove the employee with `id`. Idempotent; returns whether one was removed.
    pub fn remove(&mut self, id: &EmployeeId) -> Result<bool> {
        let before = self.employees.len();
        self.employees.retain(|e| &e.id != id);
        let removed = self.employees.len() != before;
        debug!(id = %id, removed, "remove employee");
        self.commit()?;
        Ok(removed)
    }

    /// Remove every employee whose id is in `ids` with a single write.
    ///
    /// Returns how many were removed. Persists and notifies once even when
    /// none matched.
    pub fn remove_many(&mut self, ids: &[EmployeeId]) -> Result<usize> {
        let before = self.employees.len();
        self.employees.retain(|e| !ids.contains(&e.id));
        let removed = before - self.employees.len();
        debug!(requested = ids.len(), removed, "remove employees");
        self.commit()?;
        Ok(removed)
    }

    /// Replace the whole collection with `seed`, then persist and notify.
    pub fn reset(&mut self, seed: Seed) -> Result<()> {
        self.employees = seed.into_employees();
        info!(
            "Reset key {} to {} employees",
            self.key,
            self.employees.len()
        );
        self.commit()
    }

    /// Register a subscriber.
    ///
    /// The listener is called right away with the current collection and
    /// again after every mutation.
    pub fn subscribe<F>(&mut self, mut listener: F) -> SubscriptionId
    where
        F: FnMut(&[Employee]) + 'static,
    {
        listener(&self.employees);
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(subscription = id.0, "subscribed");
        id
    }

    /// Drop one registration. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn commit(&mut self) -> Result<()> {
        self.persist()?;
        self.notify();
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        let content = state::encode(&self.employees).map_err(|e| StoreError::Serialization {
            key: self.key.clone(),
            source: e,
        })?;
        self.storage.write(&self.key, &content)
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.employees);
        }
    }
}

impl<S: StorageBackend> EmployeeDirectory for Store<S> {
    fn find_by_id(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.find_by_id(id)
    }

    fn email_exists(&self, email: &str, except: Option<&EmployeeId>) -> bool {
        self.employees.email_exists(email, except)
    }

    fn phone_exists(&self, phone: &str, except: Option<&EmployeeId>) -> bool {
        self.employees.phone_exists(phone, except)
    }
}

impl<S: StorageBackend> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("key", &self.key)
            .field("employees", &self.employees.len())
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
