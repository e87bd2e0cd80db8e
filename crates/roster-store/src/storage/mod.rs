//! Durable key/value storage behind the store.
//!
//! A backend stores whole documents under string keys, the way browser
//! local storage does:
//! - [`MemoryStorage`] keeps them in process
//! - [`FileStorage`] keeps one JSON file per key in a directory

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Key/value document storage.
pub trait StorageBackend {
    /// Read the document stored under `key`, or `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: StorageBackend + ?Sized> StorageBackend for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}
