use super::KeyValueStore;
use crate::error::{Result, ShelfError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory key-value store for testing.
///
/// Uses `RefCell` for interior mutability since shelf is single-threaded.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `value` under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw stored value, for assertions.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{BookDraft, ReadingStatus};
    use crate::repository::BookRepository;
    use crate::store::Persistence;

    /// Builds a repository over a [`MemoryStore`], adding books oldest first
    /// so the last one added ends up at the front.
    pub struct LibraryFixture {
        pub repo: BookRepository<MemoryStore>,
    }

    impl Default for LibraryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self {
                repo: BookRepository::open(Persistence::new(MemoryStore::new())),
            }
        }

        pub fn with_book(mut self, title: &str, author: &str, status: ReadingStatus) -> Self {
            self.repo
                .create(BookDraft::new(title, author).with_status(status))
                .unwrap();
            self
        }

        pub fn with_review(mut self, title: &str, author: &str, rating: u8, comment: &str) -> Self {
            self.repo
                .create(
                    BookDraft::new(title, author)
                        .with_status(ReadingStatus::Read)
                        .with_rating(rating)
                        .with_comment(comment),
                )
                .unwrap();
            self
        }
    }
}
