//! # Storage Layer
//!
//! The library collection lives under a single key of a durable key-value
//! store. [`KeyValueStore`] is the raw I/O seam; [`Persistence`] sits on top
//! of it and knows how a collection of [`Book`]s is encoded.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//! - [`memory::MemoryStore`]: in-memory storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── library-books.json   # JSON array of every book, most recent first
//! └── config.json          # Display configuration
//! ```
//!
//! Loading never fails: a missing key is an empty library, and unreadable or
//! malformed data is logged and replaced by an empty library. Saving always
//! writes the whole collection.

use crate::error::Result;
use crate::model::Book;
use std::collections::HashSet;

pub mod fs;
pub mod memory;

/// Key under which the book collection is stored.
pub const BOOKS_KEY: &str = "library-books";

/// Abstract interface for raw key-value I/O.
///
/// Methods take `&self`; shelf is single-threaded, so backends needing
/// mutation use interior mutability.
pub trait KeyValueStore {
    /// Returns the stored value, or `Ok(None)` if the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value for `key`. MUST be all-or-nothing.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Loads and saves the book collection through a [`KeyValueStore`].
pub struct Persistence<K: KeyValueStore> {
    backend: K,
}

impl<K: KeyValueStore> Persistence<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Reads the stored collection, falling back to an empty one.
    pub fn load(&self) -> Vec<Book> {
        let raw = match self.backend.read(BOOKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored books, starting empty");
                return Vec::new();
            }
        };

        let books: Vec<Book> = match serde_json::from_str(&raw) {
            Ok(books) => books,
            Err(e) => {
                tracing::warn!(error = %e, "stored books are malformed, starting empty");
                return Vec::new();
            }
        };

        normalize(books)
    }

    /// Writes the full collection, replacing whatever was stored before.
    pub fn save(&self, books: &[Book]) -> Result<()> {
        let encoded = serde_json::to_string_pretty(books)?;
        self.backend.write(BOOKS_KEY, &encoded)?;
        tracing::debug!(count = books.len(), "saved books");
        Ok(())
    }
}

/// Re-applies record invariants to data that came from outside the process.
fn normalize(books: Vec<Book>) -> Vec<Book> {
    let mut seen = HashSet::with_capacity(books.len());
    books
        .into_iter()
        .filter_map(|mut book| {
            if !seen.insert(book.id) {
                tracing::warn!(id = %book.id, "dropping stored book with duplicate id");
                return None;
            }
            book.enforce_review_rules();
            Some(book)
        })
        .collect()
}
