//! # Book Repository
//!
//! The repository owns the one canonical collection of books. Every mutation
//! goes through [`BookRepository::create`], [`BookRepository::update`] or
//! [`BookRepository::delete`], and each of them:
//!
//! 1. builds the candidate collection,
//! 2. writes it through [`Persistence::save`],
//! 3. swaps it in and recomputes [`Stats`] only once the write succeeded.
//!
//! So when a call returns, durable state and in-memory state agree, even on
//! failure. The repository knows nothing about rendering; refreshing the view
//! is the caller's job (see `api.rs`).

use crate::error::{Result, ShelfError};
use crate::model::{Book, BookDraft};
use crate::stats::{compute_stats, Stats};
use crate::store::{KeyValueStore, Persistence};
use uuid::Uuid;

pub struct BookRepository<K: KeyValueStore> {
    books: Vec<Book>,
    stats: Stats,
    persistence: Persistence<K>,
}

impl<K: KeyValueStore> BookRepository<K> {
    /// Loads the stored collection. Corrupt data yields an empty library.
    pub fn open(persistence: Persistence<K>) -> Self {
        let books = persistence.load();
        let stats = compute_stats(&books);
        tracing::debug!(count = books.len(), "opened library");
        Self {
            books,
            stats,
            persistence,
        }
    }

    /// All books, most recently created first.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn persistence(&self) -> &Persistence<K> {
        &self.persistence
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == id)
    }

    /// 1-based position of a book in the collection.
    pub fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.books.iter().position(|b| &b.id == id).map(|i| i + 1)
    }

    pub fn create(&mut self, draft: BookDraft) -> Result<Book> {
        let draft = draft.validated()?;
        let mut book = Book::from_draft(draft);
        while self.find_by_id(&book.id).is_some() {
            book.id = Uuid::new_v4();
        }

        let mut next = Vec::with_capacity(self.books.len() + 1);
        next.push(book.clone());
        next.extend(self.books.iter().cloned());
        self.commit(next)?;

        tracing::debug!(id = %book.id, title = %book.title, "created book");
        Ok(book)
    }

    pub fn update(&mut self, id: &Uuid, draft: BookDraft) -> Result<Book> {
        let index = self
            .books
            .iter()
            .position(|b| &b.id == id)
            .ok_or(ShelfError::NotFound(*id))?;
        let draft = draft.validated()?;

        let mut next = self.books.clone();
        next[index].apply_draft(draft);
        let updated = next[index].clone();
        self.commit(next)?;

        tracing::debug!(id = %updated.id, status = ?updated.status, "updated book");
        Ok(updated)
    }

    pub fn delete(&mut self, id: &Uuid) -> Result<Book> {
        let index = self
            .books
            .iter()
            .position(|b| &b.id == id)
            .ok_or(ShelfError::NotFound(*id))?;

        let mut next = self.books.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        tracing::debug!(id = %removed.id, "deleted book");
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<Book>) -> Result<()> {
        self.persistence.save(&next)?;
        self.books = next;
        self.stats = compute_stats(&self.books);
        Ok(())
    }
}
