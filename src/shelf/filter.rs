use crate::model::{Book, ReadingStatus};

/// The user's current search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub query: String,
    pub status: Option<ReadingStatus>,
}

impl BookFilter {
    pub fn new(query: impl Into<String>, status: Option<ReadingStatus>) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    /// True when the filter could hide books.
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.status.is_some()
    }

    fn matches_status(&self, book: &Book) -> bool {
        self.status.is_none_or(|status| book.status == status)
    }
}

/// A book in a filtered view, with its 1-based position in the full
/// collection so it can be addressed from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listed<'a> {
    pub position: usize,
    pub book: &'a Book,
}

/// Derives the filtered view of `books`.
///
/// Keeps the input order and holds no state, so it is safe to call on every
/// keystroke.
pub fn filter_books<'a>(books: &'a [Book], filter: &BookFilter) -> Vec<Listed<'a>> {
    let query = normalize_query(&filter.query);
    books
        .iter()
        .enumerate()
        .filter(|(_, book)| matches_query(book, &query) && filter.matches_status(book))
        .map(|(i, book)| Listed {
            position: i + 1,
            book,
        })
        .collect()
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn matches_query(book: &Book, query: &str) -> bool {
    query.is_empty()
        || book.title.to_lowercase().contains(query)
        || book.author.to_lowercase().contains(query)
}
