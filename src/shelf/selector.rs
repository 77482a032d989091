//! # Book Selectors
//!
//! Ids are UUIDs, which nobody wants to type. A [`BookSelector`] lets a UI
//! address a book either by its 1-based position in the collection (the
//! number printed next to it in listings) or by a prefix of its id.
//!
//! Positions follow the collection order (most recently created first), not
//! the filtered view, so the same number keeps pointing at the same book
//! whatever filter was used to find it.
//!
//! Short numbers without a leading zero are positions. Digits with a leading
//! zero are id prefixes, and longer digit strings may be either.

use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Shortest id prefix accepted, to keep accidental matches unlikely.
pub const MIN_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSelector {
    Position(usize),
    IdPrefix(String),
    /// Digits long enough to be an id prefix that also read as a position,
    /// e.g. `1234`. Resolves to whichever one matches, and is an error when
    /// both match different books.
    PositionOrPrefix(usize, String),
}

impl fmt::Display for BookSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookSelector::Position(n) => write!(f, "{}", n),
            BookSelector::IdPrefix(p) | BookSelector::PositionOrPrefix(_, p) => {
                write!(f, "{}", p)
            }
        }
    }
}

impl FromStr for BookSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s == "0" {
            return Err("Positions start at 1".to_string());
        }

        let is_digits = !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if is_digits && !s.starts_with('0') && s.len() < MIN_PREFIX_LEN {
            if let Ok(n) = s.parse::<usize>() {
                return Ok(BookSelector::Position(n));
            }
        }

        let prefix: String = s.chars().filter(|c| *c != '-').collect::<String>().to_lowercase();
        if prefix.len() < MIN_PREFIX_LEN || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!(
                "Invalid book reference: {} (use a position or at least {} characters of an id)",
                s, MIN_PREFIX_LEN
            ));
        }

        if is_digits && !s.starts_with('0') {
            if let Ok(n) = s.parse::<usize>() {
                return Ok(BookSelector::PositionOrPrefix(n, prefix));
            }
        }
        Ok(BookSelector::IdPrefix(prefix))
    }
}

impl BookSelector {
    /// Finds the id of the one book this selector refers to.
    pub fn resolve(&self, books: &[Book]) -> Result<Uuid> {
        match self {
            BookSelector::Position(n) => by_position(*n, books)
                .ok_or_else(|| ShelfError::Api(format!("No book at position {}", n))),
            BookSelector::IdPrefix(prefix) => by_prefix(prefix, books)?
                .ok_or_else(|| ShelfError::Api(format!("No book with id {}", prefix))),
            BookSelector::PositionOrPrefix(n, prefix) => {
                match (by_position(*n, books), by_prefix(prefix, books)?) {
                    (Some(a), Some(b)) if a != b => Err(ShelfError::Api(format!(
                        "Reference {} is ambiguous (it is both a position and an id prefix)",
                        prefix
                    ))),
                    (Some(id), _) | (None, Some(id)) => Ok(id),
                    (None, None) => Err(ShelfError::Api(format!(
                        "No book at position {} or with id {}",
                        n, prefix
                    ))),
                }
            }
        }
    }
}

fn by_position(n: usize, books: &[Book]) -> Option<Uuid> {
    n.checked_sub(1).and_then(|i| books.get(i)).map(|b| b.id)
}

fn by_prefix(prefix: &str, books: &[Book]) -> Result<Option<Uuid>> {
    let matching: Vec<&Book> = books
        .iter()
        .filter(|b| b.id.simple().to_string().starts_with(prefix))
        .collect();
    match matching.as_slice() {
        [book] => Ok(Some(book.id)),
        [] => Ok(None),
        _ => Err(ShelfError::Api(format!(
            "Id {} is ambiguous ({} books match)",
            prefix,
            matching.len()
        ))),
    }
}
