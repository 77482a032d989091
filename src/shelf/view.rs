//! # Render Projector
//!
//! Turns a filtered view into something a UI can draw: either one [`Card`]
//! per book or an [`EmptyState`]. Projection is a pure function of its
//! inputs, so rendering twice with the same state gives the same
//! [`LibraryView`] and a UI can redraw from scratch after every change.
//!
//! Layout calculations that need terminal widths stay in the CLI; this module
//! only decides *what* is shown.

use crate::filter::{BookFilter, Listed};
use crate::model::{Book, ReadingStatus, MAX_RATING};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use uuid::Uuid;

/// Display width of the comment snippet shown on a card.
pub const COMMENT_SNIPPET_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(Layout::Grid),
            "list" => Ok(Layout::List),
            _ => Err(format!("Invalid layout: {} (expected grid or list)", s)),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Grid => f.write_str("grid"),
            Layout::List => f.write_str("list"),
        }
    }
}

/// Display-only switches; none of them affect which books are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub layout: Layout,
    pub compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyKind {
    /// Nothing matches the active filter.
    NoResults,
    /// The library has no books at all.
    EmptyLibrary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub kind: EmptyKind,
    pub heading: &'static str,
    pub message: &'static str,
    pub show_create: bool,
}

impl EmptyState {
    pub fn no_results() -> Self {
        Self {
            kind: EmptyKind::NoResults,
            heading: "No books found",
            message: "No books match the current filters. Try adjusting your search.",
            show_create: false,
        }
    }

    pub fn empty_library() -> Self {
        Self {
            kind: EmptyKind::EmptyLibrary,
            heading: "Your library is empty",
            message: "No books added yet. Start by adding your first book!",
            show_create: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub status: ReadingStatus,
    pub label: &'static str,
    pub class: &'static str,
}

impl From<ReadingStatus> for StatusBadge {
    fn from(status: ReadingStatus) -> Self {
        Self {
            status,
            label: status.label(),
            class: status.badge_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum CardImage {
    Url(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSnippet {
    pub snippet: String,
    pub full: String,
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: Uuid,
    pub position: usize,
    pub title: String,
    pub author: String,
    pub image: CardImage,
    pub badge: StatusBadge,
    /// Lit state of each star; absent unless the book is read and rated.
    pub stars: Option<Vec<bool>>,
    pub comment: Option<CommentSnippet>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum LibraryView {
    Empty(EmptyState),
    Cards { layout: Layout, cards: Vec<Card> },
}

impl LibraryView {
    pub fn cards(&self) -> &[Card] {
        match self {
            LibraryView::Cards { cards, .. } => cards,
            LibraryView::Empty(_) => &[],
        }
    }

    pub fn empty_state(&self) -> Option<&EmptyState> {
        match self {
            LibraryView::Empty(state) => Some(state),
            LibraryView::Cards { .. } => None,
        }
    }
}

/// Projects the filtered view into cards or an empty-state message.
pub fn project(
    listed: &[Listed<'_>],
    filter: &BookFilter,
    total: usize,
    options: RenderOptions,
) -> LibraryView {
    if listed.is_empty() {
        let state = if filter.is_active() {
            EmptyState::no_results()
        } else {
            if total > 0 {
                tracing::warn!(total, "unfiltered view is empty but the library is not");
            }
            EmptyState::empty_library()
        };
        return LibraryView::Empty(state);
    }

    LibraryView::Cards {
        layout: options.layout,
        cards: listed
            .iter()
            .map(|l| card_for(l.book, l.position, options.compact))
            .collect(),
    }
}

/// Builds a single card, as shown in the list or on its own.
pub fn card_for(book: &Book, position: usize, compact: bool) -> Card {
    let is_read = book.status.allows_review();

    let stars = (is_read && book.rating > 0).then(|| {
        (1..=MAX_RATING)
            .map(|star| star <= book.rating)
            .collect::<Vec<_>>()
    });

    let comment = (is_read && !book.comment.is_empty() && !compact).then(|| {
        let snippet = truncate_to_width(&book.comment, COMMENT_SNIPPET_WIDTH);
        CommentSnippet {
            truncated: book.comment.width() > COMMENT_SNIPPET_WIDTH,
            snippet,
            full: book.comment.clone(),
        }
    });

    let image = match &book.image_url {
        Some(url) if !url.trim().is_empty() => CardImage::Url(url.clone()),
        _ => CardImage::Placeholder,
    };

    Card {
        id: book.id,
        position,
        title: book.title.clone(),
        author: book.author.clone(),
        image,
        badge: StatusBadge::from(book.status),
        stars,
        comment,
        created_at: book.created_at,
    }
}

/// Cuts `s` to at most `max_width` display columns, ending in `…` when cut.
/// Newlines are flattened to spaces.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let flat: String = s.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
    let total: usize = flat.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return flat;
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in flat.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_books;
    use crate::model::BookDraft;

    fn book(title: &str, status: ReadingStatus, rating: u8, comment: &str) -> Book {
        Book::from_draft(
            BookDraft::new(title, "Author")
                .with_status(status)
                .with_rating(rating)
                .with_comment(comment)
                .validated()
                .unwrap(),
        )
    }

    fn view_of(books: &[Book], filter: &BookFilter, options: RenderOptions) -> LibraryView {
        project(&filter_books(books, filter), filter, books.len(), options)
    }

    #[test]
    fn empty_library_offers_create() {
        let view = view_of(&[], &BookFilter::default(), RenderOptions::default());
        let state = view.empty_state().unwrap();
        assert_eq!(state.kind, EmptyKind::EmptyLibrary);
        assert!(state.show_create);
    }

    #[test]
    fn no_results_hides_create() {
        let books = vec![book("Dune", ReadingStatus::Read, 5, "")];
        let view = view_of(
            &books,
            &BookFilter::new("tolkien", None),
            RenderOptions::default(),
        );
        let state = view.empty_state().unwrap();
        assert_eq!(state.kind, EmptyKind::NoResults);
        assert!(!state.show_create);
    }

    #[test]
    fn empty_library_with_filter_is_no_results() {
        let view = view_of(
            &[],
            &BookFilter::new("", Some(ReadingStatus::Read)),
            RenderOptions::default(),
        );
        assert_eq!(view.empty_state().unwrap().kind, EmptyKind::NoResults);
    }

    #[test]
    fn one_card_per_book_in_order() {
        let books = vec![
            book("A", ReadingStatus::Reading, 0, ""),
            book("B", ReadingStatus::WantToRead, 0, ""),
        ];
        let view = view_of(&books, &BookFilter::default(), RenderOptions::default());
        let titles: Vec<_> = view.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(view.cards()[1].position, 2);
        assert_eq!(view.cards()[1].badge.class, "want-to-read");
    }

    #[test]
    fn stars_only_for_rated_read_books() {
        let books = vec![
            book("Rated", ReadingStatus::Read, 3, ""),
            book("Unrated", ReadingStatus::Read, 0, ""),
            book("Reading", ReadingStatus::Reading, 0, ""),
        ];
        let view = view_of(&books, &BookFilter::default(), RenderOptions::default());
        let cards = view.cards();
        assert_eq!(
            cards[0].stars,
            Some(vec![true, true, true, false, false])
        );
        assert_eq!(cards[1].stars, None);
        assert_eq!(cards[2].stars, None);
    }

    #[test]
    fn comment_hidden_in_compact_mode() {
        let books = vec![book("Dune", ReadingStatus::Read, 5, "Great read")];
        let full = view_of(&books, &BookFilter::default(), RenderOptions::default());
        let comment = full.cards()[0].comment.as_ref().unwrap();
        assert_eq!(comment.snippet, "Great read");
        assert!(!comment.truncated);

        let compact = view_of(
            &books,
            &BookFilter::default(),
            RenderOptions {
                layout: Layout::Grid,
                compact: true,
            },
        );
        assert_eq!(compact.cards()[0].comment, None);
    }

    #[test]
    fn long_comment_is_truncated_with_full_text_kept() {
        let long = "word ".repeat(40);
        let books = vec![book("Dune", ReadingStatus::Read, 5, &long)];
        let view = view_of(&books, &BookFilter::default(), RenderOptions::default());
        let comment = view.cards()[0].comment.as_ref().unwrap();
        assert!(comment.truncated);
        assert!(comment.snippet.ends_with('…'));
        assert_eq!(comment.full, long.trim());
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let mut with_image = book("A", ReadingStatus::Reading, 0, "");
        with_image.image_url = Some("http://img/a.png".into());
        let without = book("B", ReadingStatus::Reading, 0, "");

        assert_eq!(
            card_for(&with_image, 1, false).image,
            CardImage::Url("http://img/a.png".into())
        );
        assert_eq!(card_for(&without, 2, false).image, CardImage::Placeholder);
    }

    #[test]
    fn layout_does_not_change_cards() {
        let books = vec![book("Dune", ReadingStatus::Read, 4, "ok")];
        let grid = view_of(&books, &BookFilter::default(), RenderOptions::default());
        let list = view_of(
            &books,
            &BookFilter::default(),
            RenderOptions {
                layout: Layout::List,
                compact: false,
            },
        );
        assert_eq!(grid.cards(), list.cards());
    }

    #[test]
    fn projection_is_idempotent() {
        let books = vec![
            book("Dune", ReadingStatus::Read, 4, "ok"),
            book("Emma", ReadingStatus::Reading, 0, ""),
        ];
        let filter = BookFilter::new("e", None);
        let first = view_of(&books, &filter, RenderOptions::default());
        let second = view_of(&books, &filter, RenderOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語の本", 5), "日本…");
        assert_eq!(truncate_to_width("line\nbreak", 20), "line break");
    }

    #[test]
    fn layout_parses() {
        assert_eq!("GRID".parse(), Ok(Layout::Grid));
        assert_eq!("list".parse(), Ok(Layout::List));
        assert!("table".parse::<Layout>().is_err());
    }
}
