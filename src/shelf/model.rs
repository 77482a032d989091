use crate::error::{Result, ShelfError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Highest value the star rating can hold.
pub const MAX_RATING: u8 = 5;

/// Where a book sits on the reader's shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReadingStatus {
    #[default]
    WantToRead,
    Reading,
    Read,
}

impl ReadingStatus {
    pub const ALL: [ReadingStatus; 3] = [
        ReadingStatus::WantToRead,
        ReadingStatus::Reading,
        ReadingStatus::Read,
    ];

    /// Human-readable label shown on badges and selectors.
    pub fn label(self) -> &'static str {
        match self {
            ReadingStatus::WantToRead => "Want to read",
            ReadingStatus::Reading => "Reading",
            ReadingStatus::Read => "Read",
        }
    }

    /// Visual class of the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            ReadingStatus::WantToRead => "want-to-read",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Read => "read",
        }
    }

    /// Rating and comment only carry meaning once a book has been read.
    pub fn allows_review(self) -> bool {
        matches!(self, ReadingStatus::Read)
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReadingStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "wanttoread" | "want" | "todo" => Ok(ReadingStatus::WantToRead),
            "reading" => Ok(ReadingStatus::Reading),
            "read" | "done" => Ok(ReadingStatus::Read),
            _ => Err(format!(
                "Invalid status: {} (expected want-to-read, reading or read)",
                s
            )),
        }
    }
}

/// A tracked book, persisted as one entry of the library collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: ReadingStatus,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Builds a new record from an already validated draft.
    pub(crate) fn from_draft(draft: BookDraft) -> Self {
        let mut book = Self {
            id: Uuid::new_v4(),
            title: draft.title,
            author: draft.author,
            image_url: draft.image_url,
            status: draft.status,
            rating: draft.rating,
            comment: draft.comment,
            created_at: Utc::now(),
        };
        book.enforce_review_rules();
        book
    }

    /// Overwrites the editable fields, keeping id and creation time.
    pub(crate) fn apply_draft(&mut self, draft: BookDraft) {
        self.title = draft.title;
        self.author = draft.author;
        self.image_url = draft.image_url;
        self.status = draft.status;
        self.rating = draft.rating;
        self.comment = draft.comment;
        self.enforce_review_rules();
    }

    /// Clears rating and comment unless the book has been read.
    pub fn enforce_review_rules(&mut self) {
        if !self.status.allows_review() {
            self.rating = 0;
            self.comment.clear();
        }
        self.rating = self.rating.min(MAX_RATING);
    }
}

/// Field values submitted to create or update a book.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub image_url: Option<String>,
    pub status: ReadingStatus,
    pub rating: u8,
    pub comment: String,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: ReadingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Trims every text field and checks the required ones.
    ///
    /// The returned draft already has rating and comment cleared when the
    /// status does not allow a review.
    pub fn validated(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        let author = self.author.trim().to_string();

        let missing: Vec<&str> = [("title", &title), ("author", &author)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(ShelfError::Validation(format!(
                "{} required",
                missing.join(" and ")
            )));
        }

        if self.rating > MAX_RATING {
            return Err(ShelfError::Validation(format!(
                "rating must be between 0 and {}, got {}",
                MAX_RATING, self.rating
            )));
        }

        let image_url = self
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let (rating, comment) = if self.status.allows_review() {
            (self.rating, self.comment.trim().to_string())
        } else {
            (0, String::new())
        };

        Ok(Self {
            title,
            author,
            image_url,
            status: self.status,
            rating,
            comment,
        })
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            image_url: book.image_url.clone(),
            status: book.status,
            rating: book.rating,
            comment: book.comment.clone(),
        }
    }
}
