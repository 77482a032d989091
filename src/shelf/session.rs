//! # Edit Session
//!
//! The state behind the add/edit form. A session is opened either blank
//! ([`EditSession::create`]) or from an existing record
//! ([`EditSession::edit`]), mutated field by field, and finally turned into a
//! [`BookDraft`] on submit. Dropping the session discards every unsaved
//! change.
//!
//! Rating and comment are only editable while the selected status is
//! [`ReadingStatus::Read`]. Opening a record keeps its values whatever the
//! status; *changing* the status away from Read clears both.

use crate::error::Result;
use crate::model::{Book, BookDraft, ReadingStatus};
use crate::rating::RatingWidget;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Create,
    Edit(Uuid),
}

/// In-progress values of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub status: ReadingStatus,
    pub comment: String,
}

/// A text field of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Title(String),
    Author(String),
    ImageUrl(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    mode: SessionMode,
    form: FormValues,
    rating: RatingWidget,
}

impl EditSession {
    pub fn create() -> Self {
        let form = FormValues::default();
        let enabled = form.status.allows_review();
        Self {
            mode: SessionMode::Create,
            form,
            rating: RatingWidget::new(0, enabled),
        }
    }

    pub fn edit(book: &Book) -> Self {
        Self {
            mode: SessionMode::Edit(book.id),
            form: FormValues {
                title: book.title.clone(),
                author: book.author.clone(),
                image_url: book.image_url.clone().unwrap_or_default(),
                status: book.status,
                comment: book.comment.clone(),
            },
            rating: RatingWidget::new(book.rating, book.status.allows_review()),
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    pub fn rating(&self) -> &RatingWidget {
        &self.rating
    }

    pub fn rating_mut(&mut self) -> &mut RatingWidget {
        &mut self.rating
    }

    pub fn pending_rating(&self) -> u8 {
        self.rating.value()
    }

    /// Whether the rating and comment inputs accept edits.
    pub fn review_enabled(&self) -> bool {
        self.rating.is_enabled()
    }

    pub fn modal_title(&self) -> &'static str {
        match self.mode {
            SessionMode::Create => "Add book",
            SessionMode::Edit(_) => "Edit book",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            SessionMode::Create => "Add",
            SessionMode::Edit(_) => "Update",
        }
    }

    /// Sets a text field. Returns false if the field is currently disabled.
    pub fn set_field(&mut self, field: FormField) -> bool {
        match field {
            FormField::Title(v) => self.form.title = v,
            FormField::Author(v) => self.form.author = v,
            FormField::ImageUrl(v) => self.form.image_url = v,
            FormField::Comment(v) => {
                if !self.review_enabled() {
                    return false;
                }
                self.form.comment = v;
            }
        }
        true
    }

    /// Moves the status selector.
    ///
    /// Leaving Read disables and wipes rating and comment, even if the user
    /// switches back before saving. Entering Read enables them as they are.
    pub fn change_status(&mut self, status: ReadingStatus) {
        self.form.status = status;
        if status.allows_review() {
            self.rating.set_enabled(true);
        } else {
            self.rating.set_enabled(false);
            self.rating.reset();
            self.form.comment.clear();
        }
        tracing::debug!(?status, enabled = self.review_enabled(), "status changed");
    }

    /// Builds the draft to submit, checking required fields.
    pub fn draft(&self) -> Result<BookDraft> {
        let image_url = Some(self.form.image_url.clone()).filter(|u| !u.trim().is_empty());
        BookDraft {
            title: self.form.title.clone(),
            author: self.form.author.clone(),
            image_url,
            status: self.form.status,
            rating: self.rating.value(),
            comment: self.form.comment.clone(),
        }
        .validated()
    }
}
