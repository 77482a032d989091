//! # API Facade
//!
//! [`ShelfApi`] is the single entry point for every UI. It owns the
//! repository, the open edit session (if any) and the view state, and is
//! driven by explicit [`Command`]s through [`ShelfApi::dispatch`].
//!
//! ## Dispatch and refresh
//!
//! Each command mutates at most one of: the repository, the session, the
//! view state. A successful dispatch then calls [`ShelfApi::refresh`], which
//! re-derives the filtered list, the stats and the [`LibraryView`] from
//! scratch and returns them in the [`CmdResult`]. There is no incremental
//! view update anywhere, so what a UI draws after a command is always a pure
//! function of the state after it.
//!
//! Failed commands return `Err` and leave everything the way it was, with one
//! exception: submitting an edit for a book that vanished in the meantime
//! closes the session, since there is nothing left to edit.
//!
//! ## What the API Does NOT Do
//!
//! - Printing: it returns data and [`CmdMessage`]s, never writes to stdout
//! - Prompting: deletion arrives already confirmed or not
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<MemoryStore>`

use crate::config::{ConfigAction, ShelfConfig};
use crate::error::{Result, ShelfError};
use crate::filter::{filter_books, BookFilter};
use crate::model::{Book, ReadingStatus, MAX_RATING};
use crate::repository::BookRepository;
use crate::selector::BookSelector;
use crate::session::{EditSession, FormField, SessionMode};
use crate::stats::Stats;
use crate::store::KeyValueStore;
use crate::view::{card_for, project, Card, Layout, LibraryView, RenderOptions};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books created, updated or deleted by the command.
    pub affected_books: Vec<Book>,
    pub messages: Vec<CmdMessage>,
    /// The re-derived view; set by every successful dispatch.
    pub view: Option<LibraryView>,
    pub stats: Stats,
    pub config: Option<ShelfConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Every user interaction the core understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenCreate,
    OpenEdit(Uuid),
    SetField(FormField),
    ChangeStatus(ReadingStatus),
    ClickStar(u8),
    HoverStar(u8),
    LeaveRating,
    ClearRating,
    Submit,
    Cancel,
    Delete { id: Uuid, confirmed: bool },
    SetSearchQuery(String),
    SetStatusFilter(Option<ReadingStatus>),
    SetLayout(Layout),
    SetCompact(bool),
}

pub struct ShelfApi<K: KeyValueStore> {
    repo: BookRepository<K>,
    session: Option<EditSession>,
    filter: BookFilter,
    options: RenderOptions,
    config_dir: Option<PathBuf>,
}

impl<K: KeyValueStore> ShelfApi<K> {
    pub fn new(repo: BookRepository<K>, options: RenderOptions) -> Self {
        Self {
            repo,
            session: None,
            filter: BookFilter::default(),
            options,
            config_dir: None,
        }
    }

    /// Directory holding `config.json`, needed by [`ShelfApi::config`].
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn repository(&self) -> &BookRepository<K> {
        &self.repo
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn filter(&self) -> &BookFilter {
        &self.filter
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn dispatch(&mut self, command: Command) -> Result<CmdResult> {
        tracing::debug!(?command, "dispatch");
        let mut result = CmdResult::default();

        match command {
            Command::OpenCreate => {
                self.open_session(EditSession::create());
            }
            Command::OpenEdit(id) => {
                let book = self.repo.find_by_id(&id).ok_or(ShelfError::NotFound(id))?;
                self.open_session(EditSession::edit(book));
            }
            Command::SetField(field) => {
                if !self.session_mut()?.set_field(field) {
                    result.add_message(CmdMessage::warning(
                        "Comments can only be added to books you have read",
                    ));
                }
            }
            Command::ChangeStatus(status) => {
                self.session_mut()?.change_status(status);
            }
            Command::ClickStar(star) => {
                let rating = self.session_mut()?.rating_mut();
                if !rating.is_enabled() {
                    result.add_message(CmdMessage::warning(
                        "Ratings can only be given to books you have read",
                    ));
                } else if !rating.click(star) {
                    result.add_message(CmdMessage::warning(format!(
                        "Rating must be between 1 and {}",
                        MAX_RATING
                    )));
                }
            }
            Command::HoverStar(star) => {
                self.session_mut()?.rating_mut().hover(star);
            }
            Command::LeaveRating => {
                self.session_mut()?.rating_mut().leave();
            }
            Command::ClearRating => {
                self.session_mut()?.rating_mut().clear();
            }
            Command::Submit => {
                let creating = self.session.as_ref().map(|s| s.mode()) == Some(SessionMode::Create);
                let book = self.submit()?;
                let verb = if creating { "Added" } else { "Updated" };
                result.add_message(CmdMessage::success(format!("{} \"{}\"", verb, book.title)));
                result.affected_books.push(book);
            }
            Command::Cancel => {
                if self.session.take().is_some() {
                    tracing::debug!("session discarded");
                }
            }
            Command::Delete { id, confirmed } => {
                if !confirmed {
                    result.add_message(CmdMessage::info("Nothing deleted"));
                } else {
                    let removed = self.repo.delete(&id)?;
                    if self.session.as_ref().map(|s| s.mode()) == Some(SessionMode::Edit(id)) {
                        self.session = None;
                    }
                    result.add_message(CmdMessage::success(format!(
                        "Deleted \"{}\"",
                        removed.title
                    )));
                    result.affected_books.push(removed);
                }
            }
            Command::SetSearchQuery(query) => {
                self.filter.query = query;
            }
            Command::SetStatusFilter(status) => {
                self.filter.status = status;
            }
            Command::SetLayout(layout) => {
                self.options.layout = layout;
            }
            Command::SetCompact(compact) => {
                self.options.compact = compact;
            }
        }

        self.refresh(&mut result);
        Ok(result)
    }

    /// Re-derives the view and stats from the current state.
    pub fn refresh(&self, result: &mut CmdResult) {
        result.view = Some(self.view());
        result.stats = self.repo.stats();
    }

    pub fn view(&self) -> LibraryView {
        let books = self.repo.books();
        let listed = filter_books(books, &self.filter);
        project(&listed, &self.filter, books.len(), self.options)
    }

    /// A single book's card, always with its full comment.
    pub fn card(&self, id: &Uuid) -> Result<Card> {
        let book = self.repo.find_by_id(id).ok_or(ShelfError::NotFound(*id))?;
        let position = self.repo.position_of(id).unwrap_or_default();
        Ok(card_for(book, position, false))
    }

    /// Resolves a user-typed book reference to an id.
    pub fn resolve(&self, reference: &str) -> Result<Uuid> {
        let selector: BookSelector = reference.parse().map_err(ShelfError::Api)?;
        selector.resolve(self.repo.books())
    }

    pub fn stats(&self) -> CmdResult {
        let mut result = CmdResult::default();
        self.refresh(&mut result);
        result
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let dir = self
            .config_dir
            .clone()
            .ok_or_else(|| ShelfError::Store("No config directory".to_string()))?;

        match action {
            ConfigAction::ShowAll => Ok(CmdResult::default().with_config(ShelfConfig::load(&dir)?)),
            ConfigAction::ShowKey(key) => {
                let config = ShelfConfig::load(&dir)?;
                let mut result = CmdResult::default();
                match config.get(&key) {
                    Some(value) => result.add_message(CmdMessage::info(value)),
                    None => {
                        let message = format!("Unknown config key: {}", key);
                        result.add_message(CmdMessage::error(message))
                    }
                }
                Ok(result)
            }
            ConfigAction::Set(key, value) => {
                let mut config = ShelfConfig::load(&dir)?;
                if let Err(e) = config.set(&key, &value) {
                    let mut result = CmdResult::default();
                    result.add_message(CmdMessage::error(e.to_string()));
                    return Ok(result);
                }
                config.save(&dir)?;
                self.options = config.render_options();

                let display = config.get(&key).unwrap_or(value);
                let mut result = CmdResult::default().with_config(config);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, display)));
                Ok(result)
            }
        }
    }

    fn open_session(&mut self, session: EditSession) {
        if self.session.is_some() {
            tracing::debug!("replacing open session");
        }
        tracing::debug!(mode = ?session.mode(), "session opened");
        self.session = Some(session);
    }

    fn session_mut(&mut self) -> Result<&mut EditSession> {
        self.session
            .as_mut()
            .ok_or_else(|| ShelfError::Api("No book is being edited".to_string()))
    }

    fn submit(&mut self) -> Result<Book> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| ShelfError::Api("No book is being edited".to_string()))?;
        let draft = session.draft()?;

        let saved = match session.mode() {
            SessionMode::Create => self.repo.create(draft),
            SessionMode::Edit(id) => self.repo.update(&id, draft),
        };

        match saved {
            Ok(book) => {
                self.session = None;
                Ok(book)
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!("edited book no longer exists, closing session");
                self.session = None;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
