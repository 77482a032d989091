//! # Rendering Module
//!
//! Turns the core's view types into styled terminal text.
//!
//! Layout calculations (width, truncation, padding, grid columns) stay in
//! Rust because they need Unicode-aware processing. Templates handle
//! presentation: which style goes where, and what is shown conditionally.
//!
//! The `style` filter applies a named style from [`SHELF_THEME`]; the
//! `stars` function draws a star row from a list of lit flags.

use super::styles::{names, SHELF_THEME};
use super::templates;
use chrono::{DateTime, Utc};
use console::{pad_str, Alignment};
use minijinja::{context, Environment, Value};
use serde::Serialize;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::config::ShelfConfig;
use shelf::icons::{IconSet, TerminalIcons};
use shelf::model::ReadingStatus;
use shelf::stats::Stats;
use shelf::view::{truncate_to_width, Card, CardImage, EmptyState, Layout, LibraryView};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// Fallback terminal width when stdout is not a terminal.
pub const LINE_WIDTH: usize = 100;
/// Width of one card in the grid layout.
pub const TILE_WIDTH: usize = 30;
const TILE_GAP: usize = 3;
/// Width of the status badge column, wide enough for "Want to read".
const BADGE_WIDTH: usize = 12;
/// Width of the star column in list rows.
const STARS_WIDTH: usize = 5;

#[derive(Serialize)]
struct CardData {
    id: String,
    index: String,
    title: String,
    author: String,
    badge: String,
    badge_style: String,
    stars: Option<Vec<bool>>,
    comment: Option<String>,
    cover: String,
    time: String,
}

#[derive(Serialize)]
struct RowData {
    index: String,
    title: String,
    author: String,
    padding: String,
    badge: String,
    badge_style: String,
    stars: Option<Vec<bool>>,
    comment: Option<String>,
    indent: String,
}

#[derive(Serialize)]
struct StatRow {
    label: &'static str,
    style: String,
    padding: String,
    count: usize,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        for (name, source) in templates::ALL {
            if let Err(e) = env.add_template(name, source) {
                tracing::error!(template = name, error = %e, "invalid template");
            }
        }

        let theme = &*SHELF_THEME;
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        env.add_function("stars", move |lit: Value| -> String {
            let Ok(iter) = lit.try_iter() else {
                return String::new();
            };
            let icons = TerminalIcons;
            iter.map(|star| {
                if star.is_true() {
                    theme.apply(names::STAR_ON, &icons.glyph(Some("star_fill")), use_color)
                } else {
                    theme.apply(names::STAR_OFF, &icons.glyph(Some("star")), use_color)
                }
            })
            .collect()
        });

        Self { env }
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(ctx))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    /// Renders the whole library view for a terminal `width` columns wide.
    pub fn library(&self, view: &LibraryView, width: usize) -> String {
        match view {
            LibraryView::Empty(state) => self.empty(state),
            LibraryView::Cards {
                layout: Layout::List,
                cards,
            } => {
                let rows: Vec<RowData> = cards.iter().map(|c| row_data(c, width)).collect();
                self.render("list.jinja", context! { rows })
            }
            LibraryView::Cards {
                layout: Layout::Grid,
                cards,
            } => {
                let tiles: Vec<String> = cards
                    .iter()
                    .map(|c| {
                        let card = card_data(c, Some(TILE_WIDTH));
                        self.render("card.jinja", context! { card })
                    })
                    .collect();
                compose_grid(&tiles, grid_columns(width))
            }
        }
    }

    pub fn empty(&self, empty: &EmptyState) -> String {
        let icons: BTreeMap<&str, String> =
            BTreeMap::from([("book", TerminalIcons.glyph(Some("book")))]);
        self.render("empty.jinja", context! { empty, icons })
    }

    /// A single book with its full comment.
    pub fn detail(&self, card: &Card) -> String {
        let card = card_data(card, None);
        self.render("detail.jinja", context! { card })
    }

    pub fn stats(&self, stats: &Stats) -> String {
        let label_width = ReadingStatus::ALL
            .iter()
            .map(|s| s.label().width())
            .max()
            .unwrap_or_default()
            + 2;
        let rows: Vec<StatRow> = ReadingStatus::ALL
            .iter()
            .map(|&status| StatRow {
                label: status.label(),
                style: badge_style(status),
                padding: " ".repeat(label_width - status.label().width()),
                count: stats.count_for(status),
            })
            .collect();
        let total_padding = " ".repeat(label_width - "Total".len());
        self.render(
            "stats.jinja",
            context! { rows, total => stats.total, total_padding },
        )
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let messages: Vec<MessageData> = messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: match m.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect();
        self.render("messages.jinja", context! { messages })
    }

    pub fn config(&self, config: &ShelfConfig) -> String {
        let entries: Vec<ConfigEntry> = ShelfConfig::KEYS
            .iter()
            .map(|&key| ConfigEntry {
                key,
                value: config.get(key).unwrap_or_default(),
            })
            .collect();
        self.render("config.jinja", context! { entries })
    }
}

fn badge_style(status: ReadingStatus) -> String {
    format!("badge-{}", status.badge_class())
}

fn card_data(card: &Card, width: Option<usize>) -> CardData {
    let fit = |s: &str| match width {
        Some(w) => truncate_to_width(s, w),
        None => s.to_string(),
    };
    let index = format!("{}.", card.position);
    let title_width = width.map(|w| w.saturating_sub(index.width() + 1));

    CardData {
        id: card.id.to_string(),
        title: match title_width {
            Some(w) => truncate_to_width(&card.title, w),
            None => card.title.clone(),
        },
        index,
        author: fit(&card.author),
        badge: card.badge.label.to_string(),
        badge_style: badge_style(card.badge.status),
        stars: card.stars.clone(),
        comment: card.comment.as_ref().map(|c| match width {
            Some(w) => truncate_to_width(&c.snippet, w),
            None => c.full.clone(),
        }),
        cover: match &card.image {
            CardImage::Url(url) => url.clone(),
            CardImage::Placeholder => "(no cover)".to_string(),
        },
        time: format_time_ago(card.created_at),
    }
}

fn row_data(card: &Card, width: usize) -> RowData {
    let index = format!("{:>3}.", card.position);
    let fixed = index.width() + 1 + " by ".len() + 1 + BADGE_WIDTH + 1 + STARS_WIDTH;
    let available = width.saturating_sub(fixed).max(10);

    let title = truncate_to_width(&card.title, available * 3 / 5);
    let author = truncate_to_width(&card.author, available.saturating_sub(title.width()));
    let padding = " ".repeat(available.saturating_sub(title.width() + author.width()) + 1);

    RowData {
        indent: " ".repeat(index.width() + 1),
        index,
        title,
        author,
        padding,
        badge: format!("{:<width$}", card.badge.label, width = BADGE_WIDTH),
        badge_style: badge_style(card.badge.status),
        stars: card.stars.clone(),
        comment: card.comment.as_ref().map(|c| c.snippet.clone()),
    }
}

/// How many tiles fit side by side.
pub fn grid_columns(width: usize) -> usize {
    ((width + TILE_GAP) / (TILE_WIDTH + TILE_GAP)).max(1)
}

/// Lays rendered tiles out in rows of `columns`, padding ragged tiles.
fn compose_grid(tiles: &[String], columns: usize) -> String {
    let gap = " ".repeat(TILE_GAP);
    let mut out = String::new();

    for row in tiles.chunks(columns) {
        let split: Vec<Vec<&str>> = row.iter().map(|t| t.lines().collect()).collect();
        let height = split.iter().map(Vec::len).max().unwrap_or_default();

        for i in 0..height {
            let line: Vec<String> = split
                .iter()
                .map(|lines| {
                    let cell = lines.get(i).copied().unwrap_or_default();
                    pad_str(cell, TILE_WIDTH, Alignment::Left, None).into_owned()
                })
                .collect();
            out.push_str(line.join(&gap).trim_end());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    format!(
        "added {}",
        formatter.convert(duration.to_std().unwrap_or_default())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::filter::{filter_books, BookFilter};
    use shelf::model::BookDraft;
    use shelf::repository::BookRepository;
    use shelf::store::memory::MemoryStore;
    use shelf::store::Persistence;
    use shelf::view::{project, RenderOptions};

    fn repo_with(drafts: Vec<BookDraft>) -> BookRepository<MemoryStore> {
        let mut repo = BookRepository::open(Persistence::new(MemoryStore::new()));
        for draft in drafts {
            repo.create(draft).unwrap();
        }
        repo
    }

    fn view_of(repo: &BookRepository<MemoryStore>, layout: Layout) -> LibraryView {
        let filter = BookFilter::default();
        let listed = filter_books(repo.books(), &filter);
        project(
            &listed,
            &filter,
            repo.books().len(),
            RenderOptions {
                layout,
                compact: false,
            },
        )
    }

    fn reviewed() -> BookDraft {
        BookDraft::new("Dune", "Frank Herbert")
            .with_status(ReadingStatus::Read)
            .with_rating(4)
            .with_comment("Great read")
    }

    #[test]
    fn empty_library_suggests_adding() {
        let repo = repo_with(vec![]);
        let out = Renderer::new(false).library(&view_of(&repo, Layout::Grid), LINE_WIDTH);
        assert!(out.contains("Your library is empty"));
        assert!(out.contains("shelf add"));
    }

    #[test]
    fn no_results_hides_add_hint() {
        let out = Renderer::new(false).empty(&EmptyState::no_results());
        assert!(out.contains("No books found"));
        assert!(!out.contains("shelf add"));
    }

    #[test]
    fn list_layout_one_row_per_book() {
        let repo = repo_with(vec![
            BookDraft::new("Emma", "Jane Austen"),
            reviewed(),
        ]);
        let out = Renderer::new(false).library(&view_of(&repo, Layout::List), LINE_WIDTH);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("1.") && lines[0].contains("Dune"));
        assert!(lines[0].contains("★★★★☆"));
        assert!(lines[1].contains("Great read"));
        assert!(lines[2].contains("2.") && lines[2].contains("Want to read"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn grid_places_tiles_side_by_side() {
        let repo = repo_with(vec![
            BookDraft::new("Emma", "Jane Austen"),
            BookDraft::new("Dune", "Frank Herbert"),
        ]);
        let out = Renderer::new(false).library(&view_of(&repo, Layout::Grid), LINE_WIDTH);
        let first = out.lines().next().unwrap();
        assert!(first.contains("Dune") && first.contains("Emma"));
    }

    #[test]
    fn narrow_grid_stacks_tiles() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(TILE_WIDTH * 2 + TILE_GAP), 2);
    }

    #[test]
    fn detail_shows_full_comment_and_placeholder_cover() {
        let long = "word ".repeat(30);
        let repo = repo_with(vec![reviewed().with_comment(long.clone())]);
        let view = view_of(&repo, Layout::Grid);
        let out = Renderer::new(false).detail(&view.cards()[0]);
        assert!(out.contains(long.trim()));
        assert!(out.contains("(no cover)"));
        assert!(out.contains("Rating:"));
    }

    #[test]
    fn stats_lists_every_status() {
        let repo = repo_with(vec![reviewed(), BookDraft::new("Emma", "Jane Austen")]);
        let out = Renderer::new(false).stats(&repo.stats());
        assert!(out.contains("Want to read"));
        assert!(out.contains("Reading"));
        assert!(out.lines().last().unwrap().ends_with('2'));
    }

    #[test]
    fn messages_render_in_order() {
        let out = Renderer::new(false).messages(&[
            CmdMessage::success("Added \"Dune\""),
            CmdMessage::warning("careful"),
        ]);
        assert_eq!(out, "Added \"Dune\"\ncareful\n");
        assert!(Renderer::new(false).messages(&[]).is_empty());
    }

    #[test]
    fn config_lists_all_keys() {
        let out = Renderer::new(false).config(&ShelfConfig::default());
        assert_eq!(out, "layout = grid\ncompact = false\n");
    }

    #[test]
    fn colored_output_has_escape_codes() {
        let out = Renderer::new(true).messages(&[CmdMessage::error("boom")]);
        assert!(out.contains("\u{1b}["));
    }
}
