//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that drive `ShelfApi` and print
//!   the rendered result
//!
//! Handlers never decide business rules. `add` and `edit` replay the form
//! interaction through `ShelfApi::dispatch`, and print whatever messages the
//! API returns (including warnings for refused rating or comment input).

use super::render::{Renderer, LINE_WIDTH};
use super::setup::{BookFields, Cli, Commands};
use clap::Parser;
use shelf::api::{CmdMessage, CmdResult, Command, ShelfApi};
use shelf::config::ConfigAction;
use shelf::error::Result;
use shelf::init::initialize;
use shelf::model::ReadingStatus;
use shelf::session::FormField;
use shelf::store::fs::FileStore;
use shelf::view::Layout;
use std::io::{self, Write};

struct AppContext {
    api: ShelfApi<FileStore>,
    renderer: Renderer,
    width: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::init_tracing(cli.verbose);

    let use_color = !cli.no_color && console::Term::stdout().features().colors_supported();
    if !use_color {
        colored::control::set_override(false);
    }

    let ctx = initialize()?;
    let mut app = AppContext {
        api: ctx.api,
        renderer: Renderer::new(use_color),
        width: terminal_width(),
    };

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut app, fields),
        Some(Commands::List {
            search,
            status,
            layout,
            compact,
        }) => handle_list(&mut app, search, status, layout, compact),
        Some(Commands::Show { book }) => handle_show(&app, &book),
        Some(Commands::Edit {
            book,
            fields,
            clear_rating,
        }) => handle_edit(&mut app, &book, fields, clear_rating),
        Some(Commands::Delete { book, yes }) => handle_delete(&mut app, &book, yes),
        Some(Commands::Stats) => handle_stats(&app),
        Some(Commands::Config { key, value }) => handle_config(&mut app, key, value),
        None => handle_list(&mut app, None, None, None, false),
    }
}

fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH)
}

/// Dispatches a command, collecting its messages.
fn send(
    app: &mut AppContext,
    command: Command,
    messages: &mut Vec<CmdMessage>,
) -> Result<CmdResult> {
    let mut result = app.api.dispatch(command)?;
    messages.append(&mut result.messages);
    Ok(result)
}

/// Feeds the given fields into the open session, status first so rating
/// and comment see the status they belong to.
fn fill_session(
    app: &mut AppContext,
    fields: BookFields,
    messages: &mut Vec<CmdMessage>,
) -> Result<()> {
    if let Some(title) = fields.title {
        send(app, Command::SetField(FormField::Title(title)), messages)?;
    }
    if let Some(author) = fields.author {
        send(app, Command::SetField(FormField::Author(author)), messages)?;
    }
    if let Some(url) = fields.image_url {
        send(app, Command::SetField(FormField::ImageUrl(url)), messages)?;
    }
    if let Some(status) = fields.status {
        send(app, Command::ChangeStatus(status), messages)?;
    }
    if let Some(rating) = fields.rating {
        send(app, Command::ClickStar(rating), messages)?;
    }
    if let Some(comment) = fields.comment {
        send(app, Command::SetField(FormField::Comment(comment)), messages)?;
    }
    Ok(())
}

fn handle_add(app: &mut AppContext, fields: BookFields) -> Result<()> {
    let mut messages = Vec::new();
    send(app, Command::OpenCreate, &mut messages)?;
    fill_session(app, fields, &mut messages)?;
    send(app, Command::Submit, &mut messages)?;
    print!("{}", app.renderer.messages(&messages));
    Ok(())
}

fn handle_edit(
    app: &mut AppContext,
    book: &str,
    fields: BookFields,
    clear_rating: bool,
) -> Result<()> {
    let id = app.api.resolve(book)?;
    if fields.is_empty() && !clear_rating {
        print!(
            "{}",
            app.renderer
                .messages(&[CmdMessage::info("Nothing to change")])
        );
        return Ok(());
    }

    let mut messages = Vec::new();
    send(app, Command::OpenEdit(id), &mut messages)?;
    fill_session(app, fields, &mut messages)?;
    if clear_rating {
        send(app, Command::ClearRating, &mut messages)?;
    }
    send(app, Command::Submit, &mut messages)?;
    print!("{}", app.renderer.messages(&messages));
    Ok(())
}

fn handle_delete(app: &mut AppContext, book: &str, yes: bool) -> Result<()> {
    let id = app.api.resolve(book)?;
    let confirmed = yes
        || match app.api.repository().find_by_id(&id) {
            Some(found) => confirm(&format!(
                "Delete \"{}\" by {}?",
                found.title, found.author
            ))?,
            None => false,
        };

    let result = app.api.dispatch(Command::Delete { id, confirmed })?;
    print!("{}", app.renderer.messages(&result.messages));
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{} [y/N] ", prompt);
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_list(
    app: &mut AppContext,
    search: Option<String>,
    status: Option<ReadingStatus>,
    layout: Option<Layout>,
    compact: bool,
) -> Result<()> {
    let mut messages = Vec::new();
    if let Some(layout) = layout {
        send(app, Command::SetLayout(layout), &mut messages)?;
    }
    if compact {
        send(app, Command::SetCompact(true), &mut messages)?;
    }
    send(app, Command::SetStatusFilter(status), &mut messages)?;
    let result = send(
        app,
        Command::SetSearchQuery(search.unwrap_or_default()),
        &mut messages,
    )?;

    if let Some(view) = &result.view {
        print!("{}", app.renderer.library(view, app.width));
        let shown = view.cards().len();
        if app.api.filter().is_active() && shown > 0 {
            messages.push(CmdMessage::info(format!(
                "Showing {} of {} books",
                shown, result.stats.total
            )));
        }
    }
    print!("{}", app.renderer.messages(&messages));
    Ok(())
}

fn handle_show(app: &AppContext, book: &str) -> Result<()> {
    let id = app.api.resolve(book)?;
    let card = app.api.card(&id)?;
    print!("{}", app.renderer.detail(&card));
    Ok(())
}

fn handle_stats(app: &AppContext) -> Result<()> {
    let result = app.api.stats();
    print!("{}", app.renderer.stats(&result.stats));
    Ok(())
}

fn handle_config(app: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = app.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", app.renderer.config(config));
        }
    }
    print!("{}", app.renderer.messages(&result.messages));
    Ok(())
}
