//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `shelf` library.
//!
//! ## One Command, One Session
//!
//! Each invocation replays what a user would do in a form: `shelf add` opens a
//! create session, fills in the fields given as flags and submits; `shelf
//! edit` does the same on an existing book. Everything goes through
//! `ShelfApi::dispatch`, so the CLI gets the same review rules as any other
//! client (a rating passed for an unread book is refused with a warning).
//!
//! ### Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments defaults to `shelf list`.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that drive the API and print results
//! - `render`: Template rendering with themed styles
//! - `setup`: Argument parsing via clap
//! - `styles`: The style theme
//! - `templates`: Output templates

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
