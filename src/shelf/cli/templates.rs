//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files next to this module, so they can be edited and diffed apart from
//! the code. They are pulled in as string constants at compile time.
//!
//! Conventions:
//!
//! 1. Block tags (`{% if %}`, `{% for %}`) sit on their own lines. The
//!    environment trims the newline after a block tag, so a line ending in
//!    one would lose its line break.
//! 2. Templates pick style names, never colors (see `styles.rs`).
//! 3. Width math (truncation, padding, columns) happens in Rust; templates
//!    receive ready-to-print strings.

pub const CARD_TEMPLATE: &str = include_str!("templates/card.jinja");
pub const ROW_TEMPLATE: &str = include_str!("templates/row.jinja");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.jinja");
pub const EMPTY_TEMPLATE: &str = include_str!("templates/empty.jinja");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.jinja");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");

/// Every template, registered under its file name.
pub const ALL: [(&str, &str); 8] = [
    ("card.jinja", CARD_TEMPLATE),
    ("row.jinja", ROW_TEMPLATE),
    ("list.jinja", LIST_TEMPLATE),
    ("empty.jinja", EMPTY_TEMPLATE),
    ("detail.jinja", DETAIL_TEMPLATE),
    ("stats.jinja", STATS_TEMPLATE),
    ("messages.jinja", MESSAGES_TEMPLATE),
    ("config.jinja", CONFIG_TEMPLATE),
];
