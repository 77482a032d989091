//! Styles for the shelf CLI.
//!
//! Templates never name colors. They use semantic style names (a `title`, a
//! `badge-read`, a `time`), and this module maps each name to a
//! `console::Style`. Changing the look of the CLI means editing this file
//! only.
//!
//! An unknown style name renders the text unchanged, prefixed with `(!?)` so
//! typos in templates show up during development.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const TIME: &str = "time";
    pub const INDEX: &str = "index";
    pub const STAR_ON: &str = "star-on";
    pub const STAR_OFF: &str = "star-off";
    pub const HEADING: &str = "heading";
    pub const HINT: &str = "hint";
    pub const COUNT: &str = "count";
    // One per status badge class.
    pub const BADGE_WANT_TO_READ: &str = "badge-want-to-read";
    pub const BADGE_READING: &str = "badge-reading";
    pub const BADGE_READ: &str = "badge-read";
}

const MISSING_INDICATOR: &str = "(!?)";

/// A named collection of styles.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Applies a named style. With `use_color` off the text is returned as is.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_INDICATOR, text),
        }
    }
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    let gold = Style::new().color256(178);

    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, Style::new().color256(240))
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::AUTHOR, Style::new().italic())
        .add(names::TIME, muted.clone().italic())
        .add(names::INDEX, gold.clone())
        .add(names::STAR_ON, gold.bold())
        .add(names::STAR_OFF, Style::new().color256(240))
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::HINT, muted)
        .add(names::COUNT, Style::new().cyan().bold())
        .add(names::BADGE_WANT_TO_READ, Style::new().blue())
        .add(names::BADGE_READING, Style::new().yellow())
        .add(names::BADGE_READ, Style::new().green())
});

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::model::ReadingStatus;

    #[test]
    fn every_badge_class_has_a_style() {
        for status in ReadingStatus::ALL {
            let name = format!("badge-{}", status.badge_class());
            let out = SHELF_THEME.apply(&name, "x", false);
            assert_eq!(out, "x", "missing style for {}", name);
        }
    }

    #[test]
    fn color_adds_escape_codes() {
        let out = SHELF_THEME.apply(names::TITLE, "Dune", true);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("Dune"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(SHELF_THEME.apply("nope", "x", true), "(!?) x");
    }
}
