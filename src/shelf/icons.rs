/// Renders named icons for a UI.
///
/// An absent or unknown name renders as an empty string, never an error.
pub trait IconSet {
    fn glyph(&self, name: Option<&str>) -> String;
}

/// Unicode glyphs for terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalIcons;

impl IconSet for TerminalIcons {
    fn glyph(&self, name: Option<&str>) -> String {
        let glyph = match name {
            Some("book") | Some("open-book") => "📖",
            Some("star") => "☆",
            Some("star_fill") => "★",
            Some("edit") | Some("pen") => "✎",
            Some("delete") | Some("trash") => "✗",
            Some("search") => "⌕",
            Some("plus") => "+",
            Some("grid") => "▦",
            Some("list") => "☰",
            Some("close") => "×",
            _ => "",
        };
        glyph.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_render() {
        assert_eq!(TerminalIcons.glyph(Some("star_fill")), "★");
        assert_eq!(TerminalIcons.glyph(Some("star")), "☆");
    }

    #[test]
    fn absent_or_unknown_names_render_empty() {
        assert_eq!(TerminalIcons.glyph(None), "");
        assert_eq!(TerminalIcons.glyph(Some("unicorn")), "");
    }
}
