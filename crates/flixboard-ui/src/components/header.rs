use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative sparkle string placed either side of the dashboard title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Dashboard title text.
pub const TITLE: &str = " NETFLIX ORIGINALS & STOCK DASHBOARD ";

/// Dashboard header rendering four lines:
///
/// 1. Application title with sparkle decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Context information in `[ view | N films ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Current view or panel label (e.g. "dashboard", "genres").
    pub context: &'a str,
    /// Number of films in the cleaned dataset.
    pub film_count: usize,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(context: &'a str, film_count: usize, theme: &'a Theme) -> Self {
        Self {
            context,
            film_count,
            theme,
        }
    }

    /// Render the header as a `Vec<Line>` containing exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            // Title line.
            Line::from(vec![
                Span::styled(SPARKLES, self.theme.header_sparkle),
                Span::styled(TITLE, self.theme.header),
                Span::styled(SPARKLES, self.theme.header_sparkle),
            ]),
            // Separator line.
            Line::from(Span::styled(separator, self.theme.separator)),
            // Context info line.
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.context.to_lowercase(), self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(format!("{} films", self.film_count), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            // Empty line.
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    #[test]
    fn test_header_to_lines_count() {
        let theme = Theme::dark();
        let header = Header::new("dashboard", 362, &theme);
        let lines = header.to_lines();
        assert_eq!(lines.len(), 4, "header must produce exactly 4 lines");
    }

    #[test]
    fn test_header_title_line_content() {
        let theme = Theme::dark();
        let header = Header::new("dashboard", 362, &theme);
        let lines = header.to_lines();

        let title_text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(
            title_text.contains("NETFLIX ORIGINALS & STOCK DASHBOARD"),
            "title line must contain the dashboard title, got: {title_text}"
        );
        assert!(
            title_text.contains(SPARKLES),
            "title line must contain sparkles, got: {title_text}"
        );
    }

    #[test]
    fn test_header_info_line_content() {
        let theme = Theme::dark();
        let header = Header::new("Genres", 10, &theme);
        let lines = header.to_lines();

        let info_text: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(
            info_text.contains("genres"),
            "context must be lowercased, got: {info_text}"
        );
        assert!(
            info_text.contains("10 films"),
            "film count must appear, got: {info_text}"
        );
        assert!(
            info_text.contains("[ ") && info_text.contains(" | ") && info_text.contains(" ]"),
            "format must be '[ context | N films ]', got: {info_text}"
        );
    }

    #[test]
    fn test_header_separator_line() {
        let theme = Theme::dark();
        let header = Header::new("table", 0, &theme);
        let lines = header.to_lines();

        let sep_text: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(
            sep_text.chars().count(),
            60,
            "separator must be 60 chars wide"
        );
        assert!(
            sep_text.chars().all(|c| c == '='),
            "separator must consist of '=' characters, got: {sep_text}"
        );
    }

    #[test]
    fn test_header_empty_fourth_line() {
        let theme = Theme::dark();
        let header = Header::new("dashboard", 1, &theme);
        let lines = header.to_lines();

        let empty_text: String = lines[3].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(empty_text.is_empty());
    }
}
