//! Static text panels: the introduction and the closing takeaways.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::themes::Theme;

/// Render the introduction panel shown on the overview screen.
pub fn render_intro(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Three datasets merged into a single table:",
            theme.bold,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  - Netflix Original films with IMDB scores",
            theme.text,
        )),
        Line::from(Span::styled(
            "  - The general Netflix catalog, contributing the content rating",
            theme.text,
        )),
        Line::from(Span::styled("  - Netflix daily stock prices", theme.text)),
        Line::from(""),
        Line::from(Span::styled(
            "Originals are left-joined to the catalog on title and to the stock",
            theme.dim,
        )),
        Line::from(Span::styled(
            "table on premiere date. Films with no catalog match are kept with",
            theme.dim,
        )),
        Line::from(Span::styled(
            "rating \"U\"; films premiering on non-trading days are dropped.",
            theme.dim,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The goal is to see whether IMDB scores, genres and ratings bear",
            theme.dim,
        )),
        Line::from(Span::styled(
            "any relation to the stock's movement on premiere days.",
            theme.dim,
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Introduction "),
        )
        .style(theme.text);
    frame.render_widget(paragraph, area);
}

/// Render the closing takeaways panel.
pub fn render_takeaways(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Main takeaways", theme.bold)),
        Line::from(""),
        Line::from(Span::styled(
            "  - The stock data is a poor companion for premiere-day analysis:",
            theme.text,
        )),
        Line::from(Span::styled(
            "    scores accumulate long after release, so no correlation with",
            theme.text,
        )),
        Line::from(Span::styled(
            "    the daily price spread shows up.",
            theme.text,
        )),
        Line::from(Span::styled(
            "  - The genre distribution is heavily skewed; a handful of genres",
            theme.text,
        )),
        Line::from(Span::styled(
            "    hold most of the films and most of the top scores.",
            theme.text,
        )),
        Line::from(Span::styled(
            "  - Content rating groups spread evenly across the score range,",
            theme.text,
        )),
        Line::from(Span::styled(
            "    suggesting no relation between rating and score.",
            theme.text,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Vote counts or subscriber numbers would make for a stronger signal.",
            theme.dim,
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Takeaways "))
        .style(theme.text);
    frame.render_widget(paragraph, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
