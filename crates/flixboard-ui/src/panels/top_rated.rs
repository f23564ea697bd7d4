//! The top-20 films by IMDB score as horizontal score bars.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use flixboard_core::formatting::format_score;
use flixboard_core::models::FilmRow;

use crate::panels::truncate_to_width;
use crate::themes::Theme;

const TITLE_WIDTH: usize = 30;
const BAR_WIDTH: usize = 30;
/// IMDB scores live on a fixed 0..10 scale.
const SCORE_SCALE: f64 = 10.0;

/// Render the top-rated films panel.
///
/// One line per film: padded title, a score bar coloured by genre, the
/// numeric score and the genre label.
pub fn render_top_rated(frame: &mut Frame, area: Rect, top: &[FilmRow], theme: &Theme) {
    // Genre → palette index, in order of first appearance within the top list.
    let mut genres: Vec<&str> = Vec::new();
    for row in top {
        if !genres.contains(&row.genre.as_str()) {
            genres.push(row.genre.as_str());
        }
    }

    let mut lines: Vec<Line> = Vec::with_capacity(top.len() + 1);
    lines.push(Line::from(""));

    for row in top {
        let genre_idx = genres
            .iter()
            .position(|g| *g == row.genre.as_str())
            .unwrap_or(0);
        let style = theme.series_style(genre_idx);

        let filled = ((row.imdb_score / SCORE_SCALE) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let title = truncate_to_width(&row.title, TITLE_WIDTH);

        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$}", title, width = TITLE_WIDTH), theme.text),
            Span::styled("█".repeat(filled), style),
            Span::styled("░".repeat(BAR_WIDTH - filled), theme.dim),
            Span::styled(format!(" {}", format_score(row.imdb_score)), theme.value),
            Span::styled(format!("  {}", row.genre), theme.dim),
        ]));
    }

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Top 20 Films by IMDB Score "),
    );
    frame.render_widget(paragraph, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
