//! Score-weighted genre share of the top-20 films, as a segmented bar.
//!
//! A pie chart's terminal stand-in: one proportional bar segment per genre
//! plus a percentage legend.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use flixboard_core::formatting::percentage;
use flixboard_core::models::FilmRow;

use crate::themes::Theme;

const BAR_WIDTH: usize = 50;

/// One genre's slice of the top-20 distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreShare {
    pub genre: String,
    /// Sum of IMDB scores attributed to this genre.
    pub weight: f64,
    /// Number of top-20 films in this genre.
    pub films: u32,
    /// Share of the total weight, in percent.
    pub share_pct: f64,
}

/// Compute score-weighted shares per genre, largest first.
pub fn genre_shares(top: &[FilmRow]) -> Vec<GenreShare> {
    let mut shares: Vec<GenreShare> = Vec::new();
    for row in top {
        match shares.iter_mut().find(|s| s.genre == row.genre) {
            Some(share) => {
                share.weight += row.imdb_score;
                share.films += 1;
            }
            None => shares.push(GenreShare {
                genre: row.genre.clone(),
                weight: row.imdb_score,
                films: 1,
                share_pct: 0.0,
            }),
        }
    }

    let total: f64 = shares.iter().map(|s| s.weight).sum();
    for share in &mut shares {
        share.share_pct = percentage(share.weight, total, 1);
    }
    shares.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    shares
}

/// Render the top-20 share panel: segmented bar plus legend.
pub fn render_top_share(frame: &mut Frame, area: Rect, top: &[FilmRow], theme: &Theme) {
    let shares = genre_shares(top);
    let total_weight: f64 = shares.iter().map(|s| s.weight).sum();

    let mut lines: Vec<Line> = Vec::with_capacity(shares.len() + 4);
    lines.push(Line::from(""));

    // Segmented proportion bar. Each genre gets a block run proportional to
    // its weight; rounding may leave a column or two unfilled at the end.
    let mut bar_spans: Vec<Span> = Vec::with_capacity(shares.len());
    for (idx, share) in shares.iter().enumerate() {
        let cols = if total_weight > 0.0 {
            ((share.weight / total_weight) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        bar_spans.push(Span::styled("█".repeat(cols), theme.series_style(idx)));
    }
    lines.push(Line::from(bar_spans));
    lines.push(Line::from(""));

    for (idx, share) in shares.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("■ ", theme.series_style(idx)),
            Span::styled(format!("{:<24}", share.genre), theme.text),
            Span::styled(format!("{:>5.1}%", share.share_pct), theme.value),
            Span::styled(
                format!("  ({} films)", share.films),
                theme.dim,
            ),
        ]));
    }

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Top 20 Score Distribution by Genre "),
    );
    frame.render_widget(paragraph, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
