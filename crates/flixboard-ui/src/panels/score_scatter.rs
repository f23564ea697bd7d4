//! IMDB score against price spread, one coloured series per genre.

use std::collections::HashMap;

use ratatui::{
    layout::Rect,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use flixboard_core::formatting::{format_score, format_signed};
use flixboard_core::models::FilmRow;

use crate::panels::padded_bounds;
use crate::themes::{Theme, SERIES_COLORS};

/// Label for the residual series when there are more genres than colours.
const OTHER_LABEL: &str = "Other";

/// Render the score-vs-spread scatter plot.
///
/// The most frequent genres each get their own coloured series; anything
/// past the palette is lumped into a dimmed "Other" series.
pub fn render_score_scatter(frame: &mut Frame, area: Rect, rows: &[FilmRow], theme: &Theme) {
    let series = genre_series(rows);

    let x_bounds = padded_bounds(rows.iter().map(|r| r.imdb_score));
    let y_bounds = padded_bounds(rows.iter().map(|r| r.price_spread()));

    let x_mid = (x_bounds[0] + x_bounds[1]) / 2.0;
    let x_labels = vec![
        Span::raw(format_score(x_bounds[0])),
        Span::raw(format_score(x_mid)),
        Span::raw(format_score(x_bounds[1])),
    ];
    let y_mid = (y_bounds[0] + y_bounds[1]) / 2.0;
    let y_labels = vec![
        Span::raw(format_signed(y_bounds[0], 1)),
        Span::raw(format_signed(y_mid, 1)),
        Span::raw(format_signed(y_bounds[1], 1)),
    ];

    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(idx, (genre, points))| {
            let style = if genre == OTHER_LABEL {
                theme.dim
            } else {
                theme.series_style(idx)
            };
            Dataset::default()
                .name(genre.clone())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(style)
                .data(points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Price Spread by IMDB Score & Genre "),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("IMDB Score", theme.dim))
                .style(theme.axis)
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Spread ($)", theme.dim))
                .style(theme.axis)
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Group rows into per-genre point sets, most frequent genres first, with
/// everything past the palette size collected under [`OTHER_LABEL`].
fn genre_series(rows: &[FilmRow]) -> Vec<(String, Vec<(f64, f64)>)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        *counts.entry(row.genre.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    // Reserve one palette slot less so "Other" never displaces a real genre.
    let named = ranked.len().min(SERIES_COLORS - 1);
    let mut series: Vec<(String, Vec<(f64, f64)>)> = ranked[..named]
        .iter()
        .map(|(genre, _)| (genre.to_string(), Vec::new()))
        .collect();
    let mut other: Vec<(f64, f64)> = Vec::new();

    for row in rows {
        let point = (row.imdb_score, row.price_spread());
        match series.iter_mut().find(|(genre, _)| genre == &row.genre) {
            Some((_, points)) => points.push(point),
            None => other.push(point),
        }
    }
    if !other.is_empty() {
        series.push((OTHER_LABEL.to_string(), other));
    }
    series
}

// ── Tests ─────────────────────────────────────────────────────────────────────
