//! IMDB score over time, coloured by content rating, with a selector.
//!
//! The selector plays the role of a per-rating dropdown: `None` shows every
//! rating as its own series, a concrete rating narrows the plot to that
//! group.

use ratatui::{
    layout::Rect,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use flixboard_core::formatting::format_score;
use flixboard_core::models::FilmRow;

use crate::panels::{date_x, padded_bounds, spread_line::date_labels};
use crate::themes::Theme;

/// Render the scores-by-rating scatter plot.
///
/// `labels` carries the distinct ratings in display order; `selected`
/// narrows the plot to one rating (`None` = all).
pub fn render_rating_scatter(
    frame: &mut Frame,
    area: Rect,
    rows: &[FilmRow],
    labels: &[String],
    selected: Option<&str>,
    theme: &Theme,
) {
    // One point set per visible rating, in label order so colours are stable
    // across selections.
    let series: Vec<(usize, &String, Vec<(f64, f64)>)> = labels
        .iter()
        .enumerate()
        .filter(|(_, label)| selected.is_none() || selected == Some(label.as_str()))
        .map(|(idx, label)| {
            let points: Vec<(f64, f64)> = rows
                .iter()
                .filter(|row| &row.rating == label)
                .map(|row| (date_x(row.date), row.imdb_score))
                .collect();
            (idx, label, points)
        })
        .collect();

    let x_bounds = padded_bounds(rows.iter().map(|r| date_x(r.date)));
    let y_bounds = padded_bounds(rows.iter().map(|r| r.imdb_score));

    let x_labels = date_labels(rows);
    let y_mid = (y_bounds[0] + y_bounds[1]) / 2.0;
    let y_labels = vec![
        Span::raw(format_score(y_bounds[0])),
        Span::raw(format_score(y_mid)),
        Span::raw(format_score(y_bounds[1])),
    ];

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(idx, label, points)| {
            Dataset::default()
                .name((*label).clone())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(theme.series_style(*idx))
                .data(points)
        })
        .collect();

    let title = format!(
        " IMDB Scores by Content Rating [{}]  (r cycles) ",
        selected.unwrap_or("All")
    );

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title(Span::styled("Premiere", theme.dim))
                .style(theme.axis)
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("IMDB Score", theme.dim))
                .style(theme.axis)
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(d: NaiveDate, rating: &str, score: f64) -> FilmRow {
        FilmRow {
            title: "T".to_string(),
            date: d,
            genre: "Drama".to_string(),
            imdb_score: score,
            rating: rating.to_string(),
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
            volume: 1,
        }
    }

    fn rows() -> Vec<FilmRow> {
        vec![
            row(NaiveDate::from_ymd_opt(2019, 1, 2).unwrap(), "TV-14", 7.0),
            row(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(), "TV-MA", 6.0),
            row(NaiveDate::from_ymd_opt(2021, 3, 5).unwrap(), "U", 8.0),
        ]
    }

    fn labels() -> Vec<String> {
        vec!["TV-14".to_string(), "TV-MA".to_string(), "U".to_string()]
    }

    #[test]
    fn test_render_rating_scatter_all_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let (data, labels) = (rows(), labels());

        terminal
            .draw(|frame| {
                render_rating_scatter(frame, frame.area(), &data, &labels, None, &theme)
            })
            .unwrap();
    }

    #[test]
    fn test_render_rating_scatter_selected_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let (data, labels) = (rows(), labels());

        terminal
            .draw(|frame| {
                render_rating_scatter(frame, frame.area(), &data, &labels, Some("TV-MA"), &theme)
            })
            .unwrap();
    }

    #[test]
    fn test_render_rating_scatter_empty_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();

        terminal
            .draw(|frame| render_rating_scatter(frame, frame.area(), &[], &[], None, &theme))
            .unwrap();
    }
}
