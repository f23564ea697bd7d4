//! Daily price spread (`open − close`) over time, as a line chart.

use ratatui::{
    layout::Rect,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use flixboard_core::formatting::format_signed;
use flixboard_core::models::FilmRow;

use crate::panels::{date_x, padded_bounds};
use crate::themes::Theme;

/// Render the spread-over-time line chart.
///
/// `rows` must already be sorted by date (the cleaner guarantees this).
pub fn render_spread_line(frame: &mut Frame, area: Rect, rows: &[FilmRow], theme: &Theme) {
    let points: Vec<(f64, f64)> = rows
        .iter()
        .map(|row| (date_x(row.date), row.price_spread()))
        .collect();

    let x_bounds = padded_bounds(points.iter().map(|&(x, _)| x));
    let y_bounds = padded_bounds(points.iter().map(|&(_, y)| y));

    let x_labels = date_labels(rows);
    let y_mid = (y_bounds[0] + y_bounds[1]) / 2.0;
    let y_labels = vec![
        Span::raw(format_signed(y_bounds[0], 1)),
        Span::raw(format_signed(y_mid, 1)),
        Span::raw(format_signed(y_bounds[1], 1)),
    ];

    let datasets = vec![Dataset::default()
        .name("open - close")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.line_primary)
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Daily Price Spread on Premiere Days "),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("Premiere", theme.dim))
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

/// First / middle / last premiere dates as x-axis tick labels.
pub(crate) fn date_labels(rows: &[FilmRow]) -> Vec<Span<'static>> {
    if rows.is_empty() {
        return vec![Span::raw("")];
    }
    let first = rows[0].date;
    let mid = rows[rows.len() / 2].date;
    let last = rows[rows.len() - 1].date;
    vec![
        Span::raw(first.format("%Y-%m").to_string()),
        Span::raw(mid.format("%Y-%m").to_string()),
        Span::raw(last.format("%Y-%m").to_string()),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(d: NaiveDate, open: f64, close: f64) -> FilmRow {
        FilmRow {
            title: "T".to_string(),
            date: d,
            genre: "Drama".to_string(),
            imdb_score: 7.0,
            rating: "U".to_string(),
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume: 1,
        }
    }

    fn rows() -> Vec<FilmRow> {
        vec![
            row(NaiveDate::from_ymd_opt(2019, 1, 2).unwrap(), 10.0, 12.0),
            row(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(), 400.0, 390.0),
            row(NaiveDate::from_ymd_opt(2021, 3, 5).unwrap(), 500.0, 505.0),
        ]
    }

    #[test]
    fn test_render_spread_line_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let data = rows();

        terminal
            .draw(|frame| render_spread_line(frame, frame.area(), &data, &theme))
            .unwrap();
    }

    #[test]
    fn test_render_spread_line_empty_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();

        terminal
            .draw(|frame| render_spread_line(frame, frame.area(), &[], &theme))
            .unwrap();
    }

    #[test]
    fn test_render_spread_line_single_point_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let data = vec![row(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), 10.0, 10.0)];

        terminal
            .draw(|frame| render_spread_line(frame, frame.area(), &data, &theme))
            .unwrap();
    }

    #[test]
    fn test_date_labels_first_mid_last() {
        let data = rows();
        let labels = date_labels(&data);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].content.as_ref(), "2019-01");
        assert_eq!(labels[2].content.as_ref(), "2021-03");
    }
}
