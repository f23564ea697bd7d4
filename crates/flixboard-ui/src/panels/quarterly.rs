//! Median IMDB score per calendar quarter, as a trend line.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use flixboard_core::formatting::{format_currency, format_score, format_signed};
use flixboard_data::aggregator::QuarterStats;

use crate::panels::padded_bounds;
use crate::themes::Theme;

/// Render the quarterly median-score trend with a one-line stock footer.
pub fn render_quarterly(frame: &mut Frame, area: Rect, quarters: &[QuarterStats], theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    render_trend_chart(frame, chunks[0], quarters, theme);
    render_footer(frame, chunks[1], quarters, theme);
}

fn render_trend_chart(frame: &mut Frame, area: Rect, quarters: &[QuarterStats], theme: &Theme) {
    let points: Vec<(f64, f64)> = quarters
        .iter()
        .enumerate()
        .map(|(i, q)| (i as f64, q.median_score))
        .collect();

    let x_bounds = padded_bounds(points.iter().map(|&(x, _)| x));
    let y_bounds = padded_bounds(points.iter().map(|&(_, y)| y));

    let x_labels = quarter_labels(quarters);
    let y_mid = (y_bounds[0] + y_bounds[1]) / 2.0;
    let y_labels = vec![
        Span::raw(format_score(y_bounds[0])),
        Span::raw(format_score(y_mid)),
        Span::raw(format_score(y_bounds[1])),
    ];

    let datasets = vec![Dataset::default()
        .name("median score")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.line_primary)
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Median IMDB Score per Quarter "),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("Quarter", theme.dim))
                .style(theme.axis)
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Median Score", theme.dim))
                .style(theme.axis)
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// One line summarising the latest quarter's stock side of the aggregation.
fn render_footer(frame: &mut Frame, area: Rect, quarters: &[QuarterStats], theme: &Theme) {
    let Some(latest) = quarters.last() else {
        return;
    };

    let mut spans = vec![
        Span::styled(format!(" {}: ", latest.quarter.label()), theme.label),
        Span::styled(format!("{} films", latest.films), theme.value),
        Span::styled(", median close ", theme.label),
        Span::styled(format_currency(latest.median_close), theme.value),
    ];
    if let Some(pct) = latest.close_pct_change {
        spans.push(Span::styled(" (", theme.label));
        spans.push(Span::styled(
            format!("{}%", format_signed(pct, 1)),
            theme.signed_style(pct),
        ));
        spans.push(Span::styled(" vs previous quarter)", theme.label));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// First / middle / last quarter labels for the x-axis.
fn quarter_labels(quarters: &[QuarterStats]) -> Vec<Span<'static>> {
    if quarters.is_empty() {
        return vec![Span::raw("")];
    }
    let first = quarters[0].quarter.label();
    let mid = quarters[quarters.len() / 2].quarter.label();
    let last = quarters[quarters.len() - 1].quarter.label();
    vec![Span::raw(first), Span::raw(mid), Span::raw(last)]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
