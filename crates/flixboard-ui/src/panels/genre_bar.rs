//! Film count per genre as a bar chart.

use ratatui::{
    layout::Rect,
    widgets::{BarChart, Block, Borders},
    Frame,
};

use crate::panels::truncate_to_width;
use crate::themes::Theme;

const BAR_WIDTH: u16 = 12;
const BAR_GAP: u16 = 1;

/// Render the genre distribution bar chart.
///
/// Bars are sorted by film count descending; when the terminal is too narrow
/// for every genre, the title notes how many are shown.
pub fn render_genre_bar(frame: &mut Frame, area: Rect, counts: &[(String, u64)], theme: &Theme) {
    let mut sorted: Vec<(&str, u64)> = counts
        .iter()
        .map(|(genre, count)| (genre.as_str(), *count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let max_bars = ((area.width.saturating_sub(2) / (BAR_WIDTH + BAR_GAP)) as usize).max(1);
    let shown = sorted.len().min(max_bars);

    let labels: Vec<String> = sorted[..shown]
        .iter()
        .map(|(genre, _)| truncate_to_width(genre, BAR_WIDTH as usize))
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(sorted[..shown].iter())
        .map(|(label, (_, count))| (label.as_str(), *count))
        .collect();

    let title = if shown < sorted.len() {
        format!(" Films per Genre (top {} of {}) ", shown, sorted.len())
    } else {
        " Films per Genre ".to_string()
    };

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(data.as_slice())
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(theme.line_primary)
        .value_style(theme.value)
        .label_style(theme.axis);

    frame.render_widget(chart, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
