//! Table views: the merged-data table and the quarterly aggregate table.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per film (or
//! quarter) plus a highlighted summary row at the bottom.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use flixboard_core::formatting;
use flixboard_core::models::FilmRow;
use flixboard_core::stats;
use flixboard_data::aggregator::QuarterStats;

use crate::themes::Theme;

/// Render the merged-data table into `area`.
///
/// One row per film, followed by a summary row carrying the film count and
/// the median score / median close across the table.
pub fn render_film_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[FilmRow],
    theme: &Theme,
) {
    let header_cells = [
        "Title", "Date", "Genre", "Score", "Rating", "Open", "Close", "Spread",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            let spread = row.price_spread();
            Row::new(vec![
                Cell::from(row.title.clone()),
                Cell::from(row.date.format("%Y-%m-%d").to_string()),
                Cell::from(row.genre.clone()),
                Cell::from(formatting::format_score(row.imdb_score)),
                Cell::from(row.rating.clone()),
                Cell::from(formatting::format_currency(row.open)),
                Cell::from(formatting::format_currency(row.close)),
                Cell::from(formatting::format_signed(spread, 2)).style(theme.signed_style(spread)),
            ])
            .style(style)
        })
        .collect();

    // Summary row – styled separately to stand out.
    let scores: Vec<f64> = rows.iter().map(|r| r.imdb_score).collect();
    let closes: Vec<f64> = rows.iter().map(|r| r.close).collect();
    let summary_row = Row::new(vec![
        Cell::from("SUMMARY"),
        Cell::from(""),
        Cell::from(format!("{} films", rows.len())),
        Cell::from(formatting::format_score(stats::median(&scores))),
        Cell::from(""),
        Cell::from(""),
        Cell::from(formatting::format_currency(stats::median(&closes))),
        Cell::from(""),
    ])
    .style(theme.table_total);

    let mut all_rows = data_rows;
    all_rows.push(summary_row);

    let widths = [
        Constraint::Min(24),
        Constraint::Length(10),
        Constraint::Length(22),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render the quarterly aggregate table into `area`.
pub fn render_quarter_table(
    frame: &mut Frame,
    area: Rect,
    quarters: &[QuarterStats],
    theme: &Theme,
) {
    let header_cells = ["Quarter", "Films", "Median Score", "Median Close", "Close %"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = quarters
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            let change_cell = match q.close_pct_change {
                Some(pct) => Cell::from(format!("{}%", formatting::format_signed(pct, 1)))
                    .style(theme.signed_style(pct)),
                None => Cell::from("-"),
            };
            Row::new(vec![
                Cell::from(q.quarter.label()),
                Cell::from(q.films.to_string()),
                Cell::from(formatting::format_score(q.median_score)),
                Cell::from(formatting::format_currency(q.median_close)),
                change_cell,
            ])
            .style(style)
        })
        .collect();

    let total_films: u32 = quarters.iter().map(|q| q.films).sum();
    let total_row = Row::new(vec![
        Cell::from("TOTAL"),
        Cell::from(total_films.to_string()),
        Cell::from(""),
        Cell::from(""),
        Cell::from(format!("{} quarters", quarters.len())),
    ])
    .style(theme.table_total);

    let mut all_rows = data_rows;
    all_rows.push(total_row);

    let widths = [
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(13),
        Constraint::Length(14),
        Constraint::Length(13),
    ];

    let table = Table::new(all_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quarterly Medians "),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render a "no data" placeholder when cleaning left nothing to show.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No films survived the merge", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Every premiere fell on a day without stock data.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" flixboard "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
