//! Missing-value handling for the merged table.
//!
//! Applied in a fixed order: sort by date, fill missing ratings with the
//! `"U"` sentinel, then drop every row still missing its stock quote. The
//! policy is deliberately not configurable.

use flixboard_core::models::{FilmRow, MergedRecord, UNRATED};
use tracing::debug;

/// Clean the merged records into fully-populated [`FilmRow`]s.
///
/// 1. Sort all rows by date ascending (stable: equal dates keep their
///    original order).
/// 2. Fill missing ratings with [`UNRATED`].
/// 3. Drop every row without stock data.
///
/// An empty result is possible when no premiere fell on a trading day; the
/// caller decides how to present that.
pub fn clean(mut merged: Vec<MergedRecord>) -> Vec<FilmRow> {
    let before = merged.len();

    merged.sort_by_key(|record| record.film.date);

    let rows: Vec<FilmRow> = merged
        .into_iter()
        .filter_map(|record| {
            let rating = record.rating.unwrap_or_else(|| UNRATED.to_string());
            let quote = record.quote?;
            let film = record.film;
            Some(FilmRow {
                title: film.title,
                date: film.date,
                genre: film.genre,
                imdb_score: film.imdb_score,
                rating,
                open: quote.open,
                high: quote.high,
                low: quote.low,
                close: quote.close,
                volume: quote.volume,
            })
        })
        .collect();

    debug!("Cleaned {} merged rows down to {}", before, rows.len());
    rows
}

// ── Tests ─────────────────────────────────────────────────────────────────────
