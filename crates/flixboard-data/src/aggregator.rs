//! Derived datasets computed from the cleaned rows.
//!
//! Everything the chart panels consume is produced here: genre counts, the
//! top-N-by-score subset, the distinct rating labels, and the quarterly
//! median trend.

use std::collections::BTreeMap;

use flixboard_core::models::FilmRow;
use flixboard_core::quarters::Quarter;
use flixboard_core::stats;

// ── QuarterStats ──────────────────────────────────────────────────────────────

/// Summary statistics for one calendar quarter.
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterStats {
    pub quarter: Quarter,
    /// Number of films premiering in this quarter.
    pub films: u32,
    /// Median IMDB score of the quarter's premieres.
    pub median_score: f64,
    /// Median closing price across the quarter's premiere days.
    pub median_close: f64,
    /// Change of `median_close` versus the previous quarter, in percent.
    /// `None` for the first quarter or when the previous median was zero.
    pub close_pct_change: Option<f64>,
}

// ── FilmAggregator ────────────────────────────────────────────────────────────

/// Stateless helper that derives the presentation datasets.
pub struct FilmAggregator;

impl FilmAggregator {
    /// Films per genre, sorted by genre name.
    pub fn genre_counts(rows: &[FilmRow]) -> Vec<(String, u64)> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for row in rows {
            *counts.entry(row.genre.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(genre, count)| (genre.to_string(), count))
            .collect()
    }

    /// The top `n` rows by IMDB score, descending.
    ///
    /// Ties keep their input order (stable sort); fewer than `n` rows
    /// returns all of them.
    pub fn top_by_score(rows: &[FilmRow], n: usize) -> Vec<FilmRow> {
        let mut sorted = rows.to_vec();
        sorted.sort_by(|a, b| {
            b.imdb_score
                .partial_cmp(&a.imdb_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted.truncate(n);
        sorted
    }

    /// Distinct rating labels in first-seen order, for the rating selector.
    pub fn rating_labels(rows: &[FilmRow]) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for row in rows {
            if !labels.iter().any(|l| l == &row.rating) {
                labels.push(row.rating.clone());
            }
        }
        labels
    }

    /// Group rows into calendar quarters and compute the per-quarter medians
    /// plus the quarter-over-quarter change of the median close.
    ///
    /// Returns quarters in chronological order.
    pub fn aggregate_quarterly(rows: &[FilmRow]) -> Vec<QuarterStats> {
        // BTreeMap keys keep the quarters chronologically sorted.
        let mut samples: BTreeMap<Quarter, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
        for row in rows {
            let entry = samples
                .entry(Quarter::from_date(row.date))
                .or_insert_with(|| (Vec::new(), Vec::new()));
            entry.0.push(row.imdb_score);
            entry.1.push(row.close);
        }

        let mut result: Vec<QuarterStats> = Vec::with_capacity(samples.len());
        let mut previous_close: Option<f64> = None;
        for (quarter, (scores, closes)) in samples {
            let median_close = stats::median(&closes);
            let close_pct_change =
                previous_close.and_then(|prev| stats::pct_change(prev, median_close));
            result.push(QuarterStats {
                quarter,
                films: scores.len() as u32,
                median_score: stats::median(&scores),
                median_close,
                close_pct_change,
            });
            previous_close = Some(median_close);
        }
        result
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
