//! Top-level pipeline: load, merge, clean, aggregate.
//!
//! Runs once per invocation and returns a [`Report`] the UI layer can render
//! without touching the filesystem again.

use chrono::Utc;
use flixboard_core::error::Result;
use flixboard_core::models::FilmRow;
use flixboard_core::settings::DataPaths;
use tracing::{info, warn};

use crate::aggregator::{FilmAggregator, QuarterStats};
use crate::cleaner::clean;
use crate::loader::{load_catalog, load_originals, load_stock};
use crate::merger::merge;

/// How many films the top-by-score panels show.
pub const TOP_RATED_COUNT: usize = 20;

// ── Public types ──────────────────────────────────────────────────────────────

/// Row counts and timings recorded while building a report.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReportMetadata {
    /// ISO-8601 timestamp when this report was generated.
    pub generated_at: String,
    /// Rows loaded from the originals file.
    pub originals_rows: usize,
    /// Rows loaded from the catalog file.
    pub catalog_rows: usize,
    /// Rows loaded from the stock file.
    pub stock_rows: usize,
    /// Rows after the merge (always equals `originals_rows`).
    pub merged_rows: usize,
    /// Rows removed by the cleaning step.
    pub dropped_rows: usize,
    /// Wall-clock seconds spent loading the CSV files.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent merging, cleaning and aggregating.
    pub transform_time_seconds: f64,
}

/// The complete output of [`build_report`].
#[derive(Debug, Clone)]
pub struct Report {
    /// Merged-and-cleaned rows, sorted by date ascending.
    pub rows: Vec<FilmRow>,
    /// Films per genre.
    pub genre_counts: Vec<(String, u64)>,
    /// Top films by IMDB score (at most [`TOP_RATED_COUNT`]).
    pub top_rated: Vec<FilmRow>,
    /// Distinct rating labels in first-seen order.
    pub rating_labels: Vec<String>,
    /// Quarterly median trend.
    pub quarterly: Vec<QuarterStats>,
    /// Row counts and timings.
    pub metadata: ReportMetadata,
}

impl Report {
    /// `true` when cleaning removed every row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full pipeline against the three source files.
///
/// 1. Load the originals (Windows-1252), catalog and stock CSVs.
/// 2. Left-join originals ⋈ catalog on title, then ⋈ stock on date.
/// 3. Sort by date, fill missing ratings with `"U"`, drop rows without
///    stock data.
/// 4. Derive the genre counts, top-20, rating labels and quarterly medians.
///
/// A missing or unreadable source file aborts the run; an empty cleaned
/// table does not (the UI shows its no-data placeholder instead).
pub fn build_report(paths: &DataPaths) -> Result<Report> {
    let load_start = std::time::Instant::now();
    let originals = load_originals(&paths.originals)?;
    let catalog = load_catalog(&paths.catalog)?;
    let stock = load_stock(&paths.stock)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let originals_rows = originals.len();
    let catalog_rows = catalog.len();
    let stock_rows = stock.len();

    let transform_start = std::time::Instant::now();
    let merged = merge(originals, &catalog, &stock);
    let merged_rows = merged.len();

    let rows = clean(merged);
    let dropped_rows = merged_rows - rows.len();

    let genre_counts = FilmAggregator::genre_counts(&rows);
    let top_rated = FilmAggregator::top_by_score(&rows, TOP_RATED_COUNT);
    let rating_labels = FilmAggregator::rating_labels(&rows);
    let quarterly = FilmAggregator::aggregate_quarterly(&rows);
    let transform_time = transform_start.elapsed().as_secs_f64();

    if rows.is_empty() && merged_rows > 0 {
        warn!("Cleaning dropped all {} merged rows; nothing to plot", merged_rows);
    }
    info!(
        "Report ready: {} films after cleaning ({} dropped), {} genres, {} quarters",
        rows.len(),
        dropped_rows,
        genre_counts.len(),
        quarterly.len()
    );

    let metadata = ReportMetadata {
        generated_at: Utc::now().to_rfc3339(),
        originals_rows,
        catalog_rows,
        stock_rows,
        merged_rows,
        dropped_rows,
        load_time_seconds: load_time,
        transform_time_seconds: transform_time,
    };

    Ok(Report {
        rows,
        genre_counts,
        top_rated,
        rating_labels,
        quarterly,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
