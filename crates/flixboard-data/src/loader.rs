//! CSV loading for the three source datasets.
//!
//! The originals file ships in Windows-1252; it is decoded before parsing so
//! that accented titles survive intact (a wrong decode would not fail, it
//! would silently stop titles from matching the catalog). Column names are
//! normalised to the shared join keys at the deserialization boundary via
//! serde renames. Rows that fail to parse are skipped with a debug log; a
//! missing or unreadable file is a hard error.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use encoding_rs::Encoding;
use flixboard_core::error::{FlixError, Result};
use flixboard_core::models::{CatalogEntry, OriginalFilm, StockQuote};
use serde::Deserialize;
use tracing::{debug, warn};

// ── Date parsing ──────────────────────────────────────────────────────────────

/// Date formats seen across the three datasets.
///
/// The originals file spells premieres out (`"August 5, 2019"`); the stock
/// file uses ISO dates; the remaining patterns cover re-exports of the same
/// datasets found in the wild.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y", "%d-%b-%y"];

/// Attempt to parse a date string against each recognised format in turn.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    None
}

// ── Raw row shapes ────────────────────────────────────────────────────────────

/// Raw originals row. The `Title` → `title` and `Premiere` → date renames
/// happen here so the join keys line up across tables.
#[derive(Debug, Deserialize)]
struct OriginalsRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "Premiere")]
    premiere: String,
    #[serde(rename = "Runtime")]
    runtime: u32,
    #[serde(rename = "IMDB Score")]
    imdb_score: f64,
    #[serde(rename = "Language")]
    language: String,
}

/// Raw catalog row; only the projected columns are declared, the rest of the
/// catalog's columns are ignored by the CSV deserializer.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    title: String,
    #[serde(default)]
    rating: String,
}

#[derive(Debug, Deserialize)]
struct StockRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Volume")]
    volume: u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the Netflix Originals dataset, decoding Windows-1252.
pub fn load_originals(path: &Path) -> Result<Vec<OriginalFilm>> {
    let text = read_decoded(path, encoding_rs::WINDOWS_1252)?;
    let mut rdr = csv_reader(&text);
    verify_columns(
        path,
        rdr.headers()?,
        &["Title", "Genre", "Premiere", "Runtime", "IMDB Score", "Language"],
    )?;

    let mut films = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.deserialize() {
        let row: OriginalsRow = match result {
            Ok(r) => r,
            Err(e) => {
                debug!("Skipping originals row in {}: {}", path.display(), e);
                skipped += 1;
                continue;
            }
        };
        let Some(date) = parse_date(&row.premiere) else {
            debug!(
                "Skipping originals row \"{}\": unparseable premiere \"{}\"",
                row.title, row.premiere
            );
            skipped += 1;
            continue;
        };
        films.push(OriginalFilm {
            title: row.title,
            date,
            genre: row.genre,
            imdb_score: row.imdb_score,
            runtime_minutes: row.runtime,
            language: row.language,
        });
    }

    log_load(path, "originals", films.len(), skipped);
    Ok(films)
}

/// Load the general catalog, projecting title and rating only.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let text = read_decoded(path, encoding_rs::UTF_8)?;
    let mut rdr = csv_reader(&text);
    verify_columns(path, rdr.headers()?, &["title", "rating"])?;

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.deserialize() {
        let row: CatalogRow = match result {
            Ok(r) => r,
            Err(e) => {
                debug!("Skipping catalog row in {}: {}", path.display(), e);
                skipped += 1;
                continue;
            }
        };
        // An empty rating cell carries no information for the join.
        if row.rating.is_empty() {
            skipped += 1;
            continue;
        }
        entries.push(CatalogEntry {
            title: row.title,
            rating: row.rating,
        });
    }

    log_load(path, "catalog", entries.len(), skipped);
    Ok(entries)
}

/// Load the daily stock prices.
pub fn load_stock(path: &Path) -> Result<Vec<StockQuote>> {
    let text = read_decoded(path, encoding_rs::UTF_8)?;
    let mut rdr = csv_reader(&text);
    verify_columns(path, rdr.headers()?, &["Date", "Open", "High", "Low", "Close", "Volume"])?;

    let mut quotes = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.deserialize() {
        let row: StockRow = match result {
            Ok(r) => r,
            Err(e) => {
                debug!("Skipping stock row in {}: {}", path.display(), e);
                skipped += 1;
                continue;
            }
        };
        let Some(date) = parse_date(&row.date) else {
            debug!("Skipping stock row: unparseable date \"{}\"", row.date);
            skipped += 1;
            continue;
        };
        quotes.push(StockQuote {
            date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        });
    }

    log_load(path, "stock", quotes.len(), skipped);
    Ok(quotes)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Read a file's bytes and decode them with the given encoding.
///
/// Decoding is lossy and never fails on byte content; for Windows-1252 every
/// byte maps to some character, so a wrongly-encoded file degrades join-match
/// rates downstream rather than raising an error.
fn read_decoded(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| FlixError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let (text, _, _) = encoding.decode(&bytes);
    Ok(text.into_owned())
}

fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
}

/// Ensure every required column is present in the header row.
fn verify_columns(path: &Path, headers: &csv::StringRecord, required: &[&str]) -> Result<()> {
    let have: HashSet<&str> = headers.iter().collect();
    for column in required {
        if !have.contains(column) {
            return Err(FlixError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn log_load(path: &Path, label: &str, kept: usize, skipped: usize) {
    if skipped > 0 {
        warn!(
            "{}: loaded {} {} rows, skipped {}",
            path.display(),
            kept,
            label,
            skipped
        );
    } else {
        debug!("{}: loaded {} {} rows", path.display(), kept, label);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
