//! Left-outer joins across the three datasets.
//!
//! Originals ⋈ catalog on title (projecting the rating), then ⋈ stock on
//! date (projecting all price fields). Every originals row is retained;
//! unmatched sides become `None` for the cleaner to resolve. Right-hand
//! tables are indexed first so duplicate keys can never fan rows out: the
//! first occurrence wins and duplicates are logged.

use std::collections::HashMap;

use chrono::NaiveDate;
use flixboard_core::models::{CatalogEntry, MergedRecord, OriginalFilm, StockQuote};
use tracing::{debug, warn};

/// Merge the originals with catalog ratings and stock quotes.
///
/// Preserves the order of `originals`; the joins only attach data.
pub fn merge(
    originals: Vec<OriginalFilm>,
    catalog: &[CatalogEntry],
    stock: &[StockQuote],
) -> Vec<MergedRecord> {
    let ratings = index_ratings(catalog);
    let quotes = index_quotes(stock);

    let merged: Vec<MergedRecord> = originals
        .into_iter()
        .map(|film| {
            let rating = ratings.get(film.title.as_str()).cloned();
            let quote = quotes.get(&film.date).cloned();
            MergedRecord { film, rating, quote }
        })
        .collect();

    debug!(
        "Merged {} originals against {} catalog titles and {} trading days",
        merged.len(),
        ratings.len(),
        quotes.len()
    );
    merged
}

// ── Right-hand indexes ────────────────────────────────────────────────────────

/// Index the catalog by title. First occurrence of a duplicate title wins.
fn index_ratings(catalog: &[CatalogEntry]) -> HashMap<&str, String> {
    let mut index: HashMap<&str, String> = HashMap::with_capacity(catalog.len());
    let mut duplicates = 0usize;
    for entry in catalog {
        if index.contains_key(entry.title.as_str()) {
            duplicates += 1;
            continue;
        }
        index.insert(entry.title.as_str(), entry.rating.clone());
    }
    if duplicates > 0 {
        warn!("Catalog contains {} duplicate titles; keeping first occurrence", duplicates);
    }
    index
}

/// Index the stock table by trade date. First occurrence of a duplicate
/// date wins.
fn index_quotes(stock: &[StockQuote]) -> HashMap<NaiveDate, StockQuote> {
    let mut index: HashMap<NaiveDate, StockQuote> = HashMap::with_capacity(stock.len());
    let mut duplicates = 0usize;
    for quote in stock {
        if index.contains_key(&quote.date) {
            duplicates += 1;
            continue;
        }
        index.insert(quote.date, quote.clone());
    }
    if duplicates > 0 {
        warn!("Stock table contains {} duplicate dates; keeping first occurrence", duplicates);
    }
    index
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn film(title: &str, d: NaiveDate) -> OriginalFilm {
        OriginalFilm {
            title: title.to_string(),
            date: d,
            genre: "Documentary".to_string(),
            imdb_score: 8.0,
            runtime_minutes: 90,
            language: "English".to_string(),
        }
    }

    fn catalog_entry(title: &str, rating: &str) -> CatalogEntry {
        CatalogEntry {
            title: title.to_string(),
            rating: rating.to_string(),
        }
    }

    fn quote(d: NaiveDate, open: f64, close: f64) -> StockQuote {
        StockQuote {
            date: d,
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn test_merge_attaches_both_sides() {
        let d = date(2020, 1, 1);
        let merged = merge(
            vec![film("Title A", d)],
            &[catalog_entry("Title A", "TV-14")],
            &[quote(d, 10.0, 12.0)],
        );

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].rating.as_deref(), Some("TV-14"));
        assert!((merged[0].quote.as_ref().unwrap().open - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge_unmatched_title_yields_missing_rating() {
        let d = date(2020, 1, 1);
        let merged = merge(
            vec![film("Title A", d)],
            &[catalog_entry("Some Other Title", "TV-14")],
            &[quote(d, 10.0, 12.0)],
        );

        assert!(merged[0].rating.is_none());
        assert!(merged[0].quote.is_some());
    }

    #[test]
    fn test_merge_unmatched_date_yields_missing_quote() {
        let merged = merge(
            vec![film("Title A", date(2020, 1, 4))], // a Saturday
            &[catalog_entry("Title A", "TV-14")],
            &[quote(date(2020, 1, 3), 10.0, 12.0)],
        );

        assert_eq!(merged[0].rating.as_deref(), Some("TV-14"));
        assert!(merged[0].quote.is_none());
    }

    #[test]
    fn test_merge_retains_every_original() {
        // Left-outer semantics: nothing on the right side matches at all.
        let films = vec![
            film("A", date(2020, 1, 1)),
            film("B", date(2020, 1, 2)),
            film("C", date(2020, 1, 3)),
        ];
        let merged = merge(films, &[], &[]);
        assert_eq!(merged.len(), 3);
        assert!(merged.iter().all(|r| r.rating.is_none() && r.quote.is_none()));
    }

    #[test]
    fn test_merge_preserves_input_order() {
        let films = vec![
            film("Later", date(2021, 6, 1)),
            film("Earlier", date(2019, 2, 1)),
        ];
        let merged = merge(films, &[], &[]);
        assert_eq!(merged[0].film.title, "Later");
        assert_eq!(merged[1].film.title, "Earlier");
    }

    #[test]
    fn test_merge_duplicate_catalog_title_does_not_fan_out() {
        let d = date(2020, 1, 1);
        let merged = merge(
            vec![film("Title A", d)],
            &[
                catalog_entry("Title A", "TV-14"),
                catalog_entry("Title A", "R"),
            ],
            &[],
        );

        // One input row, one output row, first rating wins.
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].rating.as_deref(), Some("TV-14"));
    }

    #[test]
    fn test_merge_duplicate_stock_date_does_not_fan_out() {
        let d = date(2020, 1, 1);
        let merged = merge(
            vec![film("Title A", d)],
            &[],
            &[quote(d, 10.0, 12.0), quote(d, 99.0, 99.0)],
        );

        assert_eq!(merged.len(), 1);
        assert!((merged[0].quote.as_ref().unwrap().open - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge_title_match_is_exact() {
        // A mis-decoded accent must not match; this is the silent failure
        // mode the Windows-1252 decode protects against.
        let d = date(2020, 1, 1);
        let merged = merge(
            vec![film("Café", d)],
            &[catalog_entry("CafÃ©", "TV-14")],
            &[],
        );
        assert!(merged[0].rating.is_none());
    }
}
