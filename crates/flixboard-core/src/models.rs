use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel rating substituted for films with no catalog match ("unrated").
pub const UNRATED: &str = "U";

/// A Netflix Original film as loaded from the originals dataset.
///
/// `title` is the join key against the catalog; `date` (the premiere date)
/// is the join key against the stock table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalFilm {
    /// Film title, join key against the catalog.
    pub title: String,
    /// Premiere date, join key against the stock table.
    pub date: NaiveDate,
    /// Genre label as it appears in the source data.
    pub genre: String,
    /// IMDB score on the 0–10 scale.
    pub imdb_score: f64,
    /// Runtime in minutes.
    pub runtime_minutes: u32,
    /// Primary language of the film.
    pub language: String,
}

/// A catalog entry carrying the content rating for a title.
///
/// Only the projected columns are kept; the rest of the catalog row is
/// dropped at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    /// Content rating string, e.g. `"TV-14"`, `"PG"`, `"U"`.
    pub rating: String,
}

/// One day of Netflix stock prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Trade date, join key against the originals.
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// An original film left-joined to its catalog rating and stock quote.
///
/// Either side of the join may be missing: a film with no catalog match has
/// `rating: None` (later filled with [`UNRATED`]), and a film premiering on
/// a day without stock data (weekends, holidays) has `quote: None` (later
/// dropped). Built once per run and consumed immediately by the cleaner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub film: OriginalFilm,
    /// Content rating from the catalog, if the title matched.
    pub rating: Option<String>,
    /// Stock quote for the premiere date, if one was recorded.
    pub quote: Option<StockQuote>,
}

/// A fully cleaned row: every field present, nothing optional.
///
/// This is the record type all aggregation and rendering works on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRow {
    pub title: String,
    pub date: NaiveDate,
    pub genre: String,
    pub imdb_score: f64,
    /// Catalog rating or the [`UNRATED`] sentinel, never missing.
    pub rating: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl FilmRow {
    /// Daily price spread: `open − close`.
    ///
    /// Positive when the stock closed below its open on the premiere day.
    pub fn price_spread(&self) -> f64 {
        self.open - self.close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_row(open: f64, close: f64) -> FilmRow {
        FilmRow {
            title: "Title A".to_string(),
            date: date(2020, 1, 1),
            genre: "Documentary".to_string(),
            imdb_score: 8.0,
            rating: UNRATED.to_string(),
            open,
            high: open.max(close) + 1.0,
            low: open.min(close) - 1.0,
            close,
            volume: 1_000,
        }
    }

    // ── price_spread ─────────────────────────────────────────────────────────

    #[test]
    fn test_price_spread_negative_when_close_above_open() {
        let row = make_row(10.0, 12.0);
        assert!((row.price_spread() - (-2.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_price_spread_positive_when_close_below_open() {
        let row = make_row(500.5, 498.0);
        assert!((row.price_spread() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_price_spread_zero_on_flat_day() {
        let row = make_row(300.0, 300.0);
        assert_eq!(row.price_spread(), 0.0);
    }

    // ── serde ────────────────────────────────────────────────────────────────

    #[test]
    fn test_film_row_serde_round_trip() {
        let row = make_row(10.0, 12.0);
        let json = serde_json::to_string(&row).unwrap();
        let back: FilmRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_merged_record_serde_with_missing_sides() {
        let record = MergedRecord {
            film: OriginalFilm {
                title: "Title A".to_string(),
                date: date(2020, 1, 1),
                genre: "Documentary".to_string(),
                imdb_score: 8.0,
                runtime_minutes: 90,
                language: "English".to_string(),
            },
            rating: None,
            quote: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: MergedRecord = serde_json::from_str(&json).unwrap();
        assert!(back.rating.is_none());
        assert!(back.quote.is_none());
    }
}
