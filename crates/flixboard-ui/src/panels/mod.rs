//! Chart panels of the dashboard, one module per chart.

pub mod genre_bar;
pub mod quarterly;
pub mod rating_scatter;
pub mod score_scatter;
pub mod spread_line;
pub mod top_rated;
pub mod top_share;

use chrono::{Datelike, NaiveDate};
use unicode_width::UnicodeWidthChar;

// ── Panel ─────────────────────────────────────────────────────────────────────

/// The dashboard screens, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Overview,
    Genres,
    SpreadLine,
    ScoreScatter,
    TopShare,
    TopRated,
    RatingScatter,
    Quarterly,
    Takeaways,
}

impl Panel {
    /// All panels in display order.
    pub const ALL: [Panel; 9] = [
        Panel::Overview,
        Panel::Genres,
        Panel::SpreadLine,
        Panel::ScoreScatter,
        Panel::TopShare,
        Panel::TopRated,
        Panel::RatingScatter,
        Panel::Quarterly,
        Panel::Takeaways,
    ];

    /// Human-readable title shown in the header.
    pub fn title(self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Genres => "Genres",
            Panel::SpreadLine => "Price Spread",
            Panel::ScoreScatter => "Score vs Spread",
            Panel::TopShare => "Top 20 Share",
            Panel::TopRated => "Top 20",
            Panel::RatingScatter => "Scores by Rating",
            Panel::Quarterly => "Quarterly Trend",
            Panel::Takeaways => "Takeaways",
        }
    }

    /// Zero-based position within [`Panel::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// The panel after this one, wrapping around.
    pub fn next(self) -> Panel {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The panel before this one, wrapping around.
    pub fn prev(self) -> Panel {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Map a digit key (`'1'`–`'9'`) to a panel.
    pub fn from_digit(c: char) -> Option<Panel> {
        let idx = c.to_digit(10)? as usize;
        if idx == 0 {
            return None;
        }
        Self::ALL.get(idx - 1).copied()
    }
}

// ── Shared chart helpers ──────────────────────────────────────────────────────

/// Numeric x position for a calendar date (days since the common era).
pub(crate) fn date_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Min/max bounds of `values` with 5 % padding on both sides.
///
/// Degenerate inputs (empty, or all values equal) get a unit of padding so
/// the chart axes never collapse to a zero-height range.
pub(crate) fn padded_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let range = max - min;
    let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
    [min - pad, max + pad]
}

/// Truncate `s` to at most `width` display columns, appending `…` when cut.
pub(crate) fn truncate_to_width(s: &str, width: usize) -> String {
    let mut used = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            // Room was reserved for the ellipsis.
            if out.chars().count() < s.chars().count() {
                out.push('…');
            }
            return out;
        }
        used += w;
        out.push(ch);
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Panel navigation ─────────────────────────────────────────────────────

    #[test]
    fn test_panel_next_cycles_through_all() {
        let mut panel = Panel::Overview;
        for _ in 0..Panel::ALL.len() {
            panel = panel.next();
        }
        assert_eq!(panel, Panel::Overview);
    }

    #[test]
    fn test_panel_prev_is_inverse_of_next() {
        for panel in Panel::ALL {
            assert_eq!(panel.next().prev(), panel);
        }
    }

    #[test]
    fn test_panel_from_digit() {
        assert_eq!(Panel::from_digit('1'), Some(Panel::Overview));
        assert_eq!(Panel::from_digit('9'), Some(Panel::Takeaways));
        assert_eq!(Panel::from_digit('0'), None);
        assert_eq!(Panel::from_digit('x'), None);
    }

    #[test]
    fn test_panel_titles_unique() {
        let titles: std::collections::HashSet<&str> =
            Panel::ALL.iter().map(|p| p.title()).collect();
        assert_eq!(titles.len(), Panel::ALL.len());
    }

    // ── padded_bounds ────────────────────────────────────────────────────────

    #[test]
    fn test_padded_bounds_spreads_range() {
        let [lo, hi] = padded_bounds([0.0, 100.0].into_iter());
        assert!(lo < 0.0);
        assert!(hi > 100.0);
    }

    #[test]
    fn test_padded_bounds_degenerate_single_value() {
        let [lo, hi] = padded_bounds(std::iter::once(5.0));
        assert!(lo < 5.0 && hi > 5.0);
    }

    #[test]
    fn test_padded_bounds_empty() {
        assert_eq!(padded_bounds(std::iter::empty()), [0.0, 1.0]);
    }

    // ── truncate_to_width ────────────────────────────────────────────────────

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("Drama", 10), "Drama");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        let out = truncate_to_width("A Very Long Documentary Title", 10);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= 10);
    }

    // ── date_x ───────────────────────────────────────────────────────────────

    #[test]
    fn test_date_x_monotonic() {
        let d1 = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        assert!(date_x(d2) > date_x(d1));
        assert!((date_x(d2) - date_x(d1) - 1.0).abs() < f64::EPSILON);
    }
}
