use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar quarter, ordered chronologically.
///
/// Used as the grouping key for the quarterly score trend, the analogue of a
/// period index with quarter frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quarter {
    pub year: i32,
    /// Quarter number, 1 through 4.
    pub quarter: u32,
}

impl Quarter {
    /// The quarter containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: (date.month0() / 3) + 1,
        }
    }

    /// First calendar day of the quarter, for plotting on a date axis.
    pub fn first_day(&self) -> NaiveDate {
        // Clamp so a hand-built out-of-range quarter cannot panic here.
        let month = (self.quarter.clamp(1, 4) - 1) * 3 + 1;
        NaiveDate::from_ymd_opt(self.year, month, 1).unwrap_or_default()
    }

    /// Compact label, e.g. `"2020Q1"`.
    pub fn label(&self) -> String {
        format!("{}Q{}", self.year, self.quarter)
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Q{}", self.year, self.quarter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_date_quarter_boundaries() {
        assert_eq!(Quarter::from_date(date(2020, 1, 1)).quarter, 1);
        assert_eq!(Quarter::from_date(date(2020, 3, 31)).quarter, 1);
        assert_eq!(Quarter::from_date(date(2020, 4, 1)).quarter, 2);
        assert_eq!(Quarter::from_date(date(2020, 6, 30)).quarter, 2);
        assert_eq!(Quarter::from_date(date(2020, 7, 1)).quarter, 3);
        assert_eq!(Quarter::from_date(date(2020, 10, 1)).quarter, 4);
        assert_eq!(Quarter::from_date(date(2020, 12, 31)).quarter, 4);
    }

    #[test]
    fn test_from_date_carries_year() {
        let q = Quarter::from_date(date(2019, 8, 5));
        assert_eq!(q.year, 2019);
        assert_eq!(q.quarter, 3);
    }

    #[test]
    fn test_first_day() {
        let q = Quarter { year: 2020, quarter: 3 };
        assert_eq!(q.first_day(), date(2020, 7, 1));
    }

    #[test]
    fn test_label_format() {
        let q = Quarter { year: 2021, quarter: 2 };
        assert_eq!(q.label(), "2021Q2");
        assert_eq!(q.to_string(), "2021Q2");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let q4_2019 = Quarter { year: 2019, quarter: 4 };
        let q1_2020 = Quarter { year: 2020, quarter: 1 };
        let q2_2020 = Quarter { year: 2020, quarter: 2 };
        assert!(q4_2019 < q1_2020);
        assert!(q1_2020 < q2_2020);
    }
}
