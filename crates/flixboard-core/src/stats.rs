// ── Percentile helper ─────────────────────────────────────────────────────────

/// Compute the `p`-th percentile of a **sorted** slice using standard linear
/// interpolation (the same algorithm used by NumPy's `percentile` function).
///
/// Returns `0.0` for an empty slice.
pub fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }
    let len = sorted_data.len();
    if len == 1 {
        return sorted_data[0];
    }
    let rank = (p / 100.0) * (len as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted_data[lo];
    }
    let frac = rank - lo as f64;
    sorted_data[lo] + frac * (sorted_data[hi] - sorted_data[lo])
}

/// Median of an unsorted sample (50th percentile, interpolated for even
/// sample sizes). Returns `0.0` for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    percentile(&sorted, 50.0)
}

/// Percentage change from `previous` to `current`.
///
/// Returns `None` when `previous` is zero (the change is undefined).
pub fn pct_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some(((current - previous) / previous) * 100.0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── percentile ───────────────────────────────────────────────────────────

    #[test]
    fn test_percentile_empty_returns_zero() {
        assert_eq!(percentile(&[], 50.0), 0.0);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[7.5], 90.0), 7.5);
    }

    #[test]
    fn test_percentile_exact_rank() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&data, 50.0), 3.0);
        assert_eq!(percentile(&data, 0.0), 1.0);
        assert_eq!(percentile(&data, 100.0), 5.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0];
        // rank = 0.5 * 3 = 1.5 → halfway between 2.0 and 3.0
        assert!((percentile(&data, 50.0) - 2.5).abs() < 1e-9);
    }

    // ── median ───────────────────────────────────────────────────────────────

    #[test]
    fn test_median_odd_sample() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
    }

    #[test]
    fn test_median_even_sample_interpolates() {
        assert!((median(&[4.0, 1.0, 3.0, 2.0]) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_median_empty_returns_zero() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_unsorted_input() {
        assert_eq!(median(&[500.0, 100.0, 300.0]), 300.0);
    }

    // ── pct_change ───────────────────────────────────────────────────────────

    #[test]
    fn test_pct_change_increase() {
        assert!((pct_change(100.0, 110.0).unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_pct_change_decrease() {
        assert!((pct_change(200.0, 150.0).unwrap() - (-25.0)).abs() < 1e-9);
    }

    #[test]
    fn test_pct_change_zero_previous_is_none() {
        assert!(pct_change(0.0, 42.0).is_none());
    }
}
