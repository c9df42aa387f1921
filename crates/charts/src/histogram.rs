//! Histogram binning helpers.
//!
//! Pure data preparation for the chart renderers, kept separate from
//! drawing so the bucketing rules are testable without a backend.

/// One histogram bucket: `[start, end)` with its count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

/// Bucket `values` into `bins` equal-width bins spanning `[min, max]`.
///
/// Values outside the range are ignored; a value exactly at `max`
/// lands in the last bin.
pub fn linear_bins(values: &[f64], bins: usize, range: (f64, f64)) -> Vec<Bin> {
    let (min, max) = range;
    if bins == 0 || max <= min {
        return Vec::new();
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &value in values {
        if value < min || value > max {
            continue;
        }
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Bin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Bucket `values` into `bins` log10-spaced bins between the smallest
/// and largest value.
///
/// The lower edge clamps to 1.0 to avoid log-domain errors, and a
/// degenerate range (all values equal) widens by a decade, matching
/// how the log axis itself is ranged.
pub fn log_bins(values: &[f64], bins: usize) -> Vec<Bin> {
    if bins == 0 || values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b)).max(1.0);
    let mut max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    if min >= max {
        max = min * 10.0;
    }

    let log_min = min.log10();
    let log_width = (max.log10() - log_min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &value in values {
        let clamped = value.max(min);
        let index = (((clamped.log10() - log_min) / log_width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    (0..bins)
        .map(|i| Bin {
            start: 10f64.powf(log_min + i as f64 * log_width),
            end: 10f64.powf(log_min + (i + 1) as f64 * log_width),
            count: counts[i],
        })
        .collect()
}

/// Data range for histograms whose axis derives from the data.
///
/// Returns `None` for empty input; a constant series widens to a unit
/// span so bins keep nonzero width.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    if max > min {
        Some((min, max))
    } else {
        Some((min, min + 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_bins_rating_scale() {
        // 9 bins over the 0.5-5.0 scale gives 0.5-wide buckets
        let values = vec![0.5, 3.0, 3.25, 5.0, 5.0];
        let bins = linear_bins(&values, 9, (0.5, 5.0));

        assert_eq!(bins.len(), 9);
        assert_eq!(bins[0].start, 0.5);
        assert_eq!(bins[0].count, 1); // the 0.5
        assert_eq!(bins[5].count, 2); // 3.0 and 3.25 in [3.0, 3.5)
        assert_eq!(bins[8].count, 2); // values at max land in the last bin
    }

    #[test]
    fn test_linear_bins_ignores_out_of_range() {
        let values = vec![-1.0, 0.0, 10.0, 2.0];
        let bins = linear_bins(&values, 4, (0.5, 4.5));

        let total: u64 = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_linear_bins_degenerate_inputs() {
        assert!(linear_bins(&[1.0], 0, (0.0, 1.0)).is_empty());
        assert!(linear_bins(&[1.0], 5, (2.0, 2.0)).is_empty());
    }

    #[test]
    fn test_log_bins_cover_all_values() {
        let values: Vec<f64> = vec![1.0, 3.0, 10.0, 100.0, 5000.0];
        let bins = log_bins(&values, 100);

        assert_eq!(bins.len(), 100);
        let total: u64 = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len() as u64);
        // Edges span the data range
        assert!((bins[0].start - 1.0).abs() < 1e-9);
        assert!((bins[99].end - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn test_log_bins_constant_series() {
        // All movies with the same count still bin without a zero-width range
        let bins = log_bins(&[7.0, 7.0, 7.0], 10);
        assert_eq!(bins.len(), 10);
        let total: u64 = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_value_range() {
        assert_eq!(value_range(&[]), None);
        assert_eq!(value_range(&[1.0, 4.0, 2.0]), Some((1.0, 4.0)));
        // Constant series widens to a unit span
        assert_eq!(value_range(&[2.5, 2.5]), Some((2.5, 3.5)));
    }
}
