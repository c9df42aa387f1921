//! Summary serialization.
//!
//! The four scalar results are persisted as a one-row CSV next to the
//! chart images, the only non-image output of a run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed output filename for the summary row
pub const SUMMARY_FILE: &str = "summary_stats.csv";

/// The one-row result record persisted alongside the charts.
///
/// Field names double as the CSV header columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub n_users: u64,
    pub n_movies: u64,
    pub total_ratings: u64,
    pub average_genre_entropy: f64,
}

/// Write the summary as a header plus a single data row to
/// `summary_stats.csv` under `output_dir`.
///
/// Unconditionally overwrites any prior file at that path.
pub fn write_summary(summary: &Summary, output_dir: &Path) -> Result<()> {
    let path = output_dir.join(SUMMARY_FILE);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer
        .serialize(summary)
        .context("Failed to serialize summary row")?;
    writer.flush().context("Failed to flush summary file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_summary_round_trip() {
        let dir = std::env::temp_dir().join("reel-stats-summary-test");
        fs::create_dir_all(&dir).unwrap();

        let summary = Summary {
            n_users: 162541,
            n_movies: 59047,
            total_ratings: 25000095,
            average_genre_entropy: 2.73525,
        };
        write_summary(&summary, &dir).unwrap();

        // Re-parsing reproduces the exact in-memory scalars
        let mut reader = csv::Reader::from_path(dir.join(SUMMARY_FILE)).unwrap();
        let parsed: Summary = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(parsed, summary);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_summary_overwrites() {
        let dir = std::env::temp_dir().join("reel-stats-summary-overwrite-test");
        fs::create_dir_all(&dir).unwrap();

        let first = Summary {
            n_users: 1,
            n_movies: 1,
            total_ratings: 1,
            average_genre_entropy: 0.0,
        };
        let second = Summary {
            n_users: 2,
            n_movies: 2,
            total_ratings: 2,
            average_genre_entropy: 1.0,
        };
        write_summary(&first, &dir).unwrap();
        write_summary(&second, &dir).unwrap();

        let mut reader = csv::Reader::from_path(dir.join(SUMMARY_FILE)).unwrap();
        let rows: Vec<Summary> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, vec![second]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_summary_unwritable_dir_fails() {
        let missing = std::env::temp_dir()
            .join("reel-stats-summary-test-missing")
            .join("nested");
        let summary = Summary {
            n_users: 0,
            n_movies: 0,
            total_ratings: 0,
            average_genre_entropy: 0.0,
        };
        assert!(write_summary(&summary, &missing).is_err());
    }
}
