//! Chart rendering for the analysis outputs.
//!
//! This module renders the four result charts as PNG files using the
//! [`plotters`] crate, with fixed filenames and 1200x800 resolution.
//! Drawing uses the bitmap backend's font rendering, which works in
//! headless environments without system font dependencies.

use crate::histogram::{linear_bins, log_bins, value_range, Bin};
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Output resolution for every chart
const CHART_SIZE: (u32, u32) = (1200, 800);

/// The fixed discrete rating scale of the dataset
const RATING_SCALE: (f64, f64) = (0.5, 5.0);

/// Fixed output filenames
pub const RATING_DISTRIBUTION_FILE: &str = "rating_distribution.png";
pub const MOVIE_POPULARITY_FILE: &str = "movie_popularity.png";
pub const USER_ENTROPY_FILE: &str = "user_genre_entropy.png";
pub const GENRE_DISTRIBUTION_FILE: &str = "global_genre_distribution.png";

/// Histogram of raw rating values, 9 bins spanning the fixed scale.
pub fn render_rating_distribution(ratings: &[f32], output_dir: &Path) -> Result<()> {
    if ratings.is_empty() {
        return Err(PlotError::InvalidData(
            "Rating values cannot be empty".to_string(),
        ));
    }

    let values: Vec<f64> = ratings.iter().map(|&r| r as f64).collect();
    let bins = linear_bins(&values, 9, RATING_SCALE);
    draw_linear_histogram(
        &bins,
        "Rating Distribution",
        "Rating",
        "Count",
        &output_dir.join(RATING_DISTRIBUTION_FILE),
    )
}

/// Histogram of per-movie rating counts, 100 bins on a logarithmic
/// x-axis.
pub fn render_movie_popularity(rating_counts: &[u64], output_dir: &Path) -> Result<()> {
    if rating_counts.is_empty() {
        return Err(PlotError::InvalidData(
            "Rating counts cannot be empty".to_string(),
        ));
    }

    let values: Vec<f64> = rating_counts.iter().map(|&c| c as f64).collect();
    let bins = log_bins(&values, 100);
    draw_log_histogram(
        &bins,
        "Movie Popularity (Ratings per Movie)",
        "Number of Ratings (log scale)",
        "Number of Movies",
        &output_dir.join(MOVIE_POPULARITY_FILE),
    )
}

/// Histogram of per-user genre entropy, 40 bins over the observed
/// range.
pub fn render_user_entropy(entropies: &[f64], output_dir: &Path) -> Result<()> {
    let range = value_range(entropies).ok_or_else(|| {
        PlotError::InvalidData("Entropy values cannot be empty".to_string())
    })?;

    let bins = linear_bins(entropies, 40, range);
    draw_linear_histogram(
        &bins,
        "User Genre Diversity (Shannon Entropy)",
        "Entropy",
        "Number of Users",
        &output_dir.join(USER_ENTROPY_FILE),
    )
}

/// Bar chart of global genre proportions, one bar per genre in the
/// given order, x labels rotated for legibility.
pub fn render_genre_distribution(shares: &[(String, f64)], output_dir: &Path) -> Result<()> {
    if shares.is_empty() {
        return Err(PlotError::InvalidData(
            "Genre shares cannot be empty".to_string(),
        ));
    }

    let output_path = output_dir.join(GENRE_DISTRIBUTION_FILE);
    let root = BitMapBackend::new(&output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let top_share = shares.iter().map(|(_, p)| *p).fold(0.0f64, f64::max);
    let y_max = if top_share > 0.0 { top_share * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption("Global Genre Distribution", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(140)
        .y_label_area_size(85)
        .build_cartesian_2d(0..shares.len() as i32, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(shares.len())
        .x_label_formatter(&|x| {
            shares
                .get(*x as usize)
                .map(|(genre, _)| genre.clone())
                .unwrap_or_default()
        })
        .label_style(("sans-serif", 25))
        .x_label_style(
            ("sans-serif", 20)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc("Proportion of Ratings")
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(shares.iter().enumerate().map(|(index, (_, proportion))| {
            Rectangle::new(
                [(index as i32, 0.0), (index as i32 + 1, *proportion)],
                BLUE.filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Draws binned counts as bars on a linear x-axis.
fn draw_linear_histogram(
    bins: &[Bin],
    title: &str,
    x_label: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let x_min = bins.first().map(|b| b.start).unwrap_or(0.0);
    let x_max = bins.last().map(|b| b.end).unwrap_or(1.0);
    let y_max = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64 * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Draws binned counts as bars on a base-10 logarithmic x-axis.
fn draw_log_histogram(
    bins: &[Bin],
    title: &str,
    x_label: &str,
    y_label: &str,
    output_path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // log_bins guarantees edges >= 1.0, keeping the axis in log domain
    let x_min = bins.first().map(|b| b.start).unwrap_or(1.0);
    let x_max = bins.last().map(|b| b.end).unwrap_or(10.0);
    let y_max = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64 * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d((x_min..x_max).log_scale(), 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(("sans-serif", 25))
        .x_label_formatter(&|x| format!("{:.0}", x.round()))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_renderers_reject_empty_data() {
        let dir = std::env::temp_dir();

        assert!(matches!(
            render_rating_distribution(&[], &dir),
            Err(PlotError::InvalidData(_))
        ));
        assert!(matches!(
            render_movie_popularity(&[], &dir),
            Err(PlotError::InvalidData(_))
        ));
        assert!(matches!(
            render_user_entropy(&[], &dir),
            Err(PlotError::InvalidData(_))
        ));
        assert!(matches!(
            render_genre_distribution(&[], &dir),
            Err(PlotError::InvalidData(_))
        ));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_all_charts() {
        let dir = std::env::temp_dir().join("reel-stats-chart-tests");
        fs::create_dir_all(&dir).unwrap();

        let ratings = vec![0.5f32, 3.0, 3.5, 4.0, 4.0, 5.0];
        render_rating_distribution(&ratings, &dir).unwrap();
        assert!(dir.join(RATING_DISTRIBUTION_FILE).exists());

        let counts = vec![1u64, 5, 12, 300, 4000];
        render_movie_popularity(&counts, &dir).unwrap();
        assert!(dir.join(MOVIE_POPULARITY_FILE).exists());

        let entropies = vec![0.0, 0.9, 1.5, 2.7, 3.1];
        render_user_entropy(&entropies, &dir).unwrap();
        assert!(dir.join(USER_ENTROPY_FILE).exists());

        let shares = vec![
            ("Drama".to_string(), 0.4),
            ("Comedy".to_string(), 0.35),
            ("Action".to_string(), 0.25),
        ];
        render_genre_distribution(&shares, &dir).unwrap();
        assert!(dir.join(GENRE_DISTRIBUTION_FILE).exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_output_is_fatal() {
        let missing = std::env::temp_dir()
            .join("reel-stats-chart-tests-missing")
            .join("nested");

        // Parent directory does not exist; the backend cannot save
        let result = render_rating_distribution(&[4.0], &missing);
        assert!(result.is_err());
    }
}
